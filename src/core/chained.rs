//! The combinator notation.
//!
//! Futures are assembled with `and_then`, `map_ok` and friends into one
//! value that is awaited a single time at the end. Success flows down the
//! chain; the first failure skips every remaining success step and lands in
//! `inspect_err`.

use crate::core::{
    hop_line, interrupted, notice_line, Console, FetchPreview, Files, Notation, Result, Settings,
    FIRST_FILE, LIFTOFF_LINE,
};
use crate::utils::console::printable;
use crate::utils::error::TourError;
use async_trait::async_trait;
use futures::future::{self, BoxFuture};
use futures::{FutureExt, TryFutureExt};
use reqwest::Client;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// A read whose future owns everything it needs, so it can be returned from
/// an `and_then` closure without borrowing from the caller.
fn read_owned<F>(
    files: &Arc<F>,
    name: String,
) -> impl Future<Output = Result<Vec<u8>>> + Send + 'static
where
    F: Files + 'static,
{
    let files = Arc::clone(files);
    async move { files.read(&name).await }
}

/// Builds the countdown as one boxed chain. Each link sleeps, prints the
/// number it owns and hands the console to the next link.
fn count_down_from<C>(console: Arc<C>, remaining: u32, tick: Duration) -> BoxFuture<'static, ()>
where
    C: Console + 'static,
{
    if remaining == 0 {
        return future::lazy(move |_| console.line(LIFTOFF_LINE)).boxed();
    }
    sleep(tick)
        .map(move |_| {
            console.line(&remaining.to_string());
            console
        })
        .then(move |console| count_down_from(console, remaining - 1, tick))
        .boxed()
}

/// Runs the demos as combinator chains over the same primitives the other
/// notations use.
pub struct ChainedStyle<F: Files, C: Console, G: Settings> {
    files: Arc<F>,
    console: Arc<C>,
    settings: G,
    client: Client,
}

impl<F: Files, C: Console, G: Settings> ChainedStyle<F, C, G> {
    pub fn new(files: Arc<F>, console: Arc<C>, settings: G) -> Self {
        Self {
            files,
            console,
            settings,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl<F, C, G> Notation for ChainedStyle<F, C, G>
where
    F: Files + 'static,
    C: Console + 'static,
    G: Settings,
{
    fn name(&self) -> &'static str {
        "chained"
    }

    async fn read_single(&self) -> Result<String> {
        let shown = Arc::clone(&self.console);
        let caught = Arc::clone(&self.console);
        read_owned(&self.files, FIRST_FILE.to_string())
            .map_ok(|bytes| printable(&bytes))
            .inspect_ok(move |text| shown.line(text))
            .inspect_err(move |e| caught.line(&notice_line(e)))
            .await
    }

    async fn read_chain(&self) -> Result<String> {
        let files = Arc::clone(&self.files);
        let hopped = Arc::clone(&self.console);
        let shown = Arc::clone(&self.console);
        let caught = Arc::clone(&self.console);
        // A failed first read skips the and_then closure entirely, so the
        // second read is never started.
        read_owned(&self.files, FIRST_FILE.to_string())
            .and_then(move |bytes| {
                let next = printable(&bytes);
                hopped.line(&hop_line(&next));
                read_owned(&files, next)
            })
            .map_ok(|bytes| printable(&bytes))
            .inspect_ok(move |text| shown.line(text))
            .inspect_err(move |e| caught.line(&notice_line(e)))
            .await
    }

    async fn countdown(&self) -> Result<()> {
        count_down_from(
            Arc::clone(&self.console),
            self.settings.count_from(),
            self.settings.tick(),
        )
        .await;
        Ok(())
    }

    async fn fetch_page(&self) -> Result<FetchPreview> {
        let shown = Arc::clone(&self.console);
        let caught = Arc::clone(&self.console);
        self.client
            .get(self.settings.page_url())
            .send()
            .and_then(|response| {
                let status = response.status().as_u16();
                response
                    .text()
                    .map_ok(move |body| FetchPreview::from_body(status, &body))
            })
            .err_into::<TourError>()
            .inspect_ok(move |preview| shown.line(&preview.describe()))
            .inspect_err(move |e| caught.line(&notice_line(e)))
            .await
    }

    async fn markers(&self) -> Result<()> {
        self.console.line("1");

        let deferred = Arc::clone(&self.console);
        let three = tokio::spawn(sleep(Duration::ZERO).map(move |_| deferred.line("3")));

        let delayed = Arc::clone(&self.console);
        let four = tokio::spawn(sleep(self.settings.tick()).map(move |_| delayed.line("4")));

        self.console.line("2");

        three
            .await
            .map_err(|e| interrupted(format!("first deferred marker task failed: {e}")))?;
        four.await
            .map_err(|e| interrupted(format!("second deferred marker task failed: {e}")))?;
        Ok(())
    }
}
