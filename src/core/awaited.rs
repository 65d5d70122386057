//! The suspend/resume notation.
//!
//! Bodies read top to bottom and pause at each `.await`. An inner async
//! block plays the role of a catch boundary: `?` aborts the block, and the
//! match underneath prints either the result or the notice.

use crate::core::{
    hop_line, interrupted, notice_line, Console, FetchPreview, Files, Notation, Result, Settings,
    FIRST_FILE, LIFTOFF_LINE,
};
use crate::utils::console::printable;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

pub struct AwaitedStyle<F: Files, C: Console, G: Settings> {
    files: Arc<F>,
    console: Arc<C>,
    settings: G,
    client: Client,
}

impl<F: Files, C: Console, G: Settings> AwaitedStyle<F, C, G> {
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
impl<F, C, G> Notation for AwaitedStyle<F, C, G>
where
    F: Files + 'static,
    C: Console + 'static,
    G: Settings,
{
    fn name(&self) -> &'static str {
        "awaited"
    }

    async fn read_single(&self) -> Result<String> {
        let outcome: Result<String> = async {
            let bytes = self.files.read(FIRST_FILE).await?;
            Ok(printable(&bytes))
        }
        .await;
        match &outcome {
            Ok(text) => self.console.line(text),
            Err(e) => self.console.line(&notice_line(e)),
        }
        outcome
    }

    async fn read_chain(&self) -> Result<String> {
        let outcome: Result<String> = async {
            let bytes = self.files.read(FIRST_FILE).await?;
            let next = printable(&bytes);
            self.console.line(&hop_line(&next));
            let bytes = self.files.read(&next).await?;
            Ok(printable(&bytes))
        }
        .await;
        match &outcome {
            Ok(text) => self.console.line(text),
            Err(e) => self.console.line(&notice_line(e)),
        }
        outcome
    }

    async fn countdown(&self) -> Result<()> {
        let mut remaining = self.settings.count_from();
        while remaining > 0 {
            sleep(self.settings.tick()).await;
            self.console.line(&remaining.to_string());
            remaining -= 1;
        }
        self.console.line(LIFTOFF_LINE);
        Ok(())
    }

    async fn fetch_page(&self) -> Result<FetchPreview> {
        let outcome: Result<FetchPreview> = async {
            let response = self.client.get(self.settings.page_url()).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(FetchPreview::from_body(status, &body))
        }
        .await;
        match &outcome {
            Ok(preview) => self.console.line(&preview.describe()),
            Err(e) => self.console.line(&notice_line(e)),
        }
        outcome
    }

    async fn markers(&self) -> Result<()> {
        self.console.line("1");

        let deferred = Arc::clone(&self.console);
        let three = tokio::spawn(async move {
            sleep(Duration::ZERO).await;
            deferred.line("3");
        });

        let delayed = Arc::clone(&self.console);
        let tick = self.settings.tick();
        let four = tokio::spawn(async move {
            sleep(tick).await;
            delayed.line("4");
        });

        self.console.line("2");

        three
            .await
            .map_err(|e| interrupted(format!("first deferred marker task failed: {e}")))?;
        four.await
            .map_err(|e| interrupted(format!("second deferred marker task failed: {e}")))?;
        Ok(())
    }
}
