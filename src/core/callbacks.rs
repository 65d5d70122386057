//! The callback-passing notation.
//!
//! Every deferred operation here takes a closure, and that closure is the
//! only way to observe the outcome. The free functions `read_later`, `after`
//! and `fetch_later` are the primitive vocabulary; [`CallbackStyle`] composes
//! them into the demos, nesting closures where one result feeds the next.

use crate::core::{
    hop_line, interrupted, notice_line, Console, FetchPreview, Files, Notation, Result, Settings,
    FIRST_FILE, LIFTOFF_LINE,
};
use crate::utils::console::printable;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

/// Starts a deferred read of `name` and hands the outcome to `done`.
pub fn read_later<F, K>(files: Arc<F>, name: String, done: K)
where
    F: Files + 'static,
    K: FnOnce(Result<Vec<u8>>) + Send + 'static,
{
    tokio::spawn(async move { done(files.read(&name).await) });
}

/// Runs `fired` once `delay` has passed, like a classic timer callback.
pub fn after<K>(delay: Duration, fired: K)
where
    K: FnOnce() + Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        fired();
    });
}

/// Fetches `url` and hands a condensed preview of the response to `done`.
/// A status outside 2xx is still a delivered page; only transport failures
/// reach the error arm.
pub fn fetch_later<K>(client: Client, url: String, done: K)
where
    K: FnOnce(Result<FetchPreview>) + Send + 'static,
{
    tokio::spawn(async move {
        let outcome: Result<FetchPreview> = async {
            let response = client.get(&url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(FetchPreview::from_body(status, &body))
        }
        .await;
        done(outcome);
    });
}

fn tick_down<C>(console: Arc<C>, remaining: u32, tick: Duration, done: oneshot::Sender<()>)
where
    C: Console + 'static,
{
    if remaining == 0 {
        console.line(LIFTOFF_LINE);
        let _ = done.send(());
        return;
    }
    after(tick, move || {
        console.line(&remaining.to_string());
        tick_down(console, remaining - 1, tick, done);
    });
}

/// Runs the demos with continuation-passing primitives only. The trait
/// methods bridge each nest of callbacks back to a future through a oneshot
/// channel, so all three notations share one calling convention.
pub struct CallbackStyle<F: Files, C: Console, G: Settings> {
    files: Arc<F>,
    console: Arc<C>,
    settings: G,
    client: Client,
}

impl<F: Files, C: Console, G: Settings> CallbackStyle<F, C, G> {
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
impl<F, C, G> Notation for CallbackStyle<F, C, G>
where
    F: Files + 'static,
    C: Console + 'static,
    G: Settings,
{
    fn name(&self) -> &'static str {
        "callbacks"
    }

    async fn read_single(&self) -> Result<String> {
        let (tx, rx) = oneshot::channel();
        let console = Arc::clone(&self.console);
        read_later(
            Arc::clone(&self.files),
            FIRST_FILE.to_string(),
            move |outcome| {
                let delivered = match outcome {
                    Ok(bytes) => {
                        let text = printable(&bytes);
                        console.line(&text);
                        Ok(text)
                    }
                    Err(e) => {
                        console.line(&notice_line(&e));
                        Err(e)
                    }
                };
                let _ = tx.send(delivered);
            },
        );
        rx.await
            .map_err(|_| interrupted("single read callback never reported back"))?
    }

    async fn read_chain(&self) -> Result<String> {
        let (tx, rx) = oneshot::channel();
        let files = Arc::clone(&self.files);
        let console = Arc::clone(&self.console);
        // The two-level pyramid: the second read only exists inside the
        // first read's callback, so a failed first read never starts it.
        read_later(
            Arc::clone(&self.files),
            FIRST_FILE.to_string(),
            move |first| match first {
                Ok(bytes) => {
                    let next = printable(&bytes);
                    console.line(&hop_line(&next));
                    read_later(files, next, move |second| {
                        let delivered = match second {
                            Ok(bytes) => {
                                let text = printable(&bytes);
                                console.line(&text);
                                Ok(text)
                            }
                            Err(e) => {
                                console.line(&notice_line(&e));
                                Err(e)
                            }
                        };
                        let _ = tx.send(delivered);
                    });
                }
                Err(e) => {
                    console.line(&notice_line(&e));
                    let _ = tx.send(Err(e));
                }
            },
        );
        rx.await
            .map_err(|_| interrupted("chained read callback never reported back"))?
    }

    async fn countdown(&self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        tick_down(
            Arc::clone(&self.console),
            self.settings.count_from(),
            self.settings.tick(),
            tx,
        );
        rx.await
            .map_err(|_| interrupted("countdown callback never reported back"))
    }

    async fn fetch_page(&self) -> Result<FetchPreview> {
        let (tx, rx) = oneshot::channel();
        let console = Arc::clone(&self.console);
        fetch_later(
            self.client.clone(),
            self.settings.page_url().to_string(),
            move |outcome| {
                let delivered = match outcome {
                    Ok(preview) => {
                        console.line(&preview.describe());
                        Ok(preview)
                    }
                    Err(e) => {
                        console.line(&notice_line(&e));
                        Err(e)
                    }
                };
                let _ = tx.send(delivered);
            },
        );
        rx.await
            .map_err(|_| interrupted("page fetch callback never reported back"))?
    }

    async fn markers(&self) -> Result<()> {
        let (tx3, rx3) = oneshot::channel();
        let (tx4, rx4) = oneshot::channel();

        self.console.line("1");

        let deferred = Arc::clone(&self.console);
        after(Duration::ZERO, move || {
            deferred.line("3");
            let _ = tx3.send(());
        });

        let delayed = Arc::clone(&self.console);
        after(self.settings.tick(), move || {
            delayed.line("4");
            let _ = tx4.send(());
        });

        self.console.line("2");

        rx3.await
            .map_err(|_| interrupted("first deferred marker never fired"))?;
        rx4.await
            .map_err(|_| interrupted("second deferred marker never fired"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::TourError;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MemFiles {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl Files for MemFiles {
        fn read(
            &self,
            name: &str,
        ) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send {
            let files = Arc::clone(&self.files);
            let name = name.to_string();
            async move {
                files.lock().await.get(&name).cloned().ok_or_else(|| {
                    TourError::IoError(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("File not found: {name}"),
                    ))
                })
            }
        }

        fn write(
            &self,
            name: &str,
            data: &[u8],
        ) -> impl std::future::Future<Output = Result<()>> + Send {
            let files = Arc::clone(&self.files);
            let name = name.to_string();
            let data = data.to_vec();
            async move {
                files.lock().await.insert(name, data);
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn after_runs_the_callback_later() {
        let (tx, rx) = oneshot::channel();
        after(Duration::from_millis(5), move || {
            let _ = tx.send("fired");
        });
        assert_eq!(rx.await.unwrap(), "fired");
    }

    #[tokio::test]
    async fn read_later_delivers_file_contents() {
        let files = Arc::new(MemFiles::default());
        files.write("one", b"two\n").await.unwrap();

        let (tx, rx) = oneshot::channel();
        read_later(files, "one".to_string(), move |outcome| {
            let _ = tx.send(outcome);
        });

        assert_eq!(rx.await.unwrap().unwrap(), b"two\n");
    }

    #[tokio::test]
    async fn read_later_reports_a_missing_file() {
        let files = Arc::new(MemFiles::default());
        let (tx, rx) = oneshot::channel();
        read_later(files, "absent".to_string(), move |outcome| {
            let _ = tx.send(outcome);
        });

        let outcome = rx.await.unwrap();
        assert!(matches!(outcome, Err(TourError::IoError(_))));
    }
}
