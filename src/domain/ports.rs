use crate::domain::model::FetchPreview;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Files: Send + Sync {
    fn read(&self, name: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write(
        &self,
        name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where the demonstrations print. One line per call, no buffering.
pub trait Console: Send + Sync {
    fn line(&self, text: &str);
}

pub trait Settings: Send + Sync {
    fn data_dir(&self) -> &str;
    fn page_url(&self) -> &str;
    fn count_from(&self) -> u32;
    fn tick(&self) -> Duration;
}

/// One style of asynchronous control flow. Every implementation performs the
/// same five demonstrations and prints the same lines for the same inputs;
/// only the notation differs.
#[async_trait]
pub trait Notation: Send + Sync {
    fn name(&self) -> &'static str;

    /// Read the first file and print its trimmed contents.
    async fn read_single(&self) -> Result<String>;

    /// Read the first file, then the file its contents name, and print the
    /// final contents. A failure at either step prints one error notice and
    /// stops the chain.
    async fn read_chain(&self) -> Result<String>;

    /// Print the numbers from the configured start down to one, one tick
    /// apart, then the closing line.
    async fn countdown(&self) -> Result<()>;

    /// Fetch the configured page and print a one-line summary of it.
    async fn fetch_page(&self) -> Result<FetchPreview>;

    /// Print markers 1 and 2 synchronously with deferred markers 3 and 4
    /// queued in between. The observed order is 1, 2, 3, 4: deferred work
    /// runs only once the synchronous block has finished. Deterministic on a
    /// current-thread runtime.
    async fn markers(&self) -> Result<()>;
}
