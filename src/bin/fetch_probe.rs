use anyhow::{Context, Result};
use async_tour::config::DEFAULT_PAGE_URL;
use async_tour::utils::validation::validate_url;
use async_tour::{
    AwaitedStyle, CallbackStyle, ChainedStyle, Files, Notation, Settings, TermConsole, TourError,
};
use std::sync::Arc;
use std::time::Duration;

/// Settings for a probe run. Only the URL matters; the file and countdown
/// knobs are never exercised here.
#[derive(Clone)]
struct ProbeSettings {
    page_url: String,
}

impl Settings for ProbeSettings {
    fn data_dir(&self) -> &str {
        "."
    }

    fn page_url(&self) -> &str {
        &self.page_url
    }

    fn count_from(&self) -> u32 {
        0
    }

    fn tick(&self) -> Duration {
        Duration::from_millis(0)
    }
}

/// File port that refuses every read. The fetch demo never touches files.
struct NoData;

impl Files for NoData {
    fn read(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = async_tour::Result<Vec<u8>>> + Send {
        let name = name.to_string();
        async move {
            Err(TourError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {name}"),
            )))
        }
    }

    fn write(
        &self,
        _name: &str,
        _data: &[u8],
    ) -> impl std::future::Future<Output = async_tour::Result<()>> + Send {
        async { Ok(()) }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PAGE_URL.to_string());

    println!("🚀 Probing {url} with every notation");
    validate_url("url", &url).context("the probe needs an http or https URL")?;

    let files = Arc::new(NoData);
    let console = Arc::new(TermConsole);
    let settings = ProbeSettings {
        page_url: url.clone(),
    };

    let notations: Vec<Box<dyn Notation>> = vec![
        Box::new(CallbackStyle::new(
            Arc::clone(&files),
            Arc::clone(&console),
            settings.clone(),
        )),
        Box::new(ChainedStyle::new(
            Arc::clone(&files),
            Arc::clone(&console),
            settings.clone(),
        )),
        Box::new(AwaitedStyle::new(
            Arc::clone(&files),
            Arc::clone(&console),
            settings,
        )),
    ];

    let mut previews = Vec::new();
    for notation in &notations {
        println!("🔎 {} notation", notation.name());
        match notation.fetch_page().await {
            Ok(preview) => previews.push(preview),
            Err(e) => tracing::warn!("{} fetch ended in its error path: {}", notation.name(), e),
        }
    }

    if previews.len() == notations.len() && previews.windows(2).all(|pair| pair[0] == pair[1]) {
        println!("✅ All notations saw the same page");
    } else if previews.is_empty() {
        println!("❌ No notation could reach {url}");
    } else {
        println!("⚠️ The notations did not all report the same page");
    }

    Ok(())
}
