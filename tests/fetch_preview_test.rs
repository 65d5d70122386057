use anyhow::Result;
use async_tour::{
    AwaitedStyle, CallbackStyle, ChainedStyle, Console, DataDir, Files, Notation, Settings,
    StyleReport, TourEngine, TourError,
};
use httpmock::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

#[derive(Default)]
struct RecordingConsole {
    lines: Mutex<Vec<String>>,
}

impl Console for RecordingConsole {
    fn line(&self, text: &str) {
        self.lines.lock().unwrap().push(text.to_string());
    }
}

impl RecordingConsole {
    fn transcript(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

/// File port for fetch-only tests; reads always fail, writes vanish.
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

#[derive(Clone)]
struct TourSettings {
    data_dir: String,
    page_url: String,
}

impl Settings for TourSettings {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn page_url(&self) -> &str {
        &self.page_url
    }

    fn count_from(&self) -> u32 {
        1
    }

    fn tick(&self) -> Duration {
        Duration::from_millis(5)
    }
}

fn fetch_only_settings(page_url: String) -> TourSettings {
    TourSettings {
        data_dir: ".".to_string(),
        page_url,
    }
}

fn fetch_notations(
    settings: &TourSettings,
) -> Vec<(Arc<RecordingConsole>, Box<dyn Notation>)> {
    let files = Arc::new(NoData);
    let mut notations: Vec<(Arc<RecordingConsole>, Box<dyn Notation>)> = Vec::new();

    let console = Arc::new(RecordingConsole::default());
    notations.push((
        Arc::clone(&console),
        Box::new(CallbackStyle::new(
            Arc::clone(&files),
            console,
            settings.clone(),
        )),
    ));

    let console = Arc::new(RecordingConsole::default());
    notations.push((
        Arc::clone(&console),
        Box::new(ChainedStyle::new(
            Arc::clone(&files),
            console,
            settings.clone(),
        )),
    ));

    let console = Arc::new(RecordingConsole::default());
    notations.push((
        Arc::clone(&console),
        Box::new(AwaitedStyle::new(
            Arc::clone(&files),
            console,
            settings.clone(),
        )),
    ));

    notations
}

#[tokio::test]
async fn test_fetch_counts_records_of_a_json_array() -> Result<()> {
    let server = MockServer::start();
    let posts_mock = server.mock(|when, then| {
        when.method(GET).path("/posts");
        then.status(200).json_body(serde_json::json!([
            {"id": 1, "title": "first"},
            {"id": 2, "title": "second"},
            {"id": 3, "title": "third"}
        ]));
    });

    let settings = fetch_only_settings(server.url("/posts"));

    let mut previews = Vec::new();
    for (console, notation) in fetch_notations(&settings) {
        let preview = notation.fetch_page().await?;
        assert_eq!(preview.status, 200);
        assert_eq!(preview.records, Some(3));
        assert_eq!(console.transcript(), vec!["200 -> 3 records"]);
        previews.push(preview);
    }

    assert_eq!(previews[0], previews[1]);
    assert_eq!(previews[1], previews[2]);

    // One request per notation.
    posts_mock.assert_hits(3);

    println!("✅ Every notation saw the same 3-record page");
    Ok(())
}

#[tokio::test]
async fn test_non_2xx_status_is_still_a_delivered_page() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/broken");
        then.status(500).body("oops");
    });

    let settings = fetch_only_settings(server.url("/broken"));

    for (console, notation) in fetch_notations(&settings) {
        let preview = notation.fetch_page().await?;
        assert_eq!(preview.status, 500);
        assert_eq!(preview.records, None);

        // The status line is reported; no error notice appears.
        assert_eq!(console.transcript(), vec!["500 -> oops"]);
    }

    Ok(())
}

#[tokio::test]
async fn test_unreachable_host_prints_the_notice() -> Result<()> {
    // Port 1 refuses connections, so the transport itself fails.
    let settings = fetch_only_settings("http://127.0.0.1:1/".to_string());

    for (console, notation) in fetch_notations(&settings) {
        let outcome = notation.fetch_page().await;
        assert!(outcome.is_err(), "{} should fail", notation.name());

        let transcript = console.transcript();
        assert_eq!(transcript.len(), 1);
        assert!(transcript[0].starts_with("something went wrong:"));
    }

    Ok(())
}

#[tokio::test]
async fn test_full_tour_reports_agree_across_notations() -> Result<()> {
    let server = MockServer::start();
    let posts_mock = server.mock(|when, then| {
        when.method(GET).path("/posts");
        then.status(200).json_body(serde_json::json!([
            {"id": 1, "title": "first"},
            {"id": 2, "title": "second"}
        ]));
    });

    let temp_dir = TempDir::new()?;
    let data_dir = temp_dir.path().to_str().unwrap().to_string();
    let data = DataDir::new(data_dir.clone());
    data.ensure_sample_chain().await?;

    let settings = TourSettings {
        data_dir,
        page_url: server.url("/posts"),
    };

    let files = Arc::new(data);
    let mut reports: Vec<StyleReport> = Vec::new();

    let console = Arc::new(RecordingConsole::default());
    let engine = TourEngine::new(CallbackStyle::new(
        Arc::clone(&files),
        console,
        settings.clone(),
    ));
    reports.push(engine.run().await);

    let console = Arc::new(RecordingConsole::default());
    let engine = TourEngine::new(ChainedStyle::new(
        Arc::clone(&files),
        console,
        settings.clone(),
    ));
    reports.push(engine.run().await);

    let console = Arc::new(RecordingConsole::default());
    let engine = TourEngine::new(AwaitedStyle::new(
        Arc::clone(&files),
        console,
        settings.clone(),
    ));
    reports.push(engine.run().await);

    assert!(reports[0].agrees_with(&reports[1]));
    assert!(reports[1].agrees_with(&reports[2]));

    assert_eq!(reports[0].single.as_deref(), Some("two"));
    assert_eq!(
        reports[0].chain.as_deref(),
        Some("hello from the end of the chain")
    );
    let preview = reports[0].fetch.as_ref().unwrap();
    assert_eq!(preview.status, 200);
    assert_eq!(preview.records, Some(2));

    posts_mock.assert_hits(3);

    println!("✅ Full tour reports agree across all notations");
    Ok(())
}
