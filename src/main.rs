use async_tour::utils::{logger, validation::Validate};
use async_tour::{
    AwaitedStyle, CallbackStyle, ChainedStyle, CliConfig, DataDir, Result, Settings, StyleReport,
    TermConsole, TomlConfig, TourEngine,
};
use clap::Parser;
use std::sync::Arc;

// The single-threaded flavor is what makes the interleaving demo
// deterministic: spawned work can only run while the main task is suspended
// at an await.
#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting async-tour CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {e}");
        std::process::exit(1);
    }

    let styles = config.selected_styles();
    let monitor = config.monitor;
    if monitor {
        tracing::info!("🔍 Run monitoring enabled");
    }

    let outcome = if let Some(path) = config.config.clone() {
        tracing::info!("📄 Loading tunables from {}", path);
        match TomlConfig::from_file(&path) {
            Ok(file_config) => {
                if let Err(e) = file_config.validate() {
                    tracing::error!("❌ Configuration validation failed: {}", e);
                    eprintln!("❌ {e}");
                    std::process::exit(1);
                }
                run_tour(file_config, &styles, monitor).await
            }
            Err(e) => Err(e),
        }
    } else {
        run_tour(config, &styles, monitor).await
    };

    match outcome {
        Ok(()) => {
            tracing::info!("✅ Tour completed");
            println!("✅ Tour completed");
        }
        Err(e) => {
            tracing::error!("❌ Tour failed before the demos could run: {}", e);
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Seeds the data directory, then walks each requested notation through the
/// demo sequence and compares what they reported.
async fn run_tour<G>(settings: G, styles: &[&'static str], monitor: bool) -> Result<()>
where
    G: Settings + Clone + 'static,
{
    let data = DataDir::new(settings.data_dir().to_string());
    data.ensure_sample_chain().await?;
    let files = Arc::new(data);
    let console = Arc::new(TermConsole);

    let mut reports: Vec<StyleReport> = Vec::new();
    for style in styles {
        let report = match *style {
            "callbacks" => {
                let notation =
                    CallbackStyle::new(Arc::clone(&files), Arc::clone(&console), settings.clone());
                TourEngine::new_with_monitoring(notation, monitor).run().await
            }
            "chained" => {
                let notation =
                    ChainedStyle::new(Arc::clone(&files), Arc::clone(&console), settings.clone());
                TourEngine::new_with_monitoring(notation, monitor).run().await
            }
            "awaited" => {
                let notation =
                    AwaitedStyle::new(Arc::clone(&files), Arc::clone(&console), settings.clone());
                TourEngine::new_with_monitoring(notation, monitor).run().await
            }
            other => {
                tracing::warn!("Unknown style {} slipped past validation", other);
                continue;
            }
        };
        reports.push(report);
    }

    if reports.len() > 1 {
        if reports.windows(2).all(|pair| pair[0].agrees_with(&pair[1])) {
            println!("✅ All notations told the same story");
        } else {
            println!("❌ The notations disagreed; compare the transcripts above");
        }
    }

    Ok(())
}
