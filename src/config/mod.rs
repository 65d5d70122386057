pub mod data;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::Settings;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_one_of, validate_path, validate_positive_number, validate_range, validate_url,
    Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::time::Duration;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_PAGE_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_COUNT: u32 = 3;
pub const DEFAULT_TICK_MS: u64 = 500;

/// The notations the `--style` flag accepts, plus `all`.
pub const STYLE_CHOICES: &[&str] = &["all", "callbacks", "chained", "awaited"];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "async-tour")]
#[command(about = "A guided tour of asynchronous control-flow styles")]
pub struct CliConfig {
    #[arg(long, help = "TOML file supplying the tunables instead of flags")]
    pub config: Option<String>,

    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: String,

    #[arg(long, default_value = DEFAULT_PAGE_URL)]
    pub page_url: String,

    #[arg(long, default_value_t = DEFAULT_COUNT)]
    pub count: u32,

    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u64,

    #[arg(long, value_delimiter = ',', default_value = "all")]
    pub style: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Log elapsed time per demo")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Expands the `--style` flag into the notations to run, always in the
    /// tour's teaching order: callbacks, then chained, then awaited.
    pub fn selected_styles(&self) -> Vec<&'static str> {
        let run_all = self.style.iter().any(|s| s == "all");
        let mut picked = Vec::new();
        for choice in ["callbacks", "chained", "awaited"] {
            if run_all || self.style.iter().any(|s| s == choice) {
                picked.push(choice);
            }
        }
        picked
    }
}

#[cfg(feature = "cli")]
impl Settings for CliConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn page_url(&self) -> &str {
        &self.page_url
    }

    fn count_from(&self) -> u32 {
        self.count
    }

    fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("page_url", &self.page_url)?;
        validate_path("data_dir", &self.data_dir)?;
        validate_positive_number("count", u64::from(self.count), 1)?;
        validate_range("tick_ms", self.tick_ms, 1, 60_000)?;
        for style in &self.style {
            validate_one_of("style", style, STYLE_CHOICES)?;
        }
        Ok(())
    }
}
