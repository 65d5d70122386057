use crate::config::{DEFAULT_COUNT, DEFAULT_DATA_DIR, DEFAULT_PAGE_URL, DEFAULT_TICK_MS};
use crate::domain::ports::Settings;
use crate::utils::error::{Result, TourError};
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// The same tunables as the CLI flags, supplied as a TOML file. Every section
/// and key is optional; anything missing falls back to the CLI defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub tour: Option<TourMeta>,
    #[serde(default)]
    pub chain: ChainConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub countdown: CountdownConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourMeta {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_page_url")]
    pub page_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownConfig {
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_url: default_page_url(),
        }
    }
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            tick_ms: default_tick_ms(),
        }
    }
}

fn default_data_dir() -> String {
    DEFAULT_DATA_DIR.to_string()
}

fn default_page_url() -> String {
    DEFAULT_PAGE_URL.to_string()
}

fn default_count() -> u32 {
    DEFAULT_COUNT
}

fn default_tick_ms() -> u64 {
    DEFAULT_TICK_MS
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TourError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TourError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Settings for TomlConfig {
    fn data_dir(&self) -> &str {
        &self.chain.data_dir
    }

    fn page_url(&self) -> &str {
        &self.fetch.page_url
    }

    fn count_from(&self) -> u32 {
        self.countdown.count
    }

    fn tick(&self) -> Duration {
        Duration::from_millis(self.countdown.tick_ms)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("fetch.page_url", &self.fetch.page_url)?;
        validate_path("chain.data_dir", &self.chain.data_dir)?;
        validate_positive_number("countdown.count", u64::from(self.countdown.count), 1)?;
        validate_range("countdown.tick_ms", self.countdown.tick_ms, 1, 60_000)?;
        Ok(())
    }
}
