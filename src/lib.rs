pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::data::DataDir;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{
    awaited::AwaitedStyle, callbacks::CallbackStyle, chained::ChainedStyle, engine::TourEngine,
};
pub use crate::domain::model::{FetchPreview, StyleReport};
pub use crate::domain::ports::{Console, Files, Notation, Settings};
pub use crate::utils::console::TermConsole;
pub use crate::utils::error::{Result, TourError};
