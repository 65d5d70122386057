// Core module - the three async notations and the engine that runs them

pub mod awaited;
pub mod callbacks;
pub mod chained;
pub mod engine;

pub use crate::domain::model::{FetchPreview, StyleReport, FIRST_FILE};
pub use crate::domain::ports::{Console, Files, Notation, Settings};
pub use crate::utils::error::Result;

use crate::utils::error::TourError;

/// Static prefix every notation prints in front of a caught failure.
pub const ERROR_NOTICE: &str = "something went wrong:";

/// Closing line of every countdown.
pub const LIFTOFF_LINE: &str = "liftoff";

/// The line printed between the two reads of a chain. Identical in every
/// notation so the transcripts can be compared verbatim.
pub fn hop_line(next: &str) -> String {
    format!("{FIRST_FILE} names {next}")
}

/// How a caught failure appears on the console, notice first.
pub fn notice_line(error: &TourError) -> String {
    format!("{ERROR_NOTICE} {error}")
}

pub(crate) fn interrupted(message: impl Into<String>) -> TourError {
    TourError::InterruptedError {
        message: message.into(),
    }
}
