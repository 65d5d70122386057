use crate::domain::ports::Console;

/// The console every demonstration writes to when the crate runs as a CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct TermConsole;

impl Console for TermConsole {
    fn line(&self, text: &str) {
        println!("{text}");
    }
}

/// Turns raw file bytes into the text the demonstrations print: lossy UTF-8
/// with trailing whitespace removed. Leading whitespace is kept.
pub fn printable(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim_end().to_string()
}
