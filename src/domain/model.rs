/// Name of the file every file demonstration starts from. Its contents name
/// the next file in the chain.
pub const FIRST_FILE: &str = "one";

/// Longest body preview carried in a [`FetchPreview`].
const PREVIEW_CHARS: usize = 80;

/// What one page fetch produced, condensed to a printable summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPreview {
    pub status: u16,
    pub first_line: String,
    /// Number of top-level items when the body parses as a JSON array.
    pub records: Option<usize>,
}

impl FetchPreview {
    pub fn from_body(status: u16, body: &str) -> Self {
        let first_line = body
            .lines()
            .next()
            .unwrap_or("")
            .trim_end()
            .chars()
            .take(PREVIEW_CHARS)
            .collect();

        let records = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.as_array().map(|items| items.len()));

        Self {
            status,
            first_line,
            records,
        }
    }

    pub fn describe(&self) -> String {
        match self.records {
            Some(count) => format!("{} -> {} records", self.status, count),
            None if self.first_line.is_empty() => format!("{} -> empty reply", self.status),
            None => format!("{} -> {}", self.status, self.first_line),
        }
    }
}

/// What one notation reported after a full tour run. `None` means that demo
/// ended in its error path.
#[derive(Debug, Clone)]
pub struct StyleReport {
    pub notation: String,
    pub single: Option<String>,
    pub chain: Option<String>,
    pub fetch: Option<FetchPreview>,
}

impl StyleReport {
    /// Two notations agree when they produced the same values, whatever they
    /// were. The notation name is deliberately not compared.
    pub fn agrees_with(&self, other: &StyleReport) -> bool {
        self.single == other.single && self.chain == other.chain && self.fetch == other.fetch
    }
}
