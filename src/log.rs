//! The on-screen scan log: structured lines, append only.

use std::fmt;

use serde::{Deserialize, Serialize};
use taplog_macros::impl_default_for;

/// One rendered line: a bold label plus an optional plain detail. How the
/// pair is styled is the host's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Record)]
pub struct LogEntry {
    pub label: String,
    pub detail: Option<String>,
}

impl LogEntry {
    pub fn new(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self { label: label.into(), detail: Some(detail.into()) }
    }

    /// A label-only line, for entries with nothing to detail.
    pub fn header(label: impl Into<String>) -> Self {
        Self { label: label.into(), detail: None }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{}: {}", self.label, detail),
            None => write!(f, "{}", self.label),
        }
    }
}

/// Every line rendered this session, in append order. Grows monotonically and
/// is never pruned; the only persistence is the rotation snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanLog {
    entries: Vec<LogEntry>,
}

impl_default_for!(ScanLog);

impl ScanLog {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = LogEntry>) {
        self.entries.extend(entries);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
