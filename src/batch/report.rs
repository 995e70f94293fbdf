//! Per-entry outcomes of a batch run

use std::fmt;

/// Result of processing one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    /// The operation succeeded
    Done(String),
    /// The entry was malformed and not sent to the API
    Skipped(String),
    /// The operation ran and failed
    Failed(String),
}

/// Outcome of one batch entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    /// 1-based line number in the input file
    pub line: u64,
    /// Workspace reference the entry targets
    pub target: String,
    pub status: EntryStatus,
}

impl fmt::Display for EntryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            EntryStatus::Done(msg) => write!(f, "✓ [line {}] {}", self.line, msg),
            EntryStatus::Skipped(msg) => write!(f, "! [line {}] skipped: {}", self.line, msg),
            EntryStatus::Failed(msg) => write!(f, "✗ [line {}] {}", self.line, msg),
        }
    }
}

/// Counts of a finished batch
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub done: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_reports(reports: &[EntryReport]) -> Self {
        reports
            .iter()
            .fold(Self::default(), |mut acc, report| {
                match report.status {
                    EntryStatus::Done(_) => acc.done += 1,
                    EntryStatus::Skipped(_) => acc.skipped += 1,
                    EntryStatus::Failed(_) => acc.failed += 1,
                }
                acc
            })
    }

    pub fn total(&self) -> usize {
        self.done + self.skipped + self.failed
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries: {} done, {} skipped, {} failed",
            self.total(),
            self.done,
            self.skipped,
            self.failed
        )
    }
}
