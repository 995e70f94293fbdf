//! Sequential batch execution over CSV list entries

use log::{debug, info, warn};
use std::future::Future;
use std::path::Path;

use super::entry::{read_entries, BatchEntry};
use super::report::{BatchSummary, EntryReport, EntryStatus};
use crate::error::Result;
use crate::ui::{create_spinner, finish_spinner};

/// Expected shape of the lines of a list file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchLayout {
    /// Minimum number of fields a line needs to be processed
    pub required_fields: usize,
    /// Column names, for warnings
    pub columns: &'static str,
}

impl BatchLayout {
    /// One workspace reference per line (find/create/delete)
    pub const WORKSPACES: BatchLayout = BatchLayout {
        required_fields: 1,
        columns: "workspace",
    };

    /// `workspace,key,value` per line (set variable)
    pub const VARIABLES: BatchLayout = BatchLayout {
        required_fields: 3,
        columns: "workspace,key,value",
    };

    /// Why `entry` cannot be processed, or `None` if it has enough fields
    fn check(&self, entry: &BatchEntry) -> Option<String> {
        if let Some(reason) = &entry.malformed {
            return Some(reason.clone());
        }
        if entry.target().is_empty() {
            return Some(format!("missing workspace in line: {}", entry.fields.join(",")));
        }
        if entry.fields.len() >= self.required_fields {
            return None;
        }
        Some(format!(
            "expected {} field(s) ({}), found {}: {}",
            self.required_fields,
            self.columns,
            entry.fields.len(),
            entry.fields.join(",")
        ))
    }
}

/// Apply `op` to every entry, one at a time, and collect one report per
/// entry
///
/// Entries with too few fields are reported as skipped without calling
/// `op`. The outcome of one entry never stops the following ones.
/// `on_report` sees each report as soon as it is produced.
pub async fn process_entries<F, Fut, R>(
    entries: Vec<BatchEntry>,
    layout: BatchLayout,
    mut op: F,
    mut on_report: R,
) -> Vec<EntryReport>
where
    F: FnMut(BatchEntry) -> Fut,
    Fut: Future<Output = EntryStatus>,
    R: FnMut(&EntryReport),
{
    let mut reports = Vec::with_capacity(entries.len());

    for entry in entries {
        let line = entry.line;
        let target = entry.target().to_string();

        let status = match layout.check(&entry) {
            Some(reason) => {
                warn!("Skipping line {}: {}", line, reason);
                EntryStatus::Skipped(reason)
            }
            None => {
                debug!("Processing line {} ({})", line, target);
                op(entry).await
            }
        };

        let report = EntryReport {
            line,
            target,
            status,
        };
        on_report(&report);
        reports.push(report);
    }

    reports
}

/// Read a list file and run `op` over its entries, printing one line per
/// entry
///
/// Only an unreadable file is an error; per-entry failures end up in the
/// returned summary.
pub async fn run_batch_file<F, Fut>(
    path: &Path,
    layout: BatchLayout,
    heading: &str,
    quiet: bool,
    op: F,
) -> Result<BatchSummary>
where
    F: FnMut(BatchEntry) -> Fut,
    Fut: Future<Output = EntryStatus>,
{
    let entries = read_entries(path)?;
    let total = entries.len();

    println!("{}", heading);

    let spinner = create_spinner(&format!("Processing {} entries...", total), quiet);
    let mut processed = 0usize;

    let reports = process_entries(entries, layout, op, |report| {
        processed += 1;
        match spinner {
            Some(ref s) => {
                s.suspend(|| println!("{}", report));
                s.set_message(format!("Processed {}/{} entries...", processed, total));
            }
            None => println!("{}", report),
        }
    })
    .await;

    finish_spinner(spinner);

    let summary = BatchSummary::from_reports(&reports);
    info!("Batch {} finished: {}", path.display(), summary);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn entry(line: u64, fields: &[&str]) -> BatchEntry {
        BatchEntry {
            line,
            fields: fields.iter().map(|f| f.to_string()).collect(),
            malformed: None,
        }
    }

    #[tokio::test]
    async fn test_short_lines_are_skipped_and_processing_continues() {
        let entries = vec![
            entry(1, &["wsA", "color", "blue"]),
            entry(2, &["wsB", "size"]),
            entry(3, &["wsC", "region", "eu"]),
        ];

        let mut seen = Vec::new();
        let reports = process_entries(
            entries,
            BatchLayout::VARIABLES,
            |e| {
                seen.push(e.target().to_string());
                async move { EntryStatus::Done(format!("{} ok", e.target())) }
            },
            |_| {},
        )
        .await;

        assert_eq!(seen, vec!["wsA", "wsC"]);
        assert_eq!(reports.len(), 3);
        assert!(matches!(reports[0].status, EntryStatus::Done(_)));
        match &reports[1].status {
            EntryStatus::Skipped(reason) => {
                assert!(reason.contains("workspace,key,value"));
                assert!(reason.contains("wsB,size"));
            }
            other => panic!("Expected Skipped, got {:?}", other),
        }
        assert_eq!(reports[1].line, 2);
        assert!(matches!(reports[2].status, EntryStatus::Done(_)));
    }

    #[tokio::test]
    async fn test_failed_entry_does_not_abort_batch() {
        let entries = vec![entry(1, &["bad"]), entry(2, &["good"])];

        let reports = process_entries(
            entries,
            BatchLayout::WORKSPACES,
            |e| async move {
                if e.target() == "bad" {
                    EntryStatus::Failed("boom".to_string())
                } else {
                    EntryStatus::Done("fine".to_string())
                }
            },
            |_| {},
        )
        .await;

        assert_eq!(
            reports[0].status,
            EntryStatus::Failed("boom".to_string())
        );
        assert!(matches!(reports[1].status, EntryStatus::Done(_)));
    }

    #[tokio::test]
    async fn test_empty_workspace_is_skipped_but_empty_value_is_not() {
        let entries = vec![entry(1, &["", "key", "value"]), entry(2, &["wsA", "key", ""])];

        let reports = process_entries(
            entries,
            BatchLayout::VARIABLES,
            |_| async { EntryStatus::Done(String::new()) },
            |_| {},
        )
        .await;

        assert!(matches!(reports[0].status, EntryStatus::Skipped(_)));
        assert!(matches!(reports[1].status, EntryStatus::Done(_)));
    }

    #[tokio::test]
    async fn test_malformed_entry_is_skipped_without_calling_op() {
        let mut bad = entry(2, &["wsB", "name", "\u{fffd}"]);
        bad.malformed = Some("field 3 is not valid UTF-8".to_string());
        let entries = vec![
            entry(1, &["wsA", "color", "blue"]),
            bad,
            entry(3, &["wsC", "region", "eu"]),
        ];

        let mut seen = Vec::new();
        let reports = process_entries(
            entries,
            BatchLayout::VARIABLES,
            |e| {
                seen.push(e.line);
                async { EntryStatus::Done(String::new()) }
            },
            |_| {},
        )
        .await;

        assert_eq!(seen, vec![1, 3]);
        assert_eq!(
            reports[1].status,
            EntryStatus::Skipped("field 3 is not valid UTF-8".to_string())
        );
    }

    #[tokio::test]
    async fn test_run_batch_file_keeps_going_past_bad_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"wsA,color,blue\nwsB,name,\xff\xfe\nwsC,region,eu\n")
            .unwrap();

        let summary = run_batch_file(
            file.path(),
            BatchLayout::VARIABLES,
            "Setting variables:",
            true,
            |_| async { EntryStatus::Done(String::new()) },
        )
        .await
        .unwrap();

        assert_eq!(summary.done, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 0);
    }

    #[tokio::test]
    async fn test_on_report_sees_every_entry_in_order() {
        let entries = vec![entry(1, &["a"]), entry(2, &["b"]), entry(5, &["c"])];

        let mut lines = Vec::new();
        process_entries(
            entries,
            BatchLayout::WORKSPACES,
            |_| async { EntryStatus::Done(String::new()) },
            |r| lines.push(r.line),
        )
        .await;

        assert_eq!(lines, vec![1, 2, 5]);
    }

    #[tokio::test]
    async fn test_run_batch_file_summary() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "wsA,color,blue").unwrap();
        writeln!(file, "wsB").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "wsC,size,large").unwrap();

        let summary = run_batch_file(
            file.path(),
            BatchLayout::VARIABLES,
            "Setting variables:",
            true,
            |e| async move {
                if e.target() == "wsC" {
                    EntryStatus::Failed("workspace not found".to_string())
                } else {
                    EntryStatus::Done("set".to_string())
                }
            },
        )
        .await
        .unwrap();

        assert_eq!(summary.done, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);
    }

    #[tokio::test]
    async fn test_run_batch_file_missing_file() {
        let result = run_batch_file(
            Path::new("/nonexistent/list.csv"),
            BatchLayout::WORKSPACES,
            "Listing:",
            true,
            |_| async { EntryStatus::Done(String::new()) },
        )
        .await;

        assert!(result.is_err());
    }
}
