//! Batch processing of CSV lists
//!
//! Every line of a list file is an independent unit of work. Lines are
//! processed in order, one at a time, and each one yields an
//! [`EntryReport`]; a failing or malformed line never stops the batch.

mod driver;
mod entry;
mod report;

pub use driver::{process_entries, run_batch_file, BatchLayout};
pub use entry::{parse_entries, read_entries, BatchEntry};
pub use report::{BatchSummary, EntryReport, EntryStatus};
