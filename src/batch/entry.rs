//! CSV list parsing

use csv::{ByteRecord, ReaderBuilder};
use log::{debug, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, TfeError};

/// One non-empty line of a CSV list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    /// 1-based line number in the input file
    pub line: u64,
    /// Fields of the line; the workspace field is trimmed, the others keep
    /// their inner spacing
    pub fields: Vec<String>,
    /// Why the line cannot be used as is (e.g. not UTF-8)
    pub malformed: Option<String>,
}

impl BatchEntry {
    /// First field (the workspace reference in every list format)
    pub fn target(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or("")
    }

    /// Field at `index`, if present
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }
}

/// Read a CSV list file
pub fn read_entries(path: &Path) -> Result<Vec<BatchEntry>> {
    let file = File::open(path).map_err(|e| {
        TfeError::Input(format!("Cannot open list file {}: {}", path.display(), e))
    })?;
    let entries = parse_entries(file)?;
    debug!("Read {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Parse comma separated entries: no header, no quoting, any number of
/// fields per line, blank lines dropped
///
/// Each line stands alone: quotes are plain characters and a line that is
/// not valid UTF-8 becomes a malformed entry instead of failing the file.
pub fn parse_entries<R: Read>(reader: R) -> Result<Vec<BatchEntry>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut entries = Vec::new();
    for (index, record) in csv_reader.byte_records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 1);

        if let Some(entry) = decode_record(&record, line) {
            entries.push(entry);
        }
    }

    Ok(entries)
}

/// Decode one raw line; `None` for a blank line
fn decode_record(record: &ByteRecord, line: u64) -> Option<BatchEntry> {
    let mut malformed = None;
    let mut fields: Vec<String> = record
        .iter()
        .enumerate()
        .map(|(i, raw)| match std::str::from_utf8(raw) {
            Ok(field) => field.to_string(),
            Err(_) => {
                malformed.get_or_insert_with(|| format!("field {} is not valid UTF-8", i + 1));
                String::from_utf8_lossy(raw).into_owned()
            }
        })
        .collect();

    // Strip the line ends and the workspace reference only
    if let Some(last) = fields.last_mut() {
        *last = last.trim_end().to_string();
    }
    if let Some(first) = fields.first_mut() {
        *first = first.trim().to_string();
    }

    if fields.iter().all(String::is_empty) {
        return None;
    }
    if let Some(reason) = &malformed {
        warn!("Line {} of list: {}", line, reason);
    }

    Some(BatchEntry {
        line,
        fields,
        malformed,
    })
}
