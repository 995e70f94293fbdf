//! CSV output formatter

use super::common::escape_csv;
use super::{Formatter, WorkspaceRow};

/// Formatter for CSV output
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, workspaces: &[WorkspaceRow]) -> String {
        let mut lines = vec![
            "org,workspace_name,workspace_id,execution_mode,locked,terraform_version,updated_at"
                .to_string(),
        ];

        for ws in workspaces {
            lines.push(format!(
                "{},{},{},{},{},{},{}",
                escape_csv(&ws.org),
                escape_csv(&ws.name),
                escape_csv(&ws.id),
                escape_csv(&ws.execution_mode),
                ws.locked,
                escape_csv(&ws.terraform_version),
                escape_csv(&ws.updated_at)
            ));
        }

        lines.join("\n")
    }
}
