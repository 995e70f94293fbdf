//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use super::{Formatter, WorkspaceRow};

/// Formatter for ASCII table output
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format(&self, workspaces: &[WorkspaceRow]) -> String {
        let mut table = Table::new();
        table.load_preset(NOTHING).set_header(vec![
            "Org",
            "Workspace Name",
            "Workspace ID",
            "Execution Mode",
            "Locked",
            "TF Version",
            "Updated At",
        ]);

        for ws in workspaces {
            let locked = if ws.locked { "Yes" } else { "No" };
            table.add_row(vec![
                ws.org.as_str(),
                ws.name.as_str(),
                ws.id.as_str(),
                ws.execution_mode.as_str(),
                locked,
                ws.terraform_version.as_str(),
                ws.updated_at.as_str(),
            ]);
        }

        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::row;

    #[test]
    fn test_table_formatter_empty() {
        let out = TableFormatter.format(&[]);
        assert!(out.contains("Workspace Name"));
    }

    #[test]
    fn test_table_formatter_with_data() {
        let out = TableFormatter.format(&[row("ws-123", "test-ws")]);
        assert!(out.contains("ws-123"));
        assert!(out.contains("test-ws"));
        assert!(out.contains("No"));
    }
}
