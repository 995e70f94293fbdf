//! Plain `id - name` listing

use super::{Formatter, WorkspaceRow};

/// One `<id> - <name>` line per workspace
pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn format(&self, workspaces: &[WorkspaceRow]) -> String {
        workspaces
            .iter()
            .map(|ws| format!("{} - {}", ws.id, ws.name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
