//! Output formatting module
//!
//! Renders workspace listings as plain lines, table, CSV, JSON or YAML.
//! Formatters return the rendered text so that it can be sent through a
//! pager.

mod common;
mod csv;
mod json;
mod plain;
mod table;

use crate::cli::OutputFormat;
use crate::hcp::traits::TfeResource;
use crate::hcp::Workspace;

pub use self::csv::CsvFormatter;
pub use self::json::{JsonFormatter, YamlFormatter};
pub use self::plain::PlainFormatter;
pub use self::table::TableFormatter;
pub use common::escape_csv;

/// Trait for output formatters
pub trait Formatter {
    /// Render the workspaces
    fn format(&self, workspaces: &[WorkspaceRow]) -> String;
}

/// Flattened workspace data for output
#[derive(Debug, Clone)]
pub struct WorkspaceRow {
    pub org: String,
    pub name: String,
    pub id: String,
    pub execution_mode: String,
    pub locked: bool,
    pub terraform_version: String,
    pub updated_at: String,
}

impl WorkspaceRow {
    /// Create a new workspace row
    pub fn new(org: &str, workspace: &Workspace) -> Self {
        Self {
            org: org.to_string(),
            name: workspace.name().to_string(),
            id: workspace.id.clone(),
            execution_mode: workspace.execution_mode().to_string(),
            locked: workspace.is_locked(),
            terraform_version: workspace.terraform_version().to_string(),
            updated_at: workspace.updated_at().to_string(),
        }
    }
}

/// Render the workspaces of an organization in the requested format,
/// keeping API order
pub fn render_workspaces(org: &str, workspaces: &[Workspace], format: &OutputFormat) -> String {
    let rows: Vec<WorkspaceRow> = workspaces
        .iter()
        .map(|ws| WorkspaceRow::new(org, ws))
        .collect();

    match format {
        OutputFormat::Plain => PlainFormatter.format(&rows),
        OutputFormat::Table => TableFormatter.format(&rows),
        OutputFormat::Csv => CsvFormatter.format(&rows),
        OutputFormat::Json => JsonFormatter.format(&rows),
        OutputFormat::Yaml => YamlFormatter.format(&rows),
    }
}
