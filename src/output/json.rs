//! JSON and YAML output formatters

use log::error;
use serde::Serialize;

use super::{Formatter, WorkspaceRow};

/// Formatter for JSON output
pub struct JsonFormatter;

/// Formatter for YAML output
pub struct YamlFormatter;

/// Serializable workspace for structured output
#[derive(Serialize)]
struct StructuredWorkspace {
    org: String,
    workspace_name: String,
    workspace_id: String,
    execution_mode: String,
    locked: bool,
    terraform_version: String,
    updated_at: String,
}

impl From<&WorkspaceRow> for StructuredWorkspace {
    fn from(row: &WorkspaceRow) -> Self {
        Self {
            org: row.org.clone(),
            workspace_name: row.name.clone(),
            workspace_id: row.id.clone(),
            execution_mode: row.execution_mode.clone(),
            locked: row.locked,
            terraform_version: row.terraform_version.clone(),
            updated_at: row.updated_at.clone(),
        }
    }
}

fn structured(workspaces: &[WorkspaceRow]) -> Vec<StructuredWorkspace> {
    workspaces.iter().map(StructuredWorkspace::from).collect()
}

impl Formatter for JsonFormatter {
    fn format(&self, workspaces: &[WorkspaceRow]) -> String {
        serde_json::to_string_pretty(&structured(workspaces)).unwrap_or_else(|e| {
            error!("Error serializing to JSON: {}", e);
            String::new()
        })
    }
}

impl Formatter for YamlFormatter {
    fn format(&self, workspaces: &[WorkspaceRow]) -> String {
        serde_yml::to_string(&structured(workspaces)).unwrap_or_else(|e| {
            error!("Error serializing to YAML: {}", e);
            String::new()
        })
    }
}
