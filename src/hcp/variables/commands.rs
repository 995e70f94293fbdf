//! Variable command handlers

use log::debug;

use crate::batch::{run_batch_file, BatchEntry, BatchLayout, EntryStatus};
use crate::context::Settings;
use crate::error::TfeError;
use crate::hcp::TfeClient;

use super::models::{SetVarOutcome, VariableSpec};
use super::upsert::set_workspace_var;

const COMMAND: &str = "set_workspace_var";

/// Run the set_workspace_var command
///
/// With `--list`, every `workspace,key,value` line is written independently
/// and the run succeeds whatever the per-line outcomes. Otherwise the single
/// `--workspace`/`--variable` pair is written and any failure is returned.
pub async fn run_set_var_command(
    client: &TfeClient,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let org = settings.organization.as_deref();

    if let Some(list) = settings.batch_list() {
        debug!("Setting variables from list {}", list.display());
        run_batch_file(
            list,
            BatchLayout::VARIABLES,
            "Setting workspace variables from list:",
            settings.quiet,
            move |entry| set_var_entry(client, org, entry),
        )
        .await?;
        return Ok(());
    }

    let workspace = settings.require_workspace(COMMAND)?;
    let variable = settings.variable.as_deref().ok_or_else(|| {
        TfeError::Config(format!("{} requires --variable key:value or --list", COMMAND))
    })?;
    let spec = VariableSpec::parse(variable)?;

    match set_workspace_var(client, org, workspace, &spec).await? {
        SetVarOutcome::WorkspaceNotFound => {
            Err(format!("Workspace '{}' not found", workspace).into())
        }
        outcome => {
            println!("{}", describe(&outcome, workspace, &spec));
            Ok(())
        }
    }
}

/// Batch step for one `workspace,key,value` line
async fn set_var_entry(client: &TfeClient, org: Option<&str>, entry: BatchEntry) -> EntryStatus {
    let workspace = entry.target();
    let spec = VariableSpec::new(
        entry.field(1).unwrap_or_default().trim(),
        entry.field(2).unwrap_or_default(),
    );

    match set_workspace_var(client, org, workspace, &spec).await {
        Ok(SetVarOutcome::WorkspaceNotFound) => {
            EntryStatus::Failed(format!("Workspace '{}' not found", workspace))
        }
        Ok(outcome) => EntryStatus::Done(describe(&outcome, workspace, &spec)),
        Err(e) => EntryStatus::Failed(format!(
            "Failed to set '{}' in workspace '{}': {}",
            spec.key, workspace, e
        )),
    }
}

fn describe(outcome: &SetVarOutcome, workspace: &str, spec: &VariableSpec) -> String {
    match outcome {
        SetVarOutcome::Created(var) => format!(
            "Created variable {}={} in workspace '{}' ({})",
            spec.key,
            var.value().unwrap_or(&spec.value),
            workspace,
            var.id
        ),
        SetVarOutcome::Updated(var) => format!(
            "Updated variable {}={} in workspace '{}' ({})",
            spec.key,
            var.value().unwrap_or(&spec.value),
            workspace,
            var.id
        ),
        SetVarOutcome::WorkspaceNotFound => format!("Workspace '{}' not found", workspace),
    }
}
