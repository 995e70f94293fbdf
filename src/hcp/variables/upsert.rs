//! Create-or-update of workspace variables

use log::{debug, info};

use crate::config::vars;
use crate::error::{Result, TfeError};
use crate::hcp::workspaces::resolve_workspace;
use crate::hcp::TfeClient;

use super::api::CreateVariable;
use super::models::{SetVarOutcome, VariableSpec};

/// Whether a 422 detail means the key already exists in the workspace
pub fn is_duplicate_key_error(detail: &str) -> bool {
    detail.trim() == vars::DUPLICATE_KEY_DETAIL
}

/// Write a Terraform variable to a workspace given by name or ID
///
/// Creates the variable; when the key is taken, looks up the existing
/// variable and patches it with the new value. A workspace that cannot be
/// resolved, or that disappears before the create, yields
/// [`SetVarOutcome::WorkspaceNotFound`] rather than an error.
pub async fn set_workspace_var(
    client: &TfeClient,
    org: Option<&str>,
    workspace_ref: &str,
    spec: &VariableSpec,
) -> Result<SetVarOutcome> {
    let Some(resolved) = resolve_workspace(client, org, workspace_ref).await else {
        debug!("Workspace '{}' not resolved, no variable written", workspace_ref);
        return Ok(SetVarOutcome::WorkspaceNotFound);
    };
    let workspace_id = resolved.id();

    match client.create_variable(workspace_id, spec).await? {
        CreateVariable::Created(var) => {
            info!("Created variable '{}' in {}", spec.key, workspace_id);
            Ok(SetVarOutcome::Created(var))
        }
        CreateVariable::WorkspaceMissing => Ok(SetVarOutcome::WorkspaceNotFound),
        CreateVariable::KeyTaken => {
            let variable_id = client
                .find_variable_id(workspace_id, &spec.key)
                .await?
                .ok_or_else(|| TfeError::Api {
                    status: 422,
                    message: format!(
                        "Variable '{}' reported as taken but not listed in workspace '{}'",
                        spec.key, workspace_id
                    ),
                })?;

            let var = client
                .update_variable(workspace_id, &variable_id, spec)
                .await?;
            info!("Updated variable '{}' in {}", spec.key, workspace_id);
            Ok(SetVarOutcome::Updated(var))
        }
    }
}
