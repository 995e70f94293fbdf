//! Variable API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::client::{api_error, error_detail};
use crate::hcp::traits::{ApiListResponse, PaginatedResponse, TfeResource};
use crate::hcp::TfeClient;

use super::models::{Variable, VariableSpec};
use super::upsert::is_duplicate_key_error;

/// Result of a create attempt
#[derive(Debug)]
pub enum CreateVariable {
    Created(Variable),
    /// 422 with the duplicate key detail
    KeyTaken,
    /// 404 on the workspace's variable collection
    WorkspaceMissing,
}

/// API path of the variable collection of a workspace
fn workspace_vars_path(workspace_id: &str) -> String {
    format!(
        "/{}/{}/{}",
        api::WORKSPACES,
        urlencoding::encode(workspace_id),
        api::VARS
    )
}

fn parse_variable(raw: serde_json::Value, key: &str) -> Result<Variable> {
    serde_json::from_value(raw["data"].clone()).map_err(|e| TfeError::Api {
        status: 200,
        message: format!("Failed to parse variable '{}': {}", key, e),
    })
}

impl TfeClient {
    /// List the variables of a workspace
    pub async fn list_variables(&self, workspace_id: &str) -> Result<Vec<Variable>> {
        let url = format!("{}{}", self.base_url(), workspace_vars_path(workspace_id));
        debug!("Fetching variables from: {}", url);

        let response = self.get(&url).send().await?;
        let resp: ApiListResponse<Variable> = self
            .parse_api_response(response, &format!("variables of workspace '{}'", workspace_id))
            .await?;

        Ok(resp.into_data())
    }

    /// ID of the variable with `key`, by linear scan of the workspace's
    /// variables
    pub async fn find_variable_id(&self, workspace_id: &str, key: &str) -> Result<Option<String>> {
        let variables = self.list_variables(workspace_id).await?;
        debug!(
            "Scanning {} variables of {} for key '{}'",
            variables.len(),
            workspace_id,
            key
        );

        Ok(variables
            .into_iter()
            .find(|v| v.name() == key)
            .map(|v| v.id))
    }

    /// Create a Terraform variable in a workspace
    ///
    /// A duplicate key and a missing workspace are reported as outcomes so
    /// that the caller can recover; every other failure is an error.
    pub async fn create_variable(
        &self,
        workspace_id: &str,
        spec: &VariableSpec,
    ) -> Result<CreateVariable> {
        let url = format!("{}{}", self.base_url(), workspace_vars_path(workspace_id));
        debug!("Creating variable '{}' in workspace {}", spec.key, workspace_id);

        let body = serde_json::json!({
            "data": {
                "type": "vars",
                "attributes": spec.attributes()
            }
        });

        let response = self.post(&url).json(&body).send().await?;

        match response.status().as_u16() {
            200..=299 => {
                let raw: serde_json::Value = response.json().await?;
                Ok(CreateVariable::Created(parse_variable(raw, &spec.key)?))
            }
            404 => Ok(CreateVariable::WorkspaceMissing),
            422 => {
                let body = response.text().await.unwrap_or_default();
                let detail = error_detail(&body);
                if is_duplicate_key_error(&detail) {
                    debug!("Variable '{}' already exists in {}", spec.key, workspace_id);
                    return Ok(CreateVariable::KeyTaken);
                }
                Err(TfeError::Api {
                    status: 422,
                    message: format!("Failed to create variable '{}': {}", spec.key, detail),
                })
            }
            _ => Err(api_error(
                response,
                &format!("Failed to create variable '{}'", spec.key),
            )
            .await),
        }
    }

    /// Replace the key and value of an existing variable
    pub async fn update_variable(
        &self,
        workspace_id: &str,
        variable_id: &str,
        spec: &VariableSpec,
    ) -> Result<Variable> {
        let url = format!(
            "{}{}/{}",
            self.base_url(),
            workspace_vars_path(workspace_id),
            urlencoding::encode(variable_id)
        );
        debug!(
            "Updating variable {} ('{}') in workspace {}",
            variable_id, spec.key, workspace_id
        );

        let body = serde_json::json!({
            "data": {
                "id": variable_id,
                "type": "vars",
                "attributes": spec.attributes()
            }
        });

        let response = self.patch(&url).json(&body).send().await?;

        match response.status().as_u16() {
            200..=299 => {
                let raw: serde_json::Value = response.json().await?;
                parse_variable(raw, &spec.key)
            }
            404 => Err(TfeError::Api {
                status: 404,
                message: format!(
                    "Variable '{}' not found in workspace '{}'",
                    variable_id, workspace_id
                ),
            }),
            _ => Err(api_error(
                response,
                &format!("Failed to update variable '{}'", spec.key),
            )
            .await),
        }
    }
}
