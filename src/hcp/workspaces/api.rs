//! Workspace API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::client::api_error;
use crate::hcp::traits::ApiListResponse;
use crate::hcp::TfeClient;

use super::models::Workspace;

/// API path of the workspace collection of an organization
fn org_workspaces_path(org: &str) -> String {
    format!(
        "/{}/{}/{}",
        api::ORGANIZATIONS,
        urlencoding::encode(org),
        api::WORKSPACES
    )
}

impl TfeClient {
    /// List every workspace of an organization (full sequential scan)
    pub async fn list_workspaces(&self, org: &str) -> Result<Vec<Workspace>> {
        let path = org_workspaces_path(org);
        let error_context = format!("workspaces for organization '{}'", org);

        self.fetch_all_pages::<Workspace, ApiListResponse<Workspace>>(&path, &error_context)
            .await
    }

    /// Get a single workspace by ID (no org needed)
    pub async fn get_workspace_by_id(
        &self,
        workspace_id: &str,
    ) -> Result<Option<(Workspace, serde_json::Value)>> {
        let path = format!(
            "/{}/{}",
            api::WORKSPACES,
            urlencoding::encode(workspace_id)
        );
        self.fetch_resource_by_path::<Workspace>(&path, &format!("workspace '{}'", workspace_id))
            .await
    }

    /// Get a single workspace by name (requires org)
    pub async fn get_workspace_by_name(
        &self,
        org: &str,
        name: &str,
    ) -> Result<Option<(Workspace, serde_json::Value)>> {
        let path = format!("{}/{}", org_workspaces_path(org), urlencoding::encode(name));
        self.fetch_resource_by_path::<Workspace>(&path, &format!("workspace '{}'", name))
            .await
    }

    /// Create a workspace in an organization
    pub async fn create_workspace(&self, org: &str, name: &str) -> Result<Workspace> {
        let url = format!("{}{}", self.base_url(), org_workspaces_path(org));
        debug!("Creating workspace '{}' in organization '{}'", name, org);

        let body = serde_json::json!({
            "data": {
                "type": "workspaces",
                "attributes": {
                    "name": name
                }
            }
        });

        let response = self.post(&url).json(&body).send().await?;

        match response.status().as_u16() {
            200..=299 => {
                let raw: serde_json::Value = response.json().await?;
                serde_json::from_value(raw["data"].clone()).map_err(|e| TfeError::Api {
                    status: 200,
                    message: format!("Failed to parse created workspace '{}': {}", name, e),
                })
            }
            404 => Err(TfeError::Api {
                status: 404,
                message: format!("Organization '{}' not found", org),
            }),
            _ => Err(api_error(response, &format!("Failed to create workspace '{}'", name)).await),
        }
    }

    /// Delete a workspace by ID
    pub async fn delete_workspace(&self, workspace_id: &str) -> Result<()> {
        let url = format!(
            "{}/{}/{}",
            self.base_url(),
            api::WORKSPACES,
            urlencoding::encode(workspace_id)
        );
        debug!("Deleting workspace: {}", workspace_id);

        let response = self.delete(&url).send().await?;

        match response.status().as_u16() {
            200..=299 => Ok(()),
            404 => Err(TfeError::Api {
                status: 404,
                message: format!("Workspace '{}' not found", workspace_id),
            }),
            _ => Err(api_error(
                response,
                &format!("Failed to delete workspace '{}'", workspace_id),
            )
            .await),
        }
    }
}
