//! Workspace data models

use serde::Deserialize;

use crate::hcp::traits::TfeResource;

/// Workspace data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Workspace {
    pub id: String,
    pub attributes: WorkspaceAttributes,
}

impl TfeResource for Workspace {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

impl Workspace {
    /// Get execution mode, defaulting to "unknown" if not available
    pub fn execution_mode(&self) -> &str {
        self.attributes
            .execution_mode
            .as_deref()
            .unwrap_or("unknown")
    }

    /// Check if workspace is locked
    pub fn is_locked(&self) -> bool {
        self.attributes.locked.unwrap_or(false)
    }

    /// Get terraform version, defaulting to "unknown" if not available
    pub fn terraform_version(&self) -> &str {
        self.attributes
            .terraform_version
            .as_deref()
            .unwrap_or("unknown")
    }

    /// Get updated_at timestamp, defaulting to empty string if not available
    pub fn updated_at(&self) -> &str {
        self.attributes.updated_at.as_deref().unwrap_or("")
    }
}

/// Workspace attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceAttributes {
    pub name: String,

    #[serde(rename = "execution-mode")]
    pub execution_mode: Option<String>,

    pub locked: Option<bool>,

    #[serde(rename = "terraform-version")]
    pub terraform_version: Option<String>,

    #[serde(rename = "updated-at")]
    pub updated_at: Option<String>,
}
