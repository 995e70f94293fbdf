//! TFE API client module
//!
//! This module provides functionality to interact with the Terraform
//! Cloud / Enterprise API: workspaces, workspace variables and the token
//! lookup needed to talk to it.

mod client;
mod credentials;
pub mod traits;
pub mod variables;
pub mod workspaces;

use serde::Deserialize;

pub use client::{error_detail, TfeClient};
pub use credentials::TokenResolver;
pub use traits::{ApiListResponse, PaginatedResponse, TfeResource};
pub use variables::{
    is_duplicate_key_error, run_set_var_command, set_workspace_var, SetVarOutcome, Variable,
    VariableAttributes, VariableSpec,
};
pub use workspaces::{
    resolve_workspace, run_create_command, run_delete_command, run_find_command,
    run_list_command, Lookup, ResolvedWorkspace, Workspace, WorkspaceAttributes, WorkspaceMatch,
};

/// Pagination metadata from TFE API (shared across resources)
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationMeta {
    pub pagination: Option<Pagination>,
}

/// Pagination details
#[derive(Deserialize, Debug, Clone)]
pub struct Pagination {
    #[serde(rename = "current-page")]
    pub current_page: u32,
    #[serde(rename = "total-pages")]
    pub total_pages: u32,
    #[serde(rename = "total-count", default)]
    pub total_count: u32,
}
