//! Workspace module

mod api;
mod commands;
mod models;
pub mod resolver;

pub use commands::{
    run_create_command, run_delete_command, run_find_command, run_list_command, Lookup,
};
pub use models::{Workspace, WorkspaceAttributes};
pub use resolver::{
    probe_by_id, probe_by_name, resolve_workspace, ResolvedWorkspace, WorkspaceMatch,
};
