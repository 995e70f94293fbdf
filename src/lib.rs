//! tfe-bulk - Bulk administration of Terraform Cloud / Enterprise workspaces
//!
//! A CLI tool that lists, finds, creates and deletes workspaces and writes
//! workspace variables, either for a single workspace or for every line of
//! a CSV list.
//!
//! # Features
//!
//! - Workspace references may be names or IDs
//! - Variables are created, or updated when the key already exists
//! - CSV lists drive batches; one bad line never stops the rest
//! - Multiple output formats for listings (plain, table, CSV, JSON, YAML)
//! - Automatic pagination handling
//!
//! # Example
//!
//! ```bash
//! # List workspaces
//! tfe-bulk -o my-org -c list_workspaces
//!
//! # Print the ID of a workspace given its name
//! tfe-bulk -o my-org -c find_workspace_id -w my-workspace
//!
//! # Create every workspace named in a file
//! tfe-bulk -o my-org -c create_workspaces -l workspaces.csv
//!
//! # Set variables from workspace,key,value lines
//! tfe-bulk -o my-org -c set_workspace_var -l vars.csv
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod hcp;
pub mod output;
pub mod ui;

pub use cli::{Cli, Command, OutputFormat};
pub use context::Settings;
pub use error::{Result, TfeError};
pub use hcp::{
    resolve_workspace, set_workspace_var, SetVarOutcome, TfeClient, TfeResource, TokenResolver,
    Variable, VariableSpec, Workspace,
};
pub use output::{render_workspaces, WorkspaceRow};
