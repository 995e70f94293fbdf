//! Workspace variable module
//!
//! Variables are written with create-or-update semantics: a create is tried
//! first and, when the API reports the key as taken, the existing variable
//! is looked up and patched instead.

mod api;
mod commands;
mod models;
mod upsert;

pub use api::CreateVariable;
pub use commands::run_set_var_command;
pub use models::{SetVarOutcome, Variable, VariableAttributes, VariableSpec};
pub use upsert::{is_duplicate_key_error, set_workspace_var};
