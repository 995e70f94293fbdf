//! CLI argument parsing

mod common;
mod enums;

use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults;

pub use common::OutputFormat;
pub use enums::Command;

/// Bulk workspace and variable administration for Terraform Cloud / Enterprise
#[derive(Parser, Debug)]
#[command(name = "tfe-bulk")]
#[command(version)]
#[command(about = "Bulk operations on TFE/TFC workspaces and variables", long_about = None)]
#[command(after_help = "EXAMPLES:\n  \
    tfe-bulk -o my-org -c list_workspaces\n  \
    tfe-bulk -o my-org -c find_workspace -w ws-abc123\n  \
    tfe-bulk -o my-org -c create_workspaces -l workspaces.csv\n  \
    tfe-bulk -o my-org -c set_workspace_var -w my-ws -v region:eu-west-1\n  \
    tfe-bulk -o my-org -c set_workspace_var -l vars.csv")]
pub struct Cli {
    /// Command to run
    #[arg(short = 'c', long, value_enum)]
    pub command: Command,

    /// TFE/TFC hostname
    #[arg(short = 'H', long, env = "TFE_HOSTNAME", default_value = defaults::HOST)]
    pub hostname: String,

    /// Organization name
    #[arg(short = 'o', long, env = "TFE_ORG")]
    pub organization: Option<String>,

    /// Workspace name or ID
    #[arg(short = 'w', long)]
    pub workspace: Option<String>,

    /// Variable as key:value (set_workspace_var)
    #[arg(short = 'v', long, value_name = "KEY:VALUE")]
    pub variable: Option<String>,

    /// CSV list file driving a batch (takes precedence over --workspace)
    #[arg(short = 'l', long, value_name = "CSV")]
    pub list: Option<PathBuf>,

    /// Send long outputs through $PAGER
    #[arg(short = 'p', long, default_value_t = false)]
    pub pager: bool,

    /// Credentials file (default: ~/.terraform.d/credentials.tfrc.json)
    #[arg(long, value_name = "PATH")]
    pub credentials: Option<PathBuf>,

    /// API token (overrides env vars and credentials file)
    #[arg(short = 't', long)]
    pub token: Option<String>,

    /// Output format for list_workspaces
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Disable progress spinners
    #[arg(short = 'q', long, default_value_t = false)]
    pub quiet: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}
