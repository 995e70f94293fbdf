//! Settings record built from CLI arguments

use log::debug;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};
use crate::error::{Result, TfeError};

/// Per-run configuration shared by all command handlers
#[derive(Debug, Clone)]
pub struct Settings {
    /// API hostname
    pub host: String,
    /// Organization, required by name lookups, listing and creation
    pub organization: Option<String>,
    /// Single workspace reference (`-w`)
    pub workspace: Option<String>,
    /// Single `key:value` variable (`-v`)
    pub variable: Option<String>,
    /// CSV list driving a batch (`-l`)
    pub list: Option<PathBuf>,
    /// Page long outputs
    pub pager: bool,
    /// No spinners
    pub quiet: bool,
    pub format: OutputFormat,
}

impl Settings {
    /// Build settings from parsed CLI arguments
    pub fn from_cli(cli: &Cli) -> Self {
        let settings = Self {
            host: cli.hostname.clone(),
            organization: cli.organization.clone().filter(|o| !o.is_empty()),
            workspace: cli.workspace.clone(),
            variable: cli.variable.clone(),
            list: cli.list.clone(),
            pager: cli.pager,
            quiet: cli.quiet,
            format: cli.format,
        };
        debug!(
            "Settings: host={}, org={:?}, workspace={:?}, list={:?}",
            settings.host, settings.organization, settings.workspace, settings.list
        );
        settings
    }

    /// The organization, or a configuration error naming `command`
    pub fn require_org(&self, command: &str) -> Result<&str> {
        self.organization.as_deref().ok_or_else(|| {
            TfeError::Config(format!(
                "{} requires an organization (--organization or TFE_ORG)",
                command
            ))
        })
    }

    /// The single workspace reference, or a configuration error naming
    /// `command`
    pub fn require_workspace(&self, command: &str) -> Result<&str> {
        self.workspace
            .as_deref()
            .filter(|w| !w.is_empty())
            .ok_or_else(|| {
                TfeError::Config(format!(
                    "{} requires --workspace or --list",
                    command
                ))
            })
    }

    /// The list file when running in batch mode
    ///
    /// A list always wins over a single `--workspace`.
    pub fn batch_list(&self) -> Option<&Path> {
        self.list.as_deref()
    }
}
