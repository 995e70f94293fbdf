//! Command names accepted by `--command`

use clap::ValueEnum;

/// Operations the tool can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Command {
    /// List all workspaces of the organization
    #[value(name = "list_workspaces")]
    ListWorkspaces,
    /// Resolve a name or ID and print the other identifier
    #[value(name = "find_workspace")]
    FindWorkspace,
    /// Print the name of a workspace given its ID
    #[value(name = "find_workspace_name")]
    FindWorkspaceName,
    /// Print the ID of a workspace given its name
    #[value(name = "find_workspace_id")]
    FindWorkspaceId,
    /// Create workspaces
    #[value(name = "create_workspace", alias = "create_workspaces")]
    CreateWorkspace,
    /// Delete workspaces
    #[value(name = "delete_workspace", alias = "delete_workspaces")]
    DeleteWorkspace,
    /// Create or update a Terraform variable
    #[value(name = "set_workspace_var")]
    SetWorkspaceVar,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::ListWorkspaces => write!(f, "list_workspaces"),
            Command::FindWorkspace => write!(f, "find_workspace"),
            Command::FindWorkspaceName => write!(f, "find_workspace_name"),
            Command::FindWorkspaceId => write!(f, "find_workspace_id"),
            Command::CreateWorkspace => write!(f, "create_workspace"),
            Command::DeleteWorkspace => write!(f, "delete_workspace"),
            Command::SetWorkspaceVar => write!(f, "set_workspace_var"),
        }
    }
}
