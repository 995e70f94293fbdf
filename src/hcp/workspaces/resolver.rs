//! Workspace resolution utilities
//!
//! A workspace reference typed by the user may be either an opaque ID or a
//! name. The API has separate lookup paths for each, so a reference is
//! probed as an ID first and as a name within the organization second.

use log::{debug, warn};

use super::Workspace;
use crate::hcp::traits::TfeResource;
use crate::hcp::TfeClient;

/// Which interpretation of a reference matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceMatch {
    /// The reference is the workspace ID
    Id,
    /// The reference is the workspace name
    Name,
}

/// Resolved workspace information
#[derive(Debug)]
pub struct ResolvedWorkspace {
    /// The workspace model
    pub workspace: Workspace,
    /// How the reference matched
    pub matched: WorkspaceMatch,
}

impl ResolvedWorkspace {
    /// Canonical workspace ID
    pub fn id(&self) -> &str {
        &self.workspace.id
    }

    /// Workspace name
    pub fn name(&self) -> &str {
        self.workspace.name()
    }

    /// The identifier the user did not type: the name for an ID reference,
    /// the ID for a name reference
    pub fn counterpart(&self) -> &str {
        match self.matched {
            WorkspaceMatch::Id => self.name(),
            WorkspaceMatch::Name => self.id(),
        }
    }
}

/// Resolve a workspace reference to its canonical workspace
///
/// Probes `GET /workspaces/{reference}` first; on any failure probes
/// `GET /organizations/{org}/workspaces/{reference}`. Returns `None` when
/// neither lookup succeeds. The name probe is skipped when no organization
/// is known. Every call hits the API; nothing is cached.
pub async fn resolve_workspace(
    client: &TfeClient,
    org: Option<&str>,
    reference: &str,
) -> Option<ResolvedWorkspace> {
    if reference.is_empty() {
        return None;
    }

    if let Some(workspace) = probe_by_id(client, reference).await {
        debug!("Workspace reference '{}' resolved as ID", reference);
        return Some(ResolvedWorkspace {
            workspace,
            matched: WorkspaceMatch::Id,
        });
    }

    let Some(org) = org else {
        debug!(
            "Workspace reference '{}' is not an ID and no organization was given",
            reference
        );
        return None;
    };

    if let Some(workspace) = probe_by_name(client, org, reference).await {
        debug!(
            "Workspace reference '{}' resolved as name in '{}' -> {}",
            reference, org, workspace.id
        );
        return Some(ResolvedWorkspace {
            workspace,
            matched: WorkspaceMatch::Name,
        });
    }

    debug!("Workspace reference '{}' not found", reference);
    None
}

/// Look up a workspace by ID, treating every failure as a miss
pub async fn probe_by_id(client: &TfeClient, workspace_id: &str) -> Option<Workspace> {
    match client.get_workspace_by_id(workspace_id).await {
        Ok(found) => found.map(|(ws, _raw)| ws),
        Err(e) => {
            warn!("Lookup of workspace ID '{}' failed: {}", workspace_id, e);
            None
        }
    }
}

/// Look up a workspace by name, treating every failure as a miss
pub async fn probe_by_name(client: &TfeClient, org: &str, name: &str) -> Option<Workspace> {
    match client.get_workspace_by_name(org, name).await {
        Ok(found) => found.map(|(ws, _raw)| ws),
        Err(e) => {
            warn!(
                "Lookup of workspace '{}' in organization '{}' failed: {}",
                name, org, e
            );
            None
        }
    }
}
