//! Workspace command handlers

use log::debug;

use crate::batch::{run_batch_file, BatchEntry, BatchLayout, EntryStatus};
use crate::context::Settings;
use crate::hcp::traits::TfeResource;
use crate::hcp::TfeClient;
use crate::output::render_workspaces;
use crate::ui::{create_spinner, finish_spinner, page_output};

use super::resolver::{probe_by_id, probe_by_name, resolve_workspace};

/// Run the list_workspaces command
pub async fn run_list_command(
    client: &TfeClient,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let org = settings.require_org("list_workspaces")?;

    let spinner = create_spinner(
        &format!("Fetching workspaces from organization '{}'...", org),
        settings.quiet,
    );
    let result = client.list_workspaces(org).await;
    finish_spinner(spinner);

    let workspaces = result?;
    debug!("Found {} workspaces in '{}'", workspaces.len(), org);

    if workspaces.is_empty() {
        println!("No workspaces found.");
        return Ok(());
    }

    let rendered = render_workspaces(org, &workspaces, &settings.format);
    page_output(&rendered, settings.pager);
    Ok(())
}

/// Which identifier a find command looks up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Name or ID; prints the other one
    Either,
    /// ID given; prints the name
    NameOf,
    /// Name given; prints the ID
    IdOf,
}

impl Lookup {
    fn command(&self) -> &'static str {
        match self {
            Lookup::Either => "find_workspace",
            Lookup::NameOf => "find_workspace_name",
            Lookup::IdOf => "find_workspace_id",
        }
    }

    /// The identifier to print for `reference`, or `None` when it does not
    /// resolve
    async fn find(&self, client: &TfeClient, org: Option<&str>, reference: &str) -> Option<String> {
        match self {
            Lookup::Either => resolve_workspace(client, org, reference)
                .await
                .map(|resolved| resolved.counterpart().to_string()),
            Lookup::NameOf => probe_by_id(client, reference)
                .await
                .map(|ws| ws.name().to_string()),
            Lookup::IdOf => match org {
                Some(org) => probe_by_name(client, org, reference).await.map(|ws| ws.id),
                None => None,
            },
        }
    }
}

/// Run one of the find commands
pub async fn run_find_command(
    client: &TfeClient,
    settings: &Settings,
    lookup: Lookup,
) -> Result<(), Box<dyn std::error::Error>> {
    let org = match lookup {
        Lookup::IdOf => Some(settings.require_org(lookup.command())?),
        _ => settings.organization.as_deref(),
    };

    if let Some(list) = settings.batch_list() {
        run_batch_file(
            list,
            BatchLayout::WORKSPACES,
            "Finding workspaces in list:",
            settings.quiet,
            move |entry| find_entry(client, org, lookup, entry),
        )
        .await?;
        return Ok(());
    }

    let reference = settings.require_workspace(lookup.command())?;
    match lookup.find(client, org, reference).await {
        Some(found) => {
            println!("{}", found);
            Ok(())
        }
        None => Err(format!("Workspace '{}' not found", reference).into()),
    }
}

async fn find_entry(
    client: &TfeClient,
    org: Option<&str>,
    lookup: Lookup,
    entry: BatchEntry,
) -> EntryStatus {
    let reference = entry.target();
    match lookup.find(client, org, reference).await {
        Some(found) => EntryStatus::Done(format!("{} -> {}", reference, found)),
        None => EntryStatus::Failed(format!("Workspace '{}' not found", reference)),
    }
}

/// Run the create_workspace command
pub async fn run_create_command(
    client: &TfeClient,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let org = settings.require_org("create_workspace")?;

    if let Some(list) = settings.batch_list() {
        run_batch_file(
            list,
            BatchLayout::WORKSPACES,
            "Creating workspaces in list:",
            settings.quiet,
            move |entry| create_entry(client, org, entry),
        )
        .await?;
        return Ok(());
    }

    let name = settings.require_workspace("create_workspace")?;
    let workspace = client.create_workspace(org, name).await?;
    println!("Created workspace '{}' ({})", workspace.name(), workspace.id);
    Ok(())
}

async fn create_entry(client: &TfeClient, org: &str, entry: BatchEntry) -> EntryStatus {
    let name = entry.target();
    match client.create_workspace(org, name).await {
        Ok(ws) => EntryStatus::Done(format!("Created workspace '{}' ({})", ws.name(), ws.id)),
        Err(e) => EntryStatus::Failed(format!("Failed to create '{}': {}", name, e)),
    }
}

/// Run the delete_workspace command
///
/// References are resolved first, so both names and IDs are accepted.
pub async fn run_delete_command(
    client: &TfeClient,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let org = settings.organization.as_deref();

    if let Some(list) = settings.batch_list() {
        run_batch_file(
            list,
            BatchLayout::WORKSPACES,
            "Deleting workspaces in list:",
            settings.quiet,
            move |entry| delete_entry(client, org, entry),
        )
        .await?;
        return Ok(());
    }

    let reference = settings.require_workspace("delete_workspace")?;
    match delete_workspace_ref(client, org, reference).await? {
        Some(message) => {
            println!("{}", message);
            Ok(())
        }
        None => Err(format!("Workspace '{}' not found", reference).into()),
    }
}

/// Resolve and delete; `None` when the reference does not resolve
async fn delete_workspace_ref(
    client: &TfeClient,
    org: Option<&str>,
    reference: &str,
) -> crate::Result<Option<String>> {
    let Some(resolved) = resolve_workspace(client, org, reference).await else {
        return Ok(None);
    };

    client.delete_workspace(resolved.id()).await?;
    Ok(Some(format!(
        "Deleted workspace '{}' ({})",
        resolved.name(),
        resolved.id()
    )))
}

async fn delete_entry(client: &TfeClient, org: Option<&str>, entry: BatchEntry) -> EntryStatus {
    let reference = entry.target();
    match delete_workspace_ref(client, org, reference).await {
        Ok(Some(message)) => EntryStatus::Done(message),
        Ok(None) => EntryStatus::Failed(format!("Workspace '{}' not found", reference)),
        Err(e) => EntryStatus::Failed(format!("Failed to delete '{}': {}", reference, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::io::Write;
    use std::path::PathBuf;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(org: Option<&str>, workspace: Option<&str>, list: Option<PathBuf>) -> Settings {
        Settings {
            host: "localhost".to_string(),
            organization: org.map(str::to_string),
            workspace: workspace.map(str::to_string),
            variable: None,
            list,
            pager: false,
            quiet: true,
            format: OutputFormat::Plain,
        }
    }

    fn workspace_response(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "data": {"id": id, "type": "workspaces", "attributes": {"name": name}}
        })
    }

    #[tokio::test]
    async fn test_list_requires_org() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        let err = run_list_command(&client, &settings(None, None, None))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("organization"));
    }

    #[tokio::test]
    async fn test_list_empty_org() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/my-org/workspaces"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert!(run_list_command(&client, &settings(Some("my-org"), None, None))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_find_id_requires_org() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        let result =
            run_find_command(&client, &settings(None, Some("wsA"), None), Lookup::IdOf).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_lookup_either_returns_counterpart() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/workspaces/ws-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(workspace_response("ws-1", "alpha")))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/workspaces/alpha"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/organizations/my-org/workspaces/alpha"))
            .respond_with(ResponseTemplate::new(200).set_body_json(workspace_response("ws-1", "alpha")))
            .mount(&mock_server)
            .await;

        assert_eq!(
            Lookup::Either.find(&client, Some("my-org"), "ws-1").await,
            Some("alpha".to_string())
        );
        assert_eq!(
            Lookup::Either.find(&client, Some("my-org"), "alpha").await,
            Some("ws-1".to_string())
        );
    }

    #[tokio::test]
    async fn test_lookup_name_of_never_probes_by_name() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/workspaces/alpha"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/organizations/my-org/workspaces/alpha"))
            .respond_with(ResponseTemplate::new(200).set_body_json(workspace_response("ws-1", "alpha")))
            .expect(0)
            .mount(&mock_server)
            .await;

        assert_eq!(Lookup::NameOf.find(&client, Some("my-org"), "alpha").await, None);
    }

    #[tokio::test]
    async fn test_lookup_id_of() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/my-org/workspaces/alpha"))
            .respond_with(ResponseTemplate::new(200).set_body_json(workspace_response("ws-1", "alpha")))
            .mount(&mock_server)
            .await;

        assert_eq!(
            Lookup::IdOf.find(&client, Some("my-org"), "alpha").await,
            Some("ws-1".to_string())
        );
    }

    #[tokio::test]
    async fn test_find_single_not_found_is_error() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = run_find_command(
            &client,
            &settings(Some("my-org"), Some("ghost"), None),
            Lookup::Either,
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[tokio::test]
    async fn test_create_from_list_continues_after_failure() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/organizations/my-org/workspaces"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "errors": [{"detail": "Name has already been taken"}]
            })))
            .expect(2)
            .mount(&mock_server)
            .await;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dup-one").unwrap();
        writeln!(file, "dup-two").unwrap();

        let result = run_create_command(
            &client,
            &settings(Some("my-org"), None, Some(file.path().to_path_buf())),
        )
        .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_resolves_name_before_deleting() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/workspaces/alpha"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/organizations/my-org/workspaces/alpha"))
            .respond_with(ResponseTemplate::new(200).set_body_json(workspace_response("ws-1", "alpha")))
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/workspaces/ws-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result =
            run_delete_command(&client, &settings(Some("my-org"), Some("alpha"), None)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_unknown_workspace_sends_no_delete() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&mock_server)
            .await;

        let result =
            run_delete_command(&client, &settings(Some("my-org"), Some("ghost"), None)).await;
        assert!(result.is_err());
    }
}
