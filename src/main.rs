//! tfe-bulk - Main entry point

use clap::Parser;
use log::{debug, info};

use tfe_bulk::hcp::{
    run_create_command, run_delete_command, run_find_command, run_list_command,
    run_set_var_command, Lookup,
};
use tfe_bulk::{Cli, Command, Settings, TfeClient, TokenResolver};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tfe-bulk v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    debug!(
        "CLI args: command={}, host={}, org={:?}, workspace={:?}, list={:?}, format={}",
        cli.command, cli.hostname, cli.organization, cli.workspace, cli.list, cli.format
    );

    let settings = Settings::from_cli(&cli);

    // Resolve token with fallback logic
    let token = TokenResolver::new(&settings.host)
        .with_credentials_file(cli.credentials.clone())
        .resolve(cli.token.as_deref())?;

    let client = TfeClient::new(token, settings.host.clone());

    match cli.command {
        Command::ListWorkspaces => run_list_command(&client, &settings).await,
        Command::FindWorkspace => run_find_command(&client, &settings, Lookup::Either).await,
        Command::FindWorkspaceName => run_find_command(&client, &settings, Lookup::NameOf).await,
        Command::FindWorkspaceId => run_find_command(&client, &settings, Lookup::IdOf).await,
        Command::CreateWorkspace => run_create_command(&client, &settings).await,
        Command::DeleteWorkspace => run_delete_command(&client, &settings).await,
        Command::SetWorkspaceVar => run_set_var_command(&client, &settings).await,
    }
}
