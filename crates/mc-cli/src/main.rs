//! mcdash - Minecraft server dashboard CLI
//!
//! Lists, provisions and controls hosted Minecraft servers through the
//! server-management service.
//!
//! # Examples
//!
//! ```bash
//! # List your servers
//! mcdash list --pretty
//!
//! # Create a server and fetch its files
//! mcdash create --name "Emerald World"
//! mcdash download <id> --out ./servers
//!
//! # Start it and copy the address
//! mcdash play <id>
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use mc_cli::{
    AssumeYes, Client, Clipboard, Confirm, ConsoleNotifier, DashboardResult, Dispatcher, Session,
    StdinConfirm, logger,
};
use mc_config::{Config, IdentityStore};

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let dispatcher = match build_dispatcher(&cli, command_out_dir(&cli.command)) {
        Ok(dispatcher) => dispatcher,
        Err(message) => {
            eprintln!("Error: {message}");
            return ExitCode::FAILURE;
        }
    };

    dispatcher.load().await;

    let result = run(&dispatcher, cli.command).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn command_out_dir(command: &Commands) -> Option<String> {
    match command {
        Commands::Download { out, .. } => out.clone(),
        _ => None,
    }
}

/// Load config, start logging and restore the persisted identity.
fn build_dispatcher(cli: &Cli, out_dir: Option<String>) -> Result<Dispatcher, String> {
    let mut config = Config::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(url) = &cli.server {
        config.api.manager_url = url.clone();
    }
    if let Some(dir) = out_dir {
        config.dashboard.download_dir = dir;
    }

    config
        .validate()
        .map_err(|e| format!("Invalid configuration: {e}"))?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )
    .map_err(|e| format!("Failed to initialize logger: {e}"))?;
    config.log_summary();

    let config_dir = Config::config_dir().map_err(|e| e.to_string())?;
    let session = Session::open(IdentityStore::new(config_dir))
        .map_err(|e| format!("Failed to read identity: {e}"))?;

    Ok(Dispatcher::new(
        Client::new(&config.api),
        session,
        Arc::new(ConsoleNotifier),
        Clipboard::platform_default(),
        config.dashboard,
    ))
}

async fn run(dispatcher: &Dispatcher, command: Commands) -> DashboardResult<Value> {
    match command {
        Commands::List => Ok(json!({ "servers": dispatcher.servers() })),

        Commands::Create { name, version, ip } => {
            let created = dispatcher.provision(&name, &version, &ip).await?;
            Ok(json!({
                "server": created.server,
                "downloadUrl": created.download_url,
            }))
        }

        Commands::Start { id } => {
            let status = dispatcher.start(&id).await?;
            Ok(json!({ "serverId": id, "status": status }))
        }
        Commands::Stop { id } => {
            let status = dispatcher.stop(&id).await?;
            Ok(json!({ "serverId": id, "status": status }))
        }
        Commands::Restart { id } => {
            let status = dispatcher.restart(&id).await?;
            Ok(json!({ "serverId": id, "status": status }))
        }

        Commands::Delete { id } => {
            dispatcher.delete(&id).await?;
            Ok(json!({ "deleted": id }))
        }

        Commands::Clear { yes } => {
            let confirm: Box<dyn Confirm> = if yes {
                Box::new(AssumeYes)
            } else {
                Box::new(StdinConfirm)
            };
            let deleted = dispatcher.clear_all(confirm.as_ref()).await?;
            Ok(json!({ "deleted": deleted }))
        }

        Commands::Ip { id, new_ip } => {
            dispatcher.begin_address_edit(&id)?;
            let address = dispatcher.update_address(&new_ip).await?;
            Ok(json!({ "serverId": id, "address": address.map(|a| a.to_string()) }))
        }

        Commands::Plugins { id, toggle } => {
            let mut selection = dispatcher.begin_plugin_edit(&id)?;
            if !toggle.is_empty() {
                for name in &toggle {
                    dispatcher.toggle_plugin(name)?;
                }
                selection = dispatcher.plugin_selection().unwrap_or(selection);
                dispatcher.save_plugin_edit()?;
            }
            Ok(json!({ "serverId": id, "plugins": selection }))
        }

        Commands::Play { id } => {
            let connection = dispatcher.play(&id).await?;
            Ok(json!({ "serverId": id, "connection": connection }))
        }

        Commands::Copy { id } => {
            let connection = dispatcher.copy_connection(&id).await?;
            Ok(json!({ "serverId": id, "connection": connection }))
        }

        Commands::Download { id, .. } => {
            let path = dispatcher.download_config_bundle(&id)?;
            Ok(json!({ "serverId": id, "path": path.display().to_string() }))
        }
    }
}
