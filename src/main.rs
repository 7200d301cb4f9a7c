mod api;
mod cli_messages;
mod commands;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod notifications;
mod query;
mod session;
mod ui;
mod views;

use crate::api::{ApiClient, DashboardApi};
use crate::commands::ApiCommand;
use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::session::setup::{ENV_API_URL, ENV_ENVIRONMENT};
use crate::session::{
    resolve_environment_from_env, run_headless_mode, run_tui_mode, setup_session,
};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Live terminal dashboard for Chainwatch devices, tokens and network
struct Args {
    /// Backend to use: local, staging, production, or an API base URL
    #[arg(long, global = true, value_name = "ENV")]
    environment: Option<String>,

    /// Command to execute (defaults to the dashboard)
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the live dashboard
    Dashboard {
        /// Disable background colors
        #[arg(long)]
        no_background: bool,
    },
    /// Print dashboard refreshes to the console until Ctrl+C
    Watch,
    #[command(flatten)]
    Api(ApiCommand),
    /// Remove the configuration file.
    Logout,
}

impl Default for Command {
    fn default() -> Self {
        Command::Dashboard {
            no_background: false,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = get_config_path()?;
    let command = args.command.unwrap_or_default();

    // Logout must work even when the config file is unreadable
    if matches!(command, Command::Logout) {
        return logout(&config_path);
    }

    if let Some(value) = &args.environment {
        if value.parse::<Environment>().is_err() {
            return Err(format!(
                "Unknown environment '{}': expected local, staging, production or an http(s) URL",
                value
            )
            .into());
        }
    }

    let config = Config::load_or_default(&config_path)
        .map_err(|e| format!("Failed to load config {}: {}", config_path.display(), e))?;
    warn_on_ignored_environments(&config);
    let environment = resolve_environment_from_env(args.environment.as_deref(), &config);
    let client = Arc::new(ApiClient::new(environment)?.with_api_token(config.api_token.clone()));

    match command {
        Command::Dashboard { no_background } => {
            let with_background = !no_background && config.with_background_color.unwrap_or(true);
            let session = setup_session(client.clone(), client, &config);
            run_tui_mode(session, with_background).await
        }
        Command::Watch => {
            let session = setup_session(client.clone(), client, &config);
            run_headless_mode(session).await
        }
        Command::Api(api_command) => run_api_command(api_command, &client).await,
        Command::Logout => logout(&config_path),
    }
}

/// Reports environment values that resolution will skip.
fn warn_on_ignored_environments(config: &Config) {
    let sources = [
        (ENV_API_URL, std::env::var(ENV_API_URL).ok()),
        (ENV_ENVIRONMENT, std::env::var(ENV_ENVIRONMENT).ok()),
        ("the config file", config.environment.clone()),
    ];
    for (source, value) in sources {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            if value.parse::<Environment>().is_err() {
                print_cmd_warn!("Ignoring unknown environment", "'{}' from {}", value, source);
            }
        }
    }
}

fn logout(config_path: &Path) -> Result<(), Box<dyn Error>> {
    print_cmd_info!("Logging out", "Clearing {}", config_path.display());
    Config::clear(config_path)?;
    print_cmd_success!("Logged out", "Configuration removed");
    Ok(())
}

/// Runs a one-shot command and prints the response as pretty JSON.
async fn run_api_command(command: ApiCommand, client: &ApiClient) -> Result<(), Box<dyn Error>> {
    match command.execute(client, client).await {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            if command.is_write() {
                print_cmd_success!("Request accepted", "{}", client.environment());
            }
            Ok(())
        }
        Err(e) => {
            print_cmd_error!("Request failed", "{}", e);
            std::process::exit(1);
        }
    }
}
