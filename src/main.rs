// Copyright (c) 2024 VHS Club. All rights reserved.

mod cli_messages;
mod config;
mod consts;
mod directory;
mod logging;
mod model;
mod session;
mod ui;
mod workers;

use crate::config::{Config, get_config_path, get_log_path};
use crate::consts::cli_consts::API_URL_ENV_VAR;
use crate::logging::LogSink;
use crate::session::{run_headless_check, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// VHS Club login screen
struct Args {
    /// Base URL of the user directory service (default: http://localhost:8080)
    #[arg(long, global = true, env = API_URL_ENV_VAR, value_name = "URL")]
    api_url: Option<String>,

    /// File that receives diagnostic logs while the login screen is open
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Disable background colors
    #[arg(long, global = true)]
    no_background: bool,

    /// Command to execute; opens the login screen when omitted
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Check a username against the directory without opening the login screen
    Check {
        /// Username to log in with (exact, case-sensitive)
        username: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let config_path = get_config_path()?;
    let config = Config::load_or_default(&config_path)
        .map_err(|e| format!("Failed to load config {}: {}", config_path.display(), e))?
        .with_api_url_override(args.api_url);

    match args.command {
        Some(Command::Check { username }) => {
            logging::init(LogSink::Stderr)?;
            let session = setup_session(&config);
            if !run_headless_check(session, &username).await? {
                std::process::exit(1);
            }
            Ok(())
        }
        None => {
            let log_path = match args.log_file {
                Some(path) => path,
                None => get_log_path()?,
            };
            if let Err(e) = logging::init(LogSink::File(&log_path)) {
                crate::print_cmd_warn!(
                    "Logging disabled",
                    "Could not open {}: {}",
                    log_path.display(),
                    e
                );
            }

            let with_background = config.with_background_color && !args.no_background;
            let session = setup_session(&config);
            run_tui_mode(session, with_background).await
        }
    }
}
