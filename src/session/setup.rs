//! Session setup and initialization

use crate::config::Config;
use crate::consts::cli_consts::FETCH_OUTCOME_QUEUE_SIZE;
use crate::directory::{DirectoryClient, UserDirectory};
use crate::workers::directory_fetcher::{FetchOutcome, spawn_directory_fetch};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Receives the outcome of the directory fetch
    pub outcome_receiver: mpsc::Receiver<FetchOutcome>,
    /// Cancels the directory fetch when the screen goes away
    pub cancel: CancellationToken,
    /// Join handle of the fetch task
    pub fetch_handle: JoinHandle<()>,
    /// Directory service the session talks to
    pub api_url: String,
}

/// Sets up a login session against the configured directory service.
///
/// Starts the one-time directory fetch immediately; the screen does not wait
/// for it before rendering.
pub fn setup_session(config: &Config) -> SessionData {
    let client = DirectoryClient::new(config.api_url.clone());
    log::info!("Using user directory at {}", client.base_url());
    setup_session_with(Box::new(client), config.api_url.clone())
}

/// Same as [`setup_session`] with an explicit directory implementation.
pub fn setup_session_with(directory: Box<dyn UserDirectory>, api_url: String) -> SessionData {
    let (outcome_sender, outcome_receiver) = mpsc::channel(FETCH_OUTCOME_QUEUE_SIZE);
    let cancel = CancellationToken::new();
    let fetch_handle = spawn_directory_fetch(directory, cancel.clone(), outcome_sender);

    SessionData {
        outcome_receiver,
        cancel,
        fetch_handle,
        api_url,
    }
}
