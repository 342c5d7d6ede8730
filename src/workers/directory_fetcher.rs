//! One-shot user directory fetch tied to the login screen's lifetime
//!
//! The fetch races a cancellation token owned by the screen. Once the screen
//! is torn down the result is reported as [`FetchOutcome::Aborted`] and never
//! reaches the screen's state.

use crate::directory::{DirectoryError, UserDirectory};
use crate::model::User;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Result of the directory fetch issued when the login screen mounts.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The directory answered with a list of users.
    Loaded(Vec<User>),
    /// Network or decode failure. Already logged; the screen keeps an empty list.
    Failed(DirectoryError),
    /// The screen went away before the response arrived.
    Aborted,
}

/// Fetch the directory once, logging failures instead of propagating them.
pub async fn fetch_directory(
    directory: &dyn UserDirectory,
    cancel: &CancellationToken,
) -> FetchOutcome {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            log::debug!("Directory fetch aborted: login screen closed");
            FetchOutcome::Aborted
        }
        result = directory.list_users() => match result {
            Ok(users) => FetchOutcome::Loaded(users),
            Err(e) => {
                log::log!(log::Level::from(e.log_level()), "Failed to fetch users: {}", e);
                FetchOutcome::Failed(e)
            }
        },
    }
}

/// Spawns the directory fetch and delivers its outcome to the screen.
///
/// `Aborted` outcomes are dropped here, as is any outcome that arrives after
/// the token was cancelled or the receiver closed.
pub fn spawn_directory_fetch(
    directory: Box<dyn UserDirectory>,
    cancel: CancellationToken,
    outcome_sender: mpsc::Sender<FetchOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = fetch_directory(directory.as_ref(), &cancel).await;
        if matches!(outcome, FetchOutcome::Aborted) || cancel.is_cancelled() {
            return;
        }
        if outcome_sender.send(outcome).await.is_err() {
            log::debug!("Login screen no longer listening for the directory fetch");
        }
    })
}
