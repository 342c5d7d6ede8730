//! Headless membership check

use super::SessionData;
use crate::ui::fields::FieldId;
use crate::ui::state::{Action, LoginState};
use crate::{print_cmd_info, print_cmd_success};
use std::error::Error;

/// Runs the login flow for one username without a terminal UI.
///
/// Waits for the directory fetch (a failed fetch leaves the directory empty),
/// then submits `username`. Ctrl+C abandons the fetch.
///
/// # Returns
/// * `Ok(true)` - the username is known and the login succeeded
/// * `Ok(false)` - the username was not found
pub async fn run_headless_check(
    mut session: SessionData,
    username: &str,
) -> Result<bool, Box<dyn Error>> {
    print_cmd_info!("Checking user", "{} against {}", username, session.api_url);

    let mut state = LoginState::new();

    tokio::select! {
        outcome = session.outcome_receiver.recv() => {
            if let Some(outcome) = outcome {
                state.apply(Action::DirectoryFetched(outcome));
            }
        }
        _ = tokio::signal::ctrl_c() => {
            session.cancel.cancel();
        }
    }
    let _ = session.fetch_handle.await;

    state.apply(Action::Input {
        field: FieldId::Username,
        value: username.to_string(),
    });
    state.apply(Action::Submit);

    if state.is_logged_in() {
        print_cmd_success!("Login complete", "Welcome, {}", state.username_input());
        Ok(true)
    } else {
        let message = state.error_message().unwrap_or_default();
        crate::print_cmd_error!(message);
        Ok(false)
    }
}
