//! TUI mode execution

use super::SessionData;
use crate::ui::{self, UIConfig};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs the login screen in the terminal
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. Mounting the login screen and running its event loop
/// 3. Abandoning the directory fetch if it is still in flight
///
/// # Arguments
/// * `session` - Session data from setup
/// * `with_background` - Whether to enable background colors
pub async fn run_tui_mode(session: SessionData, with_background: bool) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(
        session.outcome_receiver,
        session.cancel.clone(),
        UIConfig::new(with_background),
    );

    // The UI loop blocks on terminal input; the fetch keeps running on the
    // other runtime workers.
    let result = tokio::task::block_in_place(|| ui::run(&mut terminal, app));

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle the result
    result?;

    session.cancel.cancel();
    let _ = session.fetch_handle.await;
    log::info!("Login screen closed");

    Ok(())
}
