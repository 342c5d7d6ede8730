//! Main application state and UI loop
//!
//! Contains the App struct (the mounted login screen) and its key handling.

use crate::consts::cli_consts::UI_POLL_INTERVAL_MS;
use crate::ui::fields::FieldId;
use crate::ui::login::render_login;
use crate::ui::state::{Action, LoginState};
use crate::workers::directory_fetcher::FetchOutcome;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// What the event loop should do after handling a key.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// A mounted login screen.
#[derive(Debug)]
pub struct App {
    state: LoginState,

    /// Receives the outcome of the directory fetch started on mount.
    outcome_receiver: mpsc::Receiver<FetchOutcome>,

    /// Cancelled when the screen is torn down so a late response is discarded.
    cancel: CancellationToken,

    with_background_color: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        outcome_receiver: mpsc::Receiver<FetchOutcome>,
        cancel: CancellationToken,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            state: LoginState::new(),
            outcome_receiver,
            cancel,
            with_background_color: ui_config.with_background_color,
        }
    }

    #[allow(unused)]
    pub fn state(&self) -> &LoginState {
        &self.state
    }

    /// Applies any directory fetch outcome that has arrived, without waiting.
    pub fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_receiver.try_recv() {
            self.state.apply(Action::DirectoryFetched(outcome));
        }
    }

    /// Maps a key press onto login actions.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind == KeyEventKind::Release {
            return KeyOutcome::Continue;
        }

        let ctrl_c =
            key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if key.code == KeyCode::Esc || ctrl_c {
            return KeyOutcome::Quit;
        }

        if self.state.is_logged_in() {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
                return KeyOutcome::Quit;
            }
            return KeyOutcome::Continue;
        }

        let focus = self.state.focus();
        match key.code {
            KeyCode::Enter => self.state.apply(Action::Submit),
            KeyCode::Tab | KeyCode::Down => self.state.apply(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => self.state.apply(Action::FocusPrevious),
            KeyCode::Backspace => {
                let mut value = self.state.field_value(focus).to_string();
                if value.pop().is_some() {
                    self.edit(focus, value);
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut value = self.state.field_value(focus).to_string();
                value.push(c);
                self.edit(focus, value);
            }
            _ => {}
        }
        KeyOutcome::Continue
    }

    fn edit(&mut self, field: FieldId, value: String) {
        self.state.apply(Action::Input { field, value });
    }

    /// Tears the screen down; an in-flight directory fetch is abandoned.
    pub fn unmount(&mut self) {
        self.cancel.cancel();
        self.outcome_receiver.close();
    }
}

/// Runs the login screen until the user quits.
///
/// Blocks on terminal input; call it from a context that may block.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let result = event_loop(terminal, &mut app);
    app.unmount();
    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> std::io::Result<()> {
    loop {
        app.drain_outcomes();

        terminal.draw(|f| render_login(f, &app.state, app.with_background_color))?;

        // Poll for key events
        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key) == KeyOutcome::Quit {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;
    use crate::ui::state::AuthState;

    fn new_app() -> (App, mpsc::Sender<FetchOutcome>, CancellationToken) {
        let (sender, receiver) = mpsc::channel(1);
        let cancel = CancellationToken::new();
        let app = App::new(receiver, cancel.clone(), UIConfig::new(false));
        (app, sender, cancel)
    }

    fn press(app: &mut App, code: KeyCode) -> KeyOutcome {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[tokio::test]
    async fn test_typing_and_login_flow() {
        let (mut app, sender, _cancel) = new_app();
        sender
            .send(FetchOutcome::Loaded(vec![User::new("alice")]))
            .await
            .unwrap();
        app.drain_outcomes();

        type_text(&mut app, "alicx");
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "e");
        assert_eq!(app.state().username_input(), "alice");

        assert_eq!(press(&mut app, KeyCode::Enter), KeyOutcome::Continue);
        assert_eq!(app.state().auth(), AuthState::Authenticated);
    }

    #[test]
    // 'q' is ordinary text while the form is showing.
    fn test_q_is_typed_not_quit_on_form() {
        let (mut app, _sender, _cancel) = new_app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), KeyOutcome::Continue);
        assert_eq!(app.state().username_input(), "q");
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _sender, _cancel) = new_app();
        assert_eq!(press(&mut app, KeyCode::Esc), KeyOutcome::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyOutcome::Quit
        );
    }

    #[tokio::test]
    async fn test_q_quits_after_login() {
        let (mut app, sender, _cancel) = new_app();
        sender
            .send(FetchOutcome::Loaded(vec![User::new("bob")]))
            .await
            .unwrap();
        app.drain_outcomes();
        type_text(&mut app, "bob");
        press(&mut app, KeyCode::Enter);

        assert_eq!(press(&mut app, KeyCode::Char('x')), KeyOutcome::Continue);
        assert_eq!(app.state().username_input(), "bob");
        assert_eq!(press(&mut app, KeyCode::Char('q')), KeyOutcome::Quit);
    }

    #[test]
    fn test_tab_moves_typing_to_password() {
        let (mut app, _sender, _cancel) = new_app();
        type_text(&mut app, "alice");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "pw");

        assert_eq!(app.state().focus(), FieldId::Password);
        assert_eq!(app.state().username_input(), "alice");
        assert_eq!(app.state().field_value(FieldId::Password), "pw");

        press(&mut app, KeyCode::Up);
        assert_eq!(app.state().focus(), FieldId::Username);
    }

    #[test]
    fn test_backspace_on_empty_field() {
        let (mut app, _sender, _cancel) = new_app();
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.state().username_input(), "");
    }

    #[test]
    fn test_release_events_are_ignored() {
        let (mut app, _sender, _cancel) = new_app();
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.state().username_input(), "");
    }

    #[tokio::test]
    async fn test_unmount_cancels_fetch() {
        let (mut app, sender, cancel) = new_app();
        app.unmount();

        assert!(cancel.is_cancelled());
        assert!(sender.send(FetchOutcome::Aborted).await.is_err());
    }
}
