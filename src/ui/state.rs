//! Login screen state management
//!
//! All state changes go through [`LoginState::apply`], which keeps the
//! Anonymous → Authenticated machine in one place and testable without a
//! terminal.

use crate::consts::cli_consts::USERNAME_NOT_FOUND;
use crate::model::{User, is_known_user};
use crate::ui::fields::{FieldId, next_field, previous_field};
use crate::workers::directory_fetcher::FetchOutcome;

/// Whether the user has logged in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, strum::Display)]
pub enum AuthState {
    #[default]
    Anonymous,
    /// Terminal for the lifetime of the screen; there is no logout.
    Authenticated,
}

/// Everything that can happen to the login screen.
#[derive(Debug)]
pub enum Action {
    /// The text of a field changed; carries the field's full new value.
    Input { field: FieldId, value: String },
    FocusNext,
    FocusPrevious,
    /// The form was submitted.
    Submit,
    /// The directory fetch issued on mount finished.
    DirectoryFetched(FetchOutcome),
}

/// State owned by one login screen instance.
#[derive(Debug, Default)]
pub struct LoginState {
    auth: AuthState,
    users: Vec<User>,
    username_input: String,
    /// Kept only so the masked field can be drawn; login never reads it.
    password_input: String,
    error_message: Option<String>,
    focus: FieldId,
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(unused)]
    pub fn auth(&self) -> AuthState {
        self.auth
    }

    pub fn is_logged_in(&self) -> bool {
        self.auth == AuthState::Authenticated
    }

    #[allow(unused)]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn username_input(&self) -> &str {
        &self.username_input
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn focus(&self) -> FieldId {
        self.focus
    }

    /// Current text of a form field.
    pub fn field_value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Username => &self.username_input,
            FieldId::Password => &self.password_input,
        }
    }

    /// Applies one action.
    ///
    /// Once authenticated, only directory updates are accepted and they never
    /// re-validate the logged-in user.
    pub fn apply(&mut self, action: Action) {
        if let Action::DirectoryFetched(outcome) = action {
            self.apply_fetch_outcome(outcome);
            return;
        }
        if self.is_logged_in() {
            return;
        }

        match action {
            Action::Input { field, value } => match field {
                FieldId::Username => self.username_input = value,
                FieldId::Password => self.password_input = value,
            },
            Action::FocusNext => self.focus = next_field(self.focus),
            Action::FocusPrevious => self.focus = previous_field(self.focus),
            Action::Submit => self.submit(),
            Action::DirectoryFetched(_) => {}
        }
    }

    fn apply_fetch_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Loaded(users) => {
                log::debug!("Directory loaded with {} users", users.len());
                self.users = users;
            }
            FetchOutcome::Failed(e) => {
                log::debug!("Keeping {} users after failed fetch: {}", self.users.len(), e);
            }
            FetchOutcome::Aborted => {}
        }
    }

    fn submit(&mut self) {
        if is_known_user(&self.users, &self.username_input) {
            log::info!("Login complete for {}", self.username_input);
            self.auth = AuthState::Authenticated;
            self.error_message = None;
        } else {
            log::debug!(
                "Username {:?} not found among {} users",
                self.username_input,
                self.users.len()
            );
            self.error_message = Some(USERNAME_NOT_FOUND.to_string());
        }
    }
}
