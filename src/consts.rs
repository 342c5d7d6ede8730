pub mod cli_consts {
    //! Login Screen Constants
    //!
    //! Configuration constants for the login client, organized by functional
    //! area.

    // =============================================================================
    // DIRECTORY SERVICE
    // =============================================================================

    /// Address the user directory service listens on when nothing else is configured.
    pub const DEFAULT_API_URL: &str = "http://localhost:8080";

    /// Environment variable overriding the directory service address.
    pub const API_URL_ENV_VAR: &str = "VHS_API_URL";

    /// Endpoint listing every known user.
    pub const USERS_ENDPOINT: &str = "/users";

    /// HTTP timeouts for the directory fetch
    pub mod http {
        use std::time::Duration;

        pub const CONNECT_TIMEOUT_SECS: u64 = 10;
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // LOGIN FLOW
    // =============================================================================

    /// Shown when the submitted username is not in the fetched directory.
    pub const USERNAME_NOT_FOUND: &str = "Username not found. Please try again.";

    /// Buffer size of the channel carrying the directory fetch outcome.
    /// Only one outcome is ever sent per mount.
    pub const FETCH_OUTCOME_QUEUE_SIZE: usize = 1;

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// How long the UI loop waits for a key press before redrawing (milliseconds)
    pub const UI_POLL_INTERVAL_MS: u64 = 100;

    /// Mask character for password-type inputs
    pub const PASSWORD_MASK: char = '*';

    // =============================================================================
    // FILES
    // =============================================================================

    /// Directory under $HOME holding the config and log files
    pub const APP_DIR_NAME: &str = ".vhs-club";

    pub const CONFIG_FILE_NAME: &str = "config.json";

    pub const LOG_FILE_NAME: &str = "login.log";
}
