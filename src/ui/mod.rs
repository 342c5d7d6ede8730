// Module declarations
mod app;
pub mod banner;
pub mod fields;
pub mod labeled_input;
mod login;
pub mod state;
// Re-exports for external use
pub use app::{App, UIConfig, run};
