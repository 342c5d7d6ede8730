//! User directory access
//!
//! The directory is an external HTTP service listing every user that may log in.

use crate::model::User;

pub mod client;
pub mod error;

pub use client::DirectoryClient;
pub use error::DirectoryError;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch the full list of known users.
    async fn list_users(&self) -> Result<Vec<User>, DirectoryError>;
}
