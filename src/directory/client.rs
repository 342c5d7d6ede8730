//! User Directory Client
//!
//! Fetches the list of known users from the directory service over HTTP.

use crate::consts::cli_consts::{USERS_ENDPOINT, http};
use crate::directory::UserDirectory;
use crate::directory::error::DirectoryError;
use crate::model::User;
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with client version
const USER_AGENT: &str = concat!("vhs-club-login/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct DirectoryClient {
    client: Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(http::connect_timeout())
                .timeout(http::request_timeout())
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, DirectoryError> {
        if !response.status().is_success() {
            return Err(DirectoryError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl UserDirectory for DirectoryClient {
    async fn list_users(&self) -> Result<Vec<User>, DirectoryError> {
        let url = self.build_url(USERS_ENDPOINT);
        log::debug!("Fetching user directory from {}", url);

        let response = self.client.get(&url).send().await?;
        let response = Self::handle_response_status(response).await?;
        let body = response.bytes().await?;
        let users: Vec<User> = serde_json::from_slice(&body)?;

        log::info!("Fetched {} users from the directory", users.len());
        Ok(users)
    }
}
