//! Client credential API client methods

use crate::api::ApiClient;
use crate::error::CliResult;
use crate::models::TokenRequest;

impl ApiClient {
    /// List the client credentials of the authenticated user
    pub async fn list_credentials(&self) -> CliResult<String> {
        self.get(&["user", "credentials"]).await
    }

    /// Issue a new client key and secret
    pub async fn create_credentials(&self) -> CliResult<String> {
        let request = TokenRequest::client_credentials();
        self.post_json(&["user", "credentials"], &request).await
    }

    /// Revoke a client key
    pub async fn delete_credentials(&self, client_key: &str) -> CliResult<String> {
        self.delete(&["user", "credentials", client_key]).await
    }
}
