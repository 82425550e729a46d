//! HTTP client wrapper for the cloco API

use super::auth::ensure_authenticated;
use crate::config::{ConfigPaths, Configuration};
use crate::error::{CliError, CliResult};
use crate::logging::redact;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use std::time::Instant;

/// Content type sent with every request unless a caller overrides it
pub const JSON_MIME_TYPE: &str = "application/json";

/// API client for making authenticated requests
///
/// Holds the configuration snapshot returned by the authenticator, so every
/// request carries the token issued for this invocation.
pub struct ApiClient {
    http: Client,
    config: Configuration,
}

impl ApiClient {
    /// Authenticate with the stored client credentials and build a client
    pub async fn connect(config: Configuration, paths: &ConfigPaths) -> CliResult<Self> {
        let http = build_http_client()?;
        let config = ensure_authenticated(&http, config, paths).await?;

        Ok(Self { http, config })
    }

    /// Resource URL for the given path segments
    ///
    /// Segments are percent-encoded; no segments yields the base URL itself.
    pub fn url(&self, segments: &[&str]) -> String {
        resource_url(self.config.url(), segments)
    }

    /// Make an authenticated GET request
    pub async fn get(&self, segments: &[&str]) -> CliResult<String> {
        self.send(Method::GET, segments, JSON_MIME_TYPE, None).await
    }

    /// Make an authenticated DELETE request
    pub async fn delete(&self, segments: &[&str]) -> CliResult<String> {
        self.send(Method::DELETE, segments, JSON_MIME_TYPE, None).await
    }

    /// Make an authenticated POST request with a JSON body
    pub async fn post_json<T: Serialize>(&self, segments: &[&str], body: &T) -> CliResult<String> {
        let body = serde_json::to_string(body)?;
        self.send(Method::POST, segments, JSON_MIME_TYPE, Some(body)).await
    }

    /// Make an authenticated PUT request with a raw body and content type
    pub async fn put(
        &self,
        segments: &[&str],
        body: Option<String>,
        mime_type: &str,
    ) -> CliResult<String> {
        self.send(Method::PUT, segments, mime_type, body).await
    }

    /// Issue one request and return the body of a 200 response
    async fn send(
        &self,
        method: Method,
        segments: &[&str],
        mime_type: &str,
        body: Option<String>,
    ) -> CliResult<String> {
        let url = self.url(segments);

        if let Some(ref b) = body {
            tracing::trace!(%method, %url, body = %redact(b), "request body");
        }

        let mut request = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(&self.config.credentials.access_token)
            .header(CONTENT_TYPE, mime_type);
        if let Some(b) = body {
            request = request.body(b);
        }

        let started = Instant::now();
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(
            %method,
            %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );

        let text = response.text().await?;
        tracing::trace!(body = %redact(&text), "response body");

        if status == StatusCode::OK {
            Ok(text)
        } else {
            Err(CliError::RequestFailed {
                status: status.as_u16(),
                body: text,
            })
        }
    }
}

fn build_http_client() -> CliResult<Client> {
    Client::builder()
        .user_agent(concat!("cloco-cli/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| CliError::Network(format!("Failed to create HTTP client: {e}")))
}

/// Join percent-encoded path segments onto a base URL
pub fn resource_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(&urlencoding::encode(segment));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_url_base_only() {
        assert_eq!(resource_url("https://api.cloco.io", &[]), "https://api.cloco.io");
    }

    #[test]
    fn test_resource_url_joins_segments() {
        assert_eq!(
            resource_url("https://api.cloco.io/", &["acme", "applications", "billing"]),
            "https://api.cloco.io/acme/applications/billing"
        );
    }

    #[test]
    fn test_resource_url_encodes_segments() {
        assert_eq!(
            resource_url("https://x", &["acme", "permissions", "jane doe/ops"]),
            "https://x/acme/permissions/jane%20doe%2Fops"
        );
    }

    #[test]
    fn test_resource_url_encodes_at_sign() {
        assert_eq!(
            resource_url("https://x", &["jane.doe@example.com"]),
            "https://x/jane.doe%40example.com"
        );
    }
}
