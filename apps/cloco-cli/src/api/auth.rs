//! Client-credentials authentication against the token endpoint

use crate::config::{ConfigPaths, Configuration};
use crate::error::{CliError, CliResult};
use crate::logging::redact;
use crate::models::{TokenRequest, TokenResponse};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::time::Instant;

/// Whether a stored access token can be used without re-authenticating
///
/// Tokens are never inspected, so every invocation exchanges the client
/// credentials for a fresh token.
pub fn is_token_valid(_token: &str) -> bool {
    false
}

/// URL of the token endpoint for this configuration
pub fn token_url(config: &Configuration) -> String {
    format!("{}/oauth/token", config.url().trim_end_matches('/'))
}

/// Make sure `config` carries a usable access token
///
/// Takes the configuration by value and hands back the updated one. When the
/// stored token is not trusted the client credentials are exchanged for a
/// new token, which is written back to the configuration file silently. Any
/// status other than 200 from the token endpoint is fatal.
pub async fn ensure_authenticated(
    http: &Client,
    config: Configuration,
    paths: &ConfigPaths,
) -> CliResult<Configuration> {
    if is_token_valid(&config.credentials.access_token) {
        tracing::debug!("using stored access token");
        return Ok(config);
    }

    let access_token = request_token(http, &config).await?;

    let mut config = config;
    config.credentials.access_token = access_token;
    config.save(paths, true)?;

    Ok(config)
}

/// Exchange the stored client key and secret for an access token
async fn request_token(http: &Client, config: &Configuration) -> CliResult<String> {
    let url = token_url(config);
    tracing::info!(%url, "requesting access token");

    let started = Instant::now();
    let response = http
        .post(&url)
        .basic_auth(
            &config.credentials.client_key,
            Some(&config.credentials.client_secret),
        )
        .header(CONTENT_TYPE, "application/json")
        .json(&TokenRequest::client_credentials())
        .send()
        .await?;

    let status = response.status();
    tracing::debug!(
        method = "POST",
        %url,
        status = status.as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "token endpoint responded"
    );

    let body = response.text().await?;
    tracing::trace!(body = %redact(&body), "token response body");

    if status != StatusCode::OK {
        return Err(CliError::AuthenticationFailed(body));
    }

    let token: TokenResponse = serde_json::from_str(&body)
        .map_err(|e| CliError::AuthenticationFailed(format!("Invalid token response: {e}")))?;
    tracing::info!(
        token_type = token.token_type.as_deref().unwrap_or("bearer"),
        expires_in = token.expires_in,
        "access token issued"
    );

    Ok(token.access_token)
}
