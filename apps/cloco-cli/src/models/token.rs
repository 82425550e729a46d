//! Client-credentials token exchange models

use serde::{Deserialize, Serialize};

/// OAuth2 grant used for every token exchange
pub const CLIENT_CREDENTIALS_GRANT: &str = "client_credentials";

/// Body posted to `/oauth/token` and `/user/credentials`
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest {
    pub grant_type: &'static str,
}

impl TokenRequest {
    pub fn client_credentials() -> Self {
        Self {
            grant_type: CLIENT_CREDENTIALS_GRANT,
        }
    }
}

/// Response from the token endpoint
///
/// Only `access_token` is required; the remaining fields are informational.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for subsequent requests
    pub access_token: String,

    /// Token type (normally "bearer")
    #[serde(default)]
    pub token_type: Option<String>,

    /// Seconds until the access token expires
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_request_serialization() {
        let json = serde_json::to_string(&TokenRequest::client_credentials()).unwrap();
        assert_eq!(json, r#"{"grant_type":"client_credentials"}"#);
    }

    #[test]
    fn test_token_response_minimal() {
        let response: TokenResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(response.access_token, "abc");
        assert!(response.token_type.is_none());
        assert!(response.expires_in.is_none());
    }

    #[test]
    fn test_token_response_full() {
        let json = r#"{
            "access_token": "eyJhbGciOiJIUzI1NiJ9.e30.sig",
            "token_type": "bearer",
            "expires_in": 3600,
            "scope": "read write"
        }"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token_type.as_deref(), Some("bearer"));
        assert_eq!(response.expires_in, Some(3600));
    }

    #[test]
    fn test_token_response_without_access_token() {
        let result: Result<TokenResponse, _> = serde_json::from_str(r#"{"token_type":"bearer"}"#);
        assert!(result.is_err());
    }
}
