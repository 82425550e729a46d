//! API client modules for cloco

mod applications;
mod auth;
mod client;
mod configuration;
mod credentials;
mod subscriptions;

pub use auth::{ensure_authenticated, is_token_valid, token_url};
pub use client::{resource_url, ApiClient, JSON_MIME_TYPE};
