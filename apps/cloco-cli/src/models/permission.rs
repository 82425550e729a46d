//! Permission grant models

use serde::Serialize;

/// Role granted on a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionRole {
    Admin,
    User,
}

/// Access granted on a configuration object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigurationAccess {
    Read,
    Write,
}

/// Body posted to every `.../permissions` endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRequest<L: Serialize> {
    pub permission_level: L,
    pub identity: String,
}

/// Level used for application permissions, which only know administrators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationRole {
    Admin,
}
