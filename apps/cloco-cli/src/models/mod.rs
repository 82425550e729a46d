//! Request and response models for the cloco API

pub mod configuration;
pub mod permission;
pub mod subscription;
pub mod token;

pub use configuration::{ConfigurationObjectRef, DEFAULT_CONFIGURATION_MIME_TYPE};
pub use permission::{ApplicationRole, ConfigurationAccess, PermissionRequest, SubscriptionRole};
pub use subscription::CreateSubscriptionRequest;
pub use token::{TokenRequest, TokenResponse};
