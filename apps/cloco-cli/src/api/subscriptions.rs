//! Subscription API client methods

use crate::api::ApiClient;
use crate::error::CliResult;
use crate::models::{CreateSubscriptionRequest, PermissionRequest, SubscriptionRole};

impl ApiClient {
    /// Information about the authenticated user
    pub async fn me(&self) -> CliResult<String> {
        self.get(&["me"]).await
    }

    /// List the subscriptions the user can access
    pub async fn list_subscriptions(&self) -> CliResult<String> {
        self.get(&[]).await
    }

    /// Create a subscription
    pub async fn create_subscription(&self, subscription: &str) -> CliResult<String> {
        let request = CreateSubscriptionRequest {
            subscription_id: subscription.to_string(),
        };
        self.post_json(&["subscription"], &request).await
    }

    /// Get a subscription
    pub async fn get_subscription(&self, subscription: &str) -> CliResult<String> {
        self.get(&[subscription]).await
    }

    /// Delete a subscription
    pub async fn delete_subscription(&self, subscription: &str) -> CliResult<String> {
        self.delete(&[subscription]).await
    }

    /// List the users with access to a subscription
    pub async fn list_subscription_permissions(&self, subscription: &str) -> CliResult<String> {
        self.get(&[subscription, "permissions"]).await
    }

    /// Grant or change a user's role on a subscription
    pub async fn grant_subscription_permission(
        &self,
        subscription: &str,
        username: &str,
        role: SubscriptionRole,
    ) -> CliResult<String> {
        let request = PermissionRequest {
            permission_level: role,
            identity: username.to_string(),
        };
        self.post_json(&[subscription, "permissions"], &request).await
    }

    /// Remove a user from a subscription
    pub async fn revoke_subscription_permission(
        &self,
        subscription: &str,
        username: &str,
    ) -> CliResult<String> {
        self.delete(&[subscription, "permissions", username]).await
    }
}
