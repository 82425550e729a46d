//! Application API client methods

use crate::api::{ApiClient, JSON_MIME_TYPE};
use crate::error::CliResult;
use crate::models::{ApplicationRole, PermissionRequest};

impl ApiClient {
    /// List the applications of a subscription
    pub async fn list_applications(&self, subscription: &str) -> CliResult<String> {
        self.get(&[subscription, "applications"]).await
    }

    /// Get application metadata
    pub async fn get_application(&self, subscription: &str, application: &str) -> CliResult<String> {
        self.get(&[subscription, "applications", application]).await
    }

    /// Save application metadata from a JSON document
    pub async fn put_application(
        &self,
        subscription: &str,
        application: &str,
        document: String,
    ) -> CliResult<String> {
        self.put(
            &[subscription, "applications", application],
            Some(document),
            JSON_MIME_TYPE,
        )
        .await
    }

    /// Delete an application
    pub async fn delete_application(
        &self,
        subscription: &str,
        application: &str,
    ) -> CliResult<String> {
        self.delete(&[subscription, "applications", application]).await
    }

    /// List the users with access to an application
    pub async fn list_application_permissions(
        &self,
        subscription: &str,
        application: &str,
    ) -> CliResult<String> {
        self.get(&[subscription, "applications", application, "permissions"]).await
    }

    /// Make a user an administrator of an application
    pub async fn grant_application_permission(
        &self,
        subscription: &str,
        application: &str,
        username: &str,
    ) -> CliResult<String> {
        let request = PermissionRequest {
            permission_level: ApplicationRole::Admin,
            identity: username.to_string(),
        };
        self.post_json(
            &[subscription, "applications", application, "permissions"],
            &request,
        )
        .await
    }

    /// Remove a user from an application
    pub async fn revoke_application_permission(
        &self,
        subscription: &str,
        application: &str,
        username: &str,
    ) -> CliResult<String> {
        self.delete(&[
            subscription,
            "applications",
            application,
            "permissions",
            username,
        ])
        .await
    }
}
