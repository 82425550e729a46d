//! Configuration object API client methods

use crate::api::{ApiClient, JSON_MIME_TYPE};
use crate::error::CliResult;
use crate::models::{ConfigurationAccess, ConfigurationObjectRef, PermissionRequest};

impl ApiClient {
    /// List the configuration objects of an application
    pub async fn list_configuration(
        &self,
        subscription: &str,
        application: &str,
    ) -> CliResult<String> {
        self.get(&[subscription, "configuration", application]).await
    }

    /// Get a configuration object for one environment
    pub async fn get_configuration(&self, target: &ConfigurationObjectRef) -> CliResult<String> {
        self.get(&target.segments()).await
    }

    /// Store configuration data with the given content type
    pub async fn put_configuration(
        &self,
        target: &ConfigurationObjectRef,
        data: String,
        mime_type: &str,
    ) -> CliResult<String> {
        self.put(&target.segments(), Some(data), mime_type).await
    }

    /// List the version history of a configuration object
    pub async fn list_configuration_versions(
        &self,
        target: &ConfigurationObjectRef,
    ) -> CliResult<String> {
        self.get(&target.version_segments()).await
    }

    /// Get one revision of a configuration object
    pub async fn get_configuration_version(
        &self,
        target: &ConfigurationObjectRef,
        version: &str,
    ) -> CliResult<String> {
        let mut segments = target.version_segments();
        segments.push(version);
        self.get(&segments).await
    }

    /// Make an earlier revision the current one
    pub async fn restore_configuration_version(
        &self,
        target: &ConfigurationObjectRef,
        version: &str,
    ) -> CliResult<String> {
        let mut segments = target.version_segments();
        segments.push(version);
        self.put(&segments, None, JSON_MIME_TYPE).await
    }

    /// List the users with access to a configuration object
    pub async fn list_configuration_permissions(
        &self,
        target: &ConfigurationObjectRef,
    ) -> CliResult<String> {
        let mut segments = target.segments();
        segments.push("permissions");
        self.get(&segments).await
    }

    /// Grant read or write access on a configuration object
    pub async fn grant_configuration_permission(
        &self,
        target: &ConfigurationObjectRef,
        username: &str,
        access: ConfigurationAccess,
    ) -> CliResult<String> {
        let mut segments = target.segments();
        segments.push("permissions");
        let request = PermissionRequest {
            permission_level: access,
            identity: username.to_string(),
        };
        self.post_json(&segments, &request).await
    }

    /// Remove a user's access to a configuration object
    pub async fn revoke_configuration_permission(
        &self,
        target: &ConfigurationObjectRef,
        username: &str,
    ) -> CliResult<String> {
        let mut segments = target.segments();
        segments.extend(["permissions", username]);
        self.delete(&segments).await
    }
}
