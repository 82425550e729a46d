//! Configuration object addressing

/// Default content type for configuration uploads
pub const DEFAULT_CONFIGURATION_MIME_TYPE: &str = "application/x-www-form-urlencoded";

/// A configuration object within one environment of an application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationObjectRef {
    pub subscription: String,
    pub application: String,
    pub object: String,
    pub environment: String,
}

impl ConfigurationObjectRef {
    /// `{sub}/configuration/{app}/{cob}/{env}`
    pub fn segments(&self) -> Vec<&str> {
        vec![
            self.subscription.as_str(),
            "configuration",
            self.application.as_str(),
            self.object.as_str(),
            self.environment.as_str(),
        ]
    }

    /// `{sub}/configuration/versions/{app}/{cob}/{env}`
    pub fn version_segments(&self) -> Vec<&str> {
        vec![
            self.subscription.as_str(),
            "configuration",
            "versions",
            self.application.as_str(),
            self.object.as_str(),
            self.environment.as_str(),
        ]
    }
}
