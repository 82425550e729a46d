//! CLI command implementations
//!
//! Every resource command follows the same sequence: load the configuration
//! file, check local inputs, authenticate, issue one request and print the
//! response. Local input errors therefore never reach the network.

pub mod application;
pub mod completions;
pub mod configuration;
pub mod credentials;
pub mod init;
pub mod me;
pub mod subscription;

use crate::config::{ConfigPaths, Configuration};
use crate::error::{CliError, CliResult};
use crate::output::Render;
use clap::Args;
use std::path::Path;

/// Subscription option shared by subscription-scoped commands
#[derive(Args, Debug, Clone, Default)]
pub struct SubscriptionScope {
    /// The subscription identifier, defaults to the subscription stored in the preferences
    #[arg(long)]
    pub sub: Option<String>,
}

/// Subscription and application options shared by application-scoped commands
#[derive(Args, Debug, Clone, Default)]
pub struct ApplicationScope {
    /// The subscription identifier, defaults to the subscription stored in the preferences
    #[arg(long)]
    pub sub: Option<String>,

    /// The application identifier, defaults to the application stored in the preferences
    #[arg(long)]
    pub app: Option<String>,
}

/// Options addressing one configuration object in one environment
#[derive(Args, Debug, Clone, Default)]
pub struct ObjectScope {
    /// The subscription identifier, defaults to the subscription stored in the preferences
    #[arg(long)]
    pub sub: Option<String>,

    /// The application identifier, defaults to the application stored in the preferences
    #[arg(long)]
    pub app: Option<String>,

    /// The configuration object identifier
    #[arg(long)]
    pub cob: String,

    /// The environment identifier, defaults to the environment stored in the preferences
    #[arg(long)]
    pub env: Option<String>,
}

/// `--raw` / `--json` switch for commands returning configuration data
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct DataFormat {
    /// Return the raw configuration data with no decoding (default)
    #[arg(long, conflicts_with = "json")]
    pub raw: bool,

    /// Return the configuration metadata and data as JSON
    #[arg(long)]
    pub json: bool,
}

impl DataFormat {
    pub fn render(self) -> Render {
        if self.json {
            Render::Json
        } else {
            Render::ConfigurationData
        }
    }
}

/// Load the configuration file from its fixed location
pub(crate) fn load_configuration() -> CliResult<(ConfigPaths, Configuration)> {
    let paths = ConfigPaths::new()?;
    let config = Configuration::load(&paths)?;
    Ok((paths, config))
}

/// Read a payload file, failing before any request is made
pub(crate) fn read_payload(filename: &Path) -> CliResult<String> {
    if !filename.is_file() {
        return Err(CliError::InvalidInput(format!(
            "File \"{}\" not found",
            filename.display()
        )));
    }

    Ok(std::fs::read_to_string(filename)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_payload_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("app.json");

        match read_payload(&missing) {
            Err(CliError::InvalidInput(msg)) => assert!(msg.contains("app.json")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_read_payload_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            read_payload(temp_dir.path()),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_read_payload_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("app.json");
        std::fs::write(&file, r#"{"name":"billing"}"#).unwrap();

        assert_eq!(read_payload(&file).unwrap(), r#"{"name":"billing"}"#);
    }

    #[test]
    fn test_data_format_defaults_to_raw() {
        assert_eq!(DataFormat::default().render(), Render::ConfigurationData);
        let json = DataFormat {
            raw: false,
            json: true,
        };
        assert_eq!(json.render(), Render::Json);
    }
}
