//! The persisted cloco configuration
//!
//! The configuration lives in a small INI file with three sections:
//!
//! ```text
//! [credentials]
//! cloco_client_key=
//! cloco_client_secret=
//! cloco_access_token=
//!
//! [settings]
//! url=
//!
//! [preferences]
//! subscription=
//! application=
//! environment=
//! ```
//!
//! Every field is a plain string and an empty string means "not set". The
//! file is read fresh on each invocation and the whole record is written back
//! whenever it changes.

use super::paths::ConfigPaths;
use crate::error::{CliError, CliResult};
use crate::output::print_info;
use ini::{EscapePolicy, Ini, ParseOption};

/// Endpoint used when `settings.url` is empty
pub const DEFAULT_API_URL: &str = "https://api.cloco.io";

const CREDENTIALS: &str = "credentials";
const SETTINGS: &str = "settings";
const PREFERENCES: &str = "preferences";

const CLIENT_KEY: &str = "cloco_client_key";
const CLIENT_SECRET: &str = "cloco_client_secret";
const ACCESS_TOKEN: &str = "cloco_access_token";
const URL: &str = "url";
const SUBSCRIPTION: &str = "subscription";
const APPLICATION: &str = "application";
const ENVIRONMENT: &str = "environment";

/// `[credentials]` section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub client_key: String,
    pub client_secret: String,
    /// Last bearer token issued by the token endpoint, may be empty
    pub access_token: String,
}

/// `[settings]` section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the API; empty selects [`DEFAULT_API_URL`]
    pub url: String,
}

/// `[preferences]` section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub subscription: String,
    pub application: String,
    pub environment: String,
}

/// In-memory copy of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    pub credentials: Credentials,
    pub settings: Settings,
    pub preferences: Preferences,
}

/// A single field of a partial update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Update {
    /// Option not given on the command line
    #[default]
    Absent,
    /// Option given with an empty value
    Empty,
    /// Option given with a value
    Value(String),
}

impl Update {
    fn apply_to(self, field: &mut String) {
        if let Update::Value(value) = self {
            *field = value;
        }
    }
}

impl From<Option<String>> for Update {
    fn from(value: Option<String>) -> Self {
        match value {
            None => Update::Absent,
            Some(v) if v.is_empty() => Update::Empty,
            Some(v) => Update::Value(v),
        }
    }
}

/// Partial update applied by `cloco init`
///
/// Only [`Update::Value`] fields overwrite; absent and empty ones keep
/// whatever the configuration already holds.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub client_key: Update,
    pub client_secret: Update,
    pub url: Update,
    pub subscription: Update,
    pub application: Update,
    pub environment: Update,
}

impl Configuration {
    /// A fresh configuration with every section present and every field empty
    pub fn create() -> Self {
        Self::default()
    }

    /// Whether the configuration file exists
    pub fn exists(paths: &ConfigPaths) -> bool {
        paths.config_file.is_file()
    }

    /// Load the configuration file
    ///
    /// Fails with [`CliError::ConfigurationMissing`] when the file is absent.
    /// Missing sections or keys load as empty strings.
    pub fn load(paths: &ConfigPaths) -> CliResult<Self> {
        if !Self::exists(paths) {
            return Err(CliError::ConfigurationMissing);
        }

        tracing::info!(path = %paths.config_file.display(), "loading configuration");
        let ini = Ini::load_from_file_opt(&paths.config_file, verbatim())?;
        Ok(Self::from_ini(&ini))
    }

    /// Write the configuration file, replacing any previous content
    ///
    /// `silent` only suppresses the status line.
    pub fn save(&self, paths: &ConfigPaths, silent: bool) -> CliResult<()> {
        if !silent {
            print_info("Saving config.....");
        }

        paths.ensure_dir_exists()?;
        self.to_ini()
            .write_to_file_policy(&paths.config_file, EscapePolicy::Nothing)?;

        // Restrict file permissions to owner-only (0600) on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&paths.config_file, perms)?;
        }

        tracing::info!(path = %paths.config_file.display(), "saved configuration");
        Ok(())
    }

    /// Base URL of the API, falling back to [`DEFAULT_API_URL`]
    pub fn url(&self) -> &str {
        if self.settings.url.is_empty() {
            DEFAULT_API_URL
        } else {
            &self.settings.url
        }
    }

    /// Merge a partial update into this configuration
    pub fn apply(&mut self, update: ConfigUpdate) {
        update.client_key.apply_to(&mut self.credentials.client_key);
        update
            .client_secret
            .apply_to(&mut self.credentials.client_secret);
        update.url.apply_to(&mut self.settings.url);
        update
            .subscription
            .apply_to(&mut self.preferences.subscription);
        update.application.apply_to(&mut self.preferences.application);
        update.environment.apply_to(&mut self.preferences.environment);
    }

    /// Explicit subscription, or the stored preference
    pub fn subscription_or(&self, explicit: Option<String>) -> CliResult<String> {
        resolve(explicit, &self.preferences.subscription, "subscription", "--sub")
    }

    /// Explicit application, or the stored preference
    pub fn application_or(&self, explicit: Option<String>) -> CliResult<String> {
        resolve(explicit, &self.preferences.application, "application", "--app")
    }

    /// Explicit environment, or the stored preference
    pub fn environment_or(&self, explicit: Option<String>) -> CliResult<String> {
        resolve(explicit, &self.preferences.environment, "environment", "--env")
    }

    /// Sections in file order, as `(section, [(key, value)])`
    pub fn sections(&self) -> [(&'static str, Vec<(&'static str, &str)>); 3] {
        [
            (
                CREDENTIALS,
                vec![
                    (CLIENT_KEY, self.credentials.client_key.as_str()),
                    (CLIENT_SECRET, self.credentials.client_secret.as_str()),
                    (ACCESS_TOKEN, self.credentials.access_token.as_str()),
                ],
            ),
            (SETTINGS, vec![(URL, self.settings.url.as_str())]),
            (
                PREFERENCES,
                vec![
                    (SUBSCRIPTION, self.preferences.subscription.as_str()),
                    (APPLICATION, self.preferences.application.as_str()),
                    (ENVIRONMENT, self.preferences.environment.as_str()),
                ],
            ),
        ]
    }

    fn from_ini(ini: &Ini) -> Self {
        let get = |section: &str, key: &str| {
            ini.get_from(Some(section), key)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            credentials: Credentials {
                client_key: get(CREDENTIALS, CLIENT_KEY),
                client_secret: get(CREDENTIALS, CLIENT_SECRET),
                access_token: get(CREDENTIALS, ACCESS_TOKEN),
            },
            settings: Settings {
                url: get(SETTINGS, URL),
            },
            preferences: Preferences {
                subscription: get(PREFERENCES, SUBSCRIPTION),
                application: get(PREFERENCES, APPLICATION),
                environment: get(PREFERENCES, ENVIRONMENT),
            },
        }
    }

    fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();
        for (section, entries) in self.sections() {
            for (key, value) in entries {
                ini.set_to(Some(section), key.to_string(), value.to_string());
            }
        }
        ini
    }
}

/// Values are stored without quoting or escaping, so read them back the same way
fn verbatim() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..Default::default()
    }
}

fn resolve(
    explicit: Option<String>,
    preferred: &str,
    what: &str,
    flag: &str,
) -> CliResult<String> {
    match explicit {
        Some(value) if !value.is_empty() => Ok(value),
        _ if !preferred.is_empty() => Ok(preferred.to_string()),
        _ => Err(CliError::InvalidInput(format!(
            "No {what} given. Pass {flag} or store a default with 'cloco init {flag} <ID>'."
        ))),
    }
}
