//! Per-user configuration paths

use crate::error::{CliError, CliResult};
use std::path::{Path, PathBuf};

/// Directory under the home directory holding the cloco configuration
const CONFIG_DIR_NAME: &str = ".cloco";

/// File name of the INI configuration inside [`CONFIG_DIR_NAME`]
const CONFIG_FILE_NAME: &str = "configuration";

/// Configuration paths for the cloco CLI
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Base configuration directory (`~/.cloco`)
    pub config_dir: PathBuf,
    /// Path to the INI configuration file (`~/.cloco/configuration`)
    pub config_file: PathBuf,
}

impl ConfigPaths {
    /// Get configuration paths for the invoking user
    ///
    /// The location is fixed at `$HOME/.cloco/configuration`; there are no
    /// profiles and no override variable.
    pub fn new() -> CliResult<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            CliError::Config("Could not determine the home directory".to_string())
        })?;

        Ok(Self::under(&home))
    }

    /// Build the paths below an explicit home directory
    pub fn under(home: &Path) -> Self {
        let config_dir = home.join(CONFIG_DIR_NAME);

        Self {
            config_file: config_dir.join(CONFIG_FILE_NAME),
            config_dir,
        }
    }

    /// Ensure the configuration directory exists
    pub fn ensure_dir_exists(&self) -> CliResult<()> {
        if !self.config_dir.exists() {
            std::fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }
}
