//! Configuration management for the cloco CLI

mod paths;
mod settings;

pub use paths::ConfigPaths;
pub use settings::{
    ConfigUpdate, Configuration, Credentials, Preferences, Settings, Update, DEFAULT_API_URL,
};
