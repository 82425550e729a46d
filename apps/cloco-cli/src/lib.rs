//! cloco - command-line client for the cloco configuration service
//!
//! Credentials and preferences live in an INI file at
//! `~/.cloco/configuration`. Every resource command authenticates with the
//! OAuth2 client-credentials grant before issuing its request.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;

pub use cli::{run, Cli};
pub use error::{CliError, CliResult};
