//! Command-line definition and dispatch

use crate::commands;
use crate::error::CliResult;
use crate::logging::LogLevel;
use clap::{Parser, Subcommand};

/// cloco - configuration as a service from the command line
#[derive(Parser, Debug)]
#[command(name = "cloco")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log configuration and authentication steps to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Also log HTTP methods, URLs and status codes
    #[arg(long, global = true)]
    pub debug: bool,

    /// Also log request and response bodies, with secrets redacted
    #[arg(long, global = true)]
    pub trace: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Diagnostic level from the global flags and `CLOCO_*` variables
    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_flags_and_env(self.verbose, self.debug, self.trace)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or update the local configuration
    Init(commands::init::InitArgs),

    /// Show the authenticated user
    Me,

    /// Manage subscriptions
    Subscription(commands::subscription::SubscriptionArgs),

    /// Manage applications
    Application(commands::application::ApplicationArgs),

    /// Manage configuration objects
    Configuration(commands::configuration::ConfigurationArgs),

    /// Manage your API credentials
    Credentials(commands::credentials::CredentialsArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

/// Dispatch a parsed command line
pub async fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::Me => commands::me::execute().await,
        Commands::Subscription(args) => commands::subscription::execute(args).await,
        Commands::Application(args) => commands::application::execute(args).await,
        Commands::Configuration(args) => commands::configuration::execute(args).await,
        Commands::Credentials(args) => commands::credentials::execute(args).await,
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_configuration_put() {
        let cli = Cli::try_parse_from([
            "cloco",
            "configuration",
            "put",
            "--cob",
            "database",
            "--data",
            "a=b",
            "--mime-type",
            "text/plain",
        ])
        .unwrap();

        match cli.command {
            Commands::Configuration(args) => match args.command {
                commands::configuration::ConfigurationCommands::Put(put) => {
                    assert_eq!(put.object.cob, "database");
                    assert_eq!(put.data.as_deref(), Some("a=b"));
                    assert_eq!(put.mime_type, "text/plain");
                    assert!(put.object.sub.is_none());
                }
                other => panic!("unexpected command {other:?}"),
            },
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_put_mime_type_default() {
        let cli = Cli::try_parse_from([
            "cloco",
            "configuration",
            "put",
            "--cob",
            "database",
            "--data",
            "a=b",
        ])
        .unwrap();

        let Commands::Configuration(args) = cli.command else {
            panic!("expected configuration command");
        };
        let commands::configuration::ConfigurationCommands::Put(put) = args.command else {
            panic!("expected put");
        };
        assert_eq!(put.mime_type, "application/x-www-form-urlencoded");
    }

    #[test]
    fn test_filename_conflicts_with_data() {
        let result = Cli::try_parse_from([
            "cloco",
            "configuration",
            "put",
            "--cob",
            "database",
            "--data",
            "a=b",
            "--filename",
            "db.properties",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_version_option_on_revisions() {
        let cli = Cli::try_parse_from([
            "cloco",
            "configuration",
            "version",
            "get",
            "--cob",
            "database",
            "--version",
            "7",
            "--json",
        ])
        .unwrap();

        let Commands::Configuration(args) = cli.command else {
            panic!("expected configuration command");
        };
        let commands::configuration::ConfigurationCommands::Version(
            commands::configuration::VersionCommands::Get(get),
        ) = args.command
        else {
            panic!("expected version get");
        };
        assert_eq!(get.revision.version, "7");
        assert!(get.format.json);
    }

    #[test]
    fn test_raw_conflicts_with_json() {
        let result = Cli::try_parse_from([
            "cloco",
            "configuration",
            "get",
            "--cob",
            "database",
            "--raw",
            "--json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_subscription_delete_requires_sub() {
        assert!(Cli::try_parse_from(["cloco", "subscription", "delete"]).is_err());
        assert!(Cli::try_parse_from(["cloco", "subscription", "delete", "--sub", "acme"]).is_ok());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cloco", "me", "--debug"]).unwrap();
        assert!(cli.debug);
        assert!(!cli.verbose);
    }
}
