//! Manage API credentials of the authenticated user

use crate::api::ApiClient;
use crate::commands::load_configuration;
use crate::error::CliResult;
use crate::output::{render, Render};
use clap::{Args, Subcommand};

/// API credential commands
#[derive(Args, Debug)]
pub struct CredentialsArgs {
    #[command(subcommand)]
    pub command: CredentialsCommands,
}

#[derive(Subcommand, Debug)]
pub enum CredentialsCommands {
    /// List your client keys
    List,
    /// Issue a new client key and secret
    Create,
    /// Revoke a client key
    Delete(DeleteArgs),
}

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// The client key to revoke
    #[arg(long)]
    pub key: String,
}

/// Execute credentials commands
pub async fn execute(args: CredentialsArgs) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let client = ApiClient::connect(config, &paths).await?;

    match args.command {
        CredentialsCommands::List => {
            let body = client.list_credentials().await?;
            render(&body, Render::Json);
        }
        CredentialsCommands::Create => {
            let body = client.create_credentials().await?;
            render(&body, Render::Json);
        }
        CredentialsCommands::Delete(delete_args) => {
            let body = client.delete_credentials(&delete_args.key).await?;
            render(&body, Render::Raw);
        }
    }

    Ok(())
}
