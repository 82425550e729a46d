//! Application management commands

use crate::api::ApiClient;
use crate::commands::{load_configuration, read_payload, ApplicationScope, SubscriptionScope};
use crate::error::CliResult;
use crate::output::{render, Render};
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Application management commands
#[derive(Args, Debug)]
pub struct ApplicationArgs {
    #[command(subcommand)]
    pub command: ApplicationCommands,
}

#[derive(Subcommand, Debug)]
pub enum ApplicationCommands {
    /// List the applications of a subscription
    List(SubscriptionScope),
    /// Get application metadata
    Get(ApplicationScope),
    /// Create or update an application from a JSON file
    Put(PutArgs),
    /// Delete an application
    Delete(DeleteArgs),
    /// Manage the administrators of an application
    #[command(subcommand)]
    Permissions(PermissionsCommands),
}

/// Arguments for the put command
#[derive(Args, Debug)]
pub struct PutArgs {
    #[command(flatten)]
    pub scope: ApplicationScope,

    /// JSON document describing the application
    #[arg(long)]
    pub filename: PathBuf,
}

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub scope: SubscriptionScope,

    /// Application to delete; the stored preference is never used here
    #[arg(long)]
    pub app: String,
}

#[derive(Subcommand, Debug)]
pub enum PermissionsCommands {
    /// List the users of an application
    List(ApplicationScope),
    /// Make a user an administrator of an application
    Create(PermissionArgs),
    /// Remove a user from an application
    Delete(PermissionArgs),
}

/// Arguments naming one user of an application
#[derive(Args, Debug)]
pub struct PermissionArgs {
    #[command(flatten)]
    pub scope: ApplicationScope,

    /// The user to add or remove
    #[arg(long)]
    pub username: String,
}

/// Execute application commands
pub async fn execute(args: ApplicationArgs) -> CliResult<()> {
    match args.command {
        ApplicationCommands::List(scope) => execute_list(scope).await,
        ApplicationCommands::Get(scope) => execute_get(scope).await,
        ApplicationCommands::Put(put_args) => execute_put(put_args).await,
        ApplicationCommands::Delete(delete_args) => execute_delete(delete_args).await,
        ApplicationCommands::Permissions(cmd) => execute_permissions(cmd).await,
    }
}

async fn execute_permissions(cmd: PermissionsCommands) -> CliResult<()> {
    match cmd {
        PermissionsCommands::List(scope) => execute_permissions_list(scope).await,
        PermissionsCommands::Create(args) => execute_permissions_create(args).await,
        PermissionsCommands::Delete(args) => execute_permissions_delete(args).await,
    }
}

async fn execute_list(scope: SubscriptionScope) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let subscription = config.subscription_or(scope.sub)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client.list_applications(&subscription).await?;
    render(&body, Render::Json);
    Ok(())
}

async fn execute_get(scope: ApplicationScope) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let subscription = config.subscription_or(scope.sub)?;
    let application = config.application_or(scope.app)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client.get_application(&subscription, &application).await?;
    render(&body, Render::Json);
    Ok(())
}

async fn execute_put(args: PutArgs) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let subscription = config.subscription_or(args.scope.sub)?;
    let application = config.application_or(args.scope.app)?;
    let document = read_payload(&args.filename)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client
        .put_application(&subscription, &application, document)
        .await?;
    render(&body, Render::Raw);
    Ok(())
}

async fn execute_delete(args: DeleteArgs) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let subscription = config.subscription_or(args.scope.sub)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client.delete_application(&subscription, &args.app).await?;
    render(&body, Render::Raw);
    Ok(())
}

async fn execute_permissions_list(scope: ApplicationScope) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let subscription = config.subscription_or(scope.sub)?;
    let application = config.application_or(scope.app)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client
        .list_application_permissions(&subscription, &application)
        .await?;
    render(&body, Render::Json);
    Ok(())
}

async fn execute_permissions_create(args: PermissionArgs) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let subscription = config.subscription_or(args.scope.sub)?;
    let application = config.application_or(args.scope.app)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client
        .grant_application_permission(&subscription, &application, &args.username)
        .await?;
    render(&body, Render::Raw);
    Ok(())
}

async fn execute_permissions_delete(args: PermissionArgs) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let subscription = config.subscription_or(args.scope.sub)?;
    let application = config.application_or(args.scope.app)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client
        .revoke_application_permission(&subscription, &application, &args.username)
        .await?;
    render(&body, Render::Raw);
    Ok(())
}
