//! Subscription management commands

use crate::api::ApiClient;
use crate::commands::{load_configuration, SubscriptionScope};
use crate::error::CliResult;
use crate::models::SubscriptionRole;
use crate::output::{render, Render};
use clap::{Args, Subcommand};

/// Subscription management commands
#[derive(Args, Debug)]
pub struct SubscriptionArgs {
    #[command(subcommand)]
    pub command: SubscriptionCommands,
}

#[derive(Subcommand, Debug)]
pub enum SubscriptionCommands {
    /// List the subscriptions you have access to
    List,
    /// Create a new subscription
    Create(CreateArgs),
    /// Get subscription details
    Get(SubscriptionScope),
    /// Delete a subscription
    Delete(DeleteArgs),
    /// Manage the users of a subscription
    #[command(subcommand)]
    Permissions(PermissionsCommands),
}

/// Arguments for the create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Identifier of the new subscription
    #[arg(long)]
    pub sub: String,
}

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Subscription to delete; the stored preference is never used here
    #[arg(long)]
    pub sub: String,
}

#[derive(Subcommand, Debug)]
pub enum PermissionsCommands {
    /// List the users of a subscription
    List(SubscriptionScope),
    /// Add a user to a subscription or change their role
    Create(PermissionCreateArgs),
    /// Remove a user from a subscription
    Delete(PermissionDeleteArgs),
}

/// Arguments for granting a subscription role
#[derive(Args, Debug)]
pub struct PermissionCreateArgs {
    #[command(flatten)]
    pub scope: SubscriptionScope,

    /// The user to grant the role to
    #[arg(long)]
    pub username: String,

    /// Grant the admin role
    #[arg(long, conflicts_with = "user")]
    pub admin: bool,

    /// Grant the user role (default)
    #[arg(long)]
    pub user: bool,
}

impl PermissionCreateArgs {
    fn role(&self) -> SubscriptionRole {
        if self.admin {
            SubscriptionRole::Admin
        } else {
            SubscriptionRole::User
        }
    }
}

/// Arguments for removing a user
#[derive(Args, Debug)]
pub struct PermissionDeleteArgs {
    #[command(flatten)]
    pub scope: SubscriptionScope,

    /// The user to remove
    #[arg(long)]
    pub username: String,
}

/// Execute subscription commands
pub async fn execute(args: SubscriptionArgs) -> CliResult<()> {
    match args.command {
        SubscriptionCommands::List => execute_list().await,
        SubscriptionCommands::Create(create_args) => execute_create(create_args).await,
        SubscriptionCommands::Get(scope) => execute_get(scope).await,
        SubscriptionCommands::Delete(delete_args) => execute_delete(delete_args).await,
        SubscriptionCommands::Permissions(cmd) => execute_permissions(cmd).await,
    }
}

async fn execute_permissions(cmd: PermissionsCommands) -> CliResult<()> {
    match cmd {
        PermissionsCommands::List(scope) => execute_permissions_list(scope).await,
        PermissionsCommands::Create(args) => execute_permissions_create(args).await,
        PermissionsCommands::Delete(args) => execute_permissions_delete(args).await,
    }
}

async fn execute_list() -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client.list_subscriptions().await?;
    render(&body, Render::Json);
    Ok(())
}

async fn execute_create(args: CreateArgs) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client.create_subscription(&args.sub).await?;
    render(&body, Render::Json);
    Ok(())
}

async fn execute_get(scope: SubscriptionScope) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let subscription = config.subscription_or(scope.sub)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client.get_subscription(&subscription).await?;
    render(&body, Render::Json);
    Ok(())
}

async fn execute_delete(args: DeleteArgs) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client.delete_subscription(&args.sub).await?;
    render(&body, Render::Raw);
    Ok(())
}

async fn execute_permissions_list(scope: SubscriptionScope) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let subscription = config.subscription_or(scope.sub)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client.list_subscription_permissions(&subscription).await?;
    render(&body, Render::Json);
    Ok(())
}

async fn execute_permissions_create(args: PermissionCreateArgs) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let role = args.role();
    let subscription = config.subscription_or(args.scope.sub)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client
        .grant_subscription_permission(&subscription, &args.username, role)
        .await?;
    render(&body, Render::Raw);
    Ok(())
}

async fn execute_permissions_delete(args: PermissionDeleteArgs) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let subscription = config.subscription_or(args.scope.sub)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client
        .revoke_subscription_permission(&subscription, &args.username)
        .await?;
    render(&body, Render::Raw);
    Ok(())
}
