//! Configuration object commands
//!
//! A configuration object is addressed by subscription, application, object
//! identifier (`--cob`) and environment. `--sub`, `--app` and `--env` fall
//! back to the preferences stored by `cloco init`.

use crate::api::ApiClient;
use crate::commands::{load_configuration, read_payload, ApplicationScope, DataFormat, ObjectScope};
use crate::config::Configuration;
use crate::error::{CliError, CliResult};
use crate::models::{ConfigurationAccess, ConfigurationObjectRef, DEFAULT_CONFIGURATION_MIME_TYPE};
use crate::output::{render, Render};
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration object commands
#[derive(Args, Debug)]
pub struct ConfigurationArgs {
    #[command(subcommand)]
    pub command: ConfigurationCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigurationCommands {
    /// List the configuration objects of an application
    List(ApplicationScope),
    /// Get the configuration data of an object
    Get(GetArgs),
    /// Upload configuration data for an object
    Put(PutArgs),
    /// Inspect and restore earlier revisions
    #[command(subcommand)]
    Version(VersionCommands),
    /// Manage access to a configuration object
    #[command(subcommand)]
    Permissions(PermissionsCommands),
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    #[command(flatten)]
    pub object: ObjectScope,

    #[command(flatten)]
    pub format: DataFormat,
}

/// Arguments for the put command
#[derive(Args, Debug)]
pub struct PutArgs {
    #[command(flatten)]
    pub object: ObjectScope,

    /// File holding the configuration data
    #[arg(long, conflicts_with = "data")]
    pub filename: Option<PathBuf>,

    /// Configuration data given inline
    #[arg(long)]
    pub data: Option<String>,

    /// Content type sent with the data
    #[arg(long, default_value = DEFAULT_CONFIGURATION_MIME_TYPE)]
    pub mime_type: String,
}

impl PutArgs {
    /// The data to upload, read from `--filename` or taken from `--data`
    fn payload(&self) -> CliResult<String> {
        match (&self.filename, &self.data) {
            (Some(filename), _) => read_payload(filename),
            (None, Some(data)) => Ok(data.clone()),
            (None, None) => Err(CliError::InvalidInput(
                "No filename or data found".to_string(),
            )),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum VersionCommands {
    /// List the revisions of a configuration object
    List(ObjectScope),
    /// Get one revision of a configuration object
    Get(VersionGetArgs),
    /// Make an earlier revision the current one
    Restore(VersionArgs),
}

/// Arguments naming one revision
#[derive(Args, Debug)]
pub struct VersionArgs {
    #[command(flatten)]
    pub object: ObjectScope,

    /// The revision identifier
    #[arg(long)]
    pub version: String,
}

/// Arguments for fetching one revision
#[derive(Args, Debug)]
pub struct VersionGetArgs {
    #[command(flatten)]
    pub revision: VersionArgs,

    #[command(flatten)]
    pub format: DataFormat,
}

#[derive(Subcommand, Debug)]
pub enum PermissionsCommands {
    /// List the users with access to a configuration object
    List(ObjectScope),
    /// Grant read or write access to a user
    Create(PermissionCreateArgs),
    /// Remove a user's access
    Delete(PermissionDeleteArgs),
}

/// Arguments for granting access
#[derive(Args, Debug)]
pub struct PermissionCreateArgs {
    #[command(flatten)]
    pub object: ObjectScope,

    /// The user to grant access to
    #[arg(long)]
    pub username: String,

    /// Grant read access (default)
    #[arg(long, conflicts_with = "write")]
    pub read: bool,

    /// Grant write access
    #[arg(long)]
    pub write: bool,
}

impl PermissionCreateArgs {
    fn access(&self) -> ConfigurationAccess {
        if self.write {
            ConfigurationAccess::Write
        } else {
            ConfigurationAccess::Read
        }
    }
}

/// Arguments for removing access
#[derive(Args, Debug)]
pub struct PermissionDeleteArgs {
    #[command(flatten)]
    pub object: ObjectScope,

    /// The user to remove
    #[arg(long)]
    pub username: String,
}

/// Execute configuration commands
pub async fn execute(args: ConfigurationArgs) -> CliResult<()> {
    match args.command {
        ConfigurationCommands::List(scope) => execute_list(scope).await,
        ConfigurationCommands::Get(get_args) => execute_get(get_args).await,
        ConfigurationCommands::Put(put_args) => execute_put(put_args).await,
        ConfigurationCommands::Version(cmd) => execute_version(cmd).await,
        ConfigurationCommands::Permissions(cmd) => execute_permissions(cmd).await,
    }
}

async fn execute_version(cmd: VersionCommands) -> CliResult<()> {
    match cmd {
        VersionCommands::List(object) => execute_version_list(object).await,
        VersionCommands::Get(args) => execute_version_get(args).await,
        VersionCommands::Restore(args) => execute_version_restore(args).await,
    }
}

async fn execute_permissions(cmd: PermissionsCommands) -> CliResult<()> {
    match cmd {
        PermissionsCommands::List(object) => execute_permissions_list(object).await,
        PermissionsCommands::Create(args) => execute_permissions_create(args).await,
        PermissionsCommands::Delete(args) => execute_permissions_delete(args).await,
    }
}

/// Resolve an object address against the stored preferences
fn resolve(config: &Configuration, object: ObjectScope) -> CliResult<ConfigurationObjectRef> {
    Ok(ConfigurationObjectRef {
        subscription: config.subscription_or(object.sub)?,
        application: config.application_or(object.app)?,
        object: object.cob,
        environment: config.environment_or(object.env)?,
    })
}

async fn execute_list(scope: ApplicationScope) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let subscription = config.subscription_or(scope.sub)?;
    let application = config.application_or(scope.app)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client
        .list_configuration(&subscription, &application)
        .await?;
    render(&body, Render::Json);
    Ok(())
}

async fn execute_get(args: GetArgs) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let target = resolve(&config, args.object)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client.get_configuration(&target).await?;
    render(&body, args.format.render());
    Ok(())
}

async fn execute_put(args: PutArgs) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let data = args.payload()?;
    let target = resolve(&config, args.object)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client
        .put_configuration(&target, data, &args.mime_type)
        .await?;
    render(&body, Render::Raw);
    Ok(())
}

async fn execute_version_list(object: ObjectScope) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let target = resolve(&config, object)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client.list_configuration_versions(&target).await?;
    render(&body, Render::Json);
    Ok(())
}

async fn execute_version_get(args: VersionGetArgs) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let target = resolve(&config, args.revision.object)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client
        .get_configuration_version(&target, &args.revision.version)
        .await?;
    render(&body, args.format.render());
    Ok(())
}

async fn execute_version_restore(args: VersionArgs) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let target = resolve(&config, args.object)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client
        .restore_configuration_version(&target, &args.version)
        .await?;
    render(&body, Render::Json);
    Ok(())
}

async fn execute_permissions_list(object: ObjectScope) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let target = resolve(&config, object)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client.list_configuration_permissions(&target).await?;
    render(&body, Render::Json);
    Ok(())
}

async fn execute_permissions_create(args: PermissionCreateArgs) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let access = args.access();
    let target = resolve(&config, args.object)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client
        .grant_configuration_permission(&target, &args.username, access)
        .await?;
    render(&body, Render::Raw);
    Ok(())
}

async fn execute_permissions_delete(args: PermissionDeleteArgs) -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let target = resolve(&config, args.object)?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client
        .revoke_configuration_permission(&target, &args.username)
        .await?;
    render(&body, Render::Raw);
    Ok(())
}
