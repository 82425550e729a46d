//! Show the authenticated user

use crate::api::ApiClient;
use crate::commands::load_configuration;
use crate::error::CliResult;
use crate::output::{render, Render};

/// Execute the me command
pub async fn execute() -> CliResult<()> {
    let (paths, config) = load_configuration()?;
    let client = ApiClient::connect(config, &paths).await?;

    let body = client.me().await?;
    render(&body, Render::Json);

    Ok(())
}
