//! Create or update the local configuration file

use crate::config::{ConfigPaths, ConfigUpdate, Configuration, Update};
use crate::error::CliResult;
use crate::output::{print_config, print_info, print_success};
use clap::Args;

/// Create or update the configuration file at `~/.cloco/configuration`
///
/// Only the options you pass are changed. An option given an empty value
/// (`--sub ""`) leaves the stored value untouched.
#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Client key used for authentication
    #[arg(long)]
    pub key: Option<String>,

    /// Client secret used for authentication
    #[arg(long)]
    pub secret: Option<String>,

    /// Default subscription
    #[arg(long)]
    pub sub: Option<String>,

    /// Default application
    #[arg(long)]
    pub app: Option<String>,

    /// Default environment
    #[arg(long)]
    pub env: Option<String>,

    /// API base URL
    #[arg(long)]
    pub url: Option<String>,

    /// Discard the existing configuration and start from an empty one
    #[arg(long)]
    pub reset: bool,

    /// Print the configuration once it has been saved
    #[arg(long)]
    pub echo: bool,
}

impl InitArgs {
    fn update(&self) -> ConfigUpdate {
        ConfigUpdate {
            client_key: Update::from(self.key.clone()),
            client_secret: Update::from(self.secret.clone()),
            url: Update::from(self.url.clone()),
            subscription: Update::from(self.sub.clone()),
            application: Update::from(self.app.clone()),
            environment: Update::from(self.env.clone()),
        }
    }
}

/// Execute the init command
pub fn execute(args: InitArgs) -> CliResult<()> {
    let paths = ConfigPaths::new()?;
    let config = initialize(&paths, &args)?;

    print_success(&format!(
        "Configuration saved to {}",
        paths.config_file.display()
    ));

    if args.echo {
        print_config(&config);
    }

    Ok(())
}

/// Load or create the configuration, merge the arguments and save it
fn initialize(paths: &ConfigPaths, args: &InitArgs) -> CliResult<Configuration> {
    let mut config = if !args.reset && Configuration::exists(paths) {
        print_info("Loading config.....");
        Configuration::load(paths)?
    } else {
        print_info("Creating config.....");
        Configuration::create()
    };

    config.apply(args.update());
    config.save(paths, false)?;

    Ok(config)
}
