use clap::Parser;
use cloco_cli::{logging, run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level());

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}
