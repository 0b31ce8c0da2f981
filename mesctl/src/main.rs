use clap::{CommandFactory, Parser};
use mesctl::cli::{self, Cli};
use mesctl::{Client, Config, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install rustls crypto provider before anything else that might build a TLS client
    rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Parse CLI args
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.args)?;

    // If --validate flag is set, exit successfully after config validation
    if cli.args.validate {
        println!("Configuration is valid.");
        return Ok(());
    }

    telemetry::init_telemetry()?;

    tracing::debug!("{:?}", cli.args);

    let client = Client::from_config(&config);

    match cli.command {
        Some(command) => cli::run(command, &client).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
