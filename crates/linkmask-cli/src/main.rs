mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing on stderr so masked output can go to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        cli::Commands::Run(args) => commands::run::handle(args, config_path).await,
        cli::Commands::Mask { texts } => commands::mask::handle(texts, config_path),
        cli::Commands::Config { path } => commands::config::handle(config_path, path),
    }
}
