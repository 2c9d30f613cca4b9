//! Vulnwatch - main entry point

use clap::Parser;

use vulnwatch::cli::{Cli, Commands};
use vulnwatch::{app, init_tracing, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if let Err(e) = dotenvy::dotenv() {
        // Only warn if it's not a "file not found" error
        if !e.not_found() {
            eprintln!("Warning: failed to load .env file: {e}");
        }
    }

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())
        .map_err(|e| format!("failed to load configuration (check VULNWATCH__* env vars): {e}"))?;
    if cli.disable_slack {
        config.disable_slack = true;
    }
    config.validate()?;

    init_tracing(&cli.log_level(&config.logging.level))?;

    match cli.command {
        Some(Commands::Scan) | None => app::run(config).await,
    }
}
