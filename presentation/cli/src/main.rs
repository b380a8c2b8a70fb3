use clap::Parser;
use dotenvy::dotenv;

mod args;
mod commands;
mod config;
mod setup;

use args::Cli;
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// CLI Entry Point
///
/// Initializes the catalog core, wires dependencies, and dispatches the
/// requested command against the controller.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Parse the command line
    let cli = Cli::parse();

    // 4. Load configuration
    let config = AppConfig::from_env()?;

    // 5. Wire dependencies
    let mut container = DependencyContainer::new(config);

    // 6. Run the requested command
    commands::run(cli, &mut container.controller).await
}
