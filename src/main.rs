//! Genie - DevOps Genie terminal chat client
//!
#![doc = "Genie - DevOps Genie terminal chat client"]
#![doc = "Main entry point for the genie application."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use genie::cli::{Cli, Commands};
use genie::commands;
use genie::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    match cli.command {
        Commands::Chat { model } => {
            if let Some(m) = &model {
                tracing::debug!("Using model override: {}", m);
            }
            // Moves `config` into the handler (match arms are exclusive)
            commands::chat::run_chat(config, model).await?;
            Ok(())
        }
        Commands::Ask { model, question } => {
            tracing::info!("Starting single question mode");
            commands::ask::run_ask(&config, &model, &question).await?;
            Ok(())
        }
        Commands::Models { json } => {
            tracing::info!("Starting model catalog command");
            commands::models::list_models(&config, json).await?;
            Ok(())
        }
        Commands::Sessions {
            search,
            fixtures,
            json,
        } => {
            tracing::info!("Starting conversation list command");
            commands::sessions::list_sessions(&config, search.as_deref(), fixtures, json)?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
///
/// Logs go to stderr so stdout stays clean for `--json` output.
fn init_tracing(verbose: bool) {
    let default = if verbose { "genie=debug" } else { "genie=warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
