//! Emote tracker entry point
//!
//! Run with:
//! ```bash
//! cargo run -p emote-gateway < events.jsonl
//! ```
//!
//! Configuration is loaded from environment variables. Pass
//! `--print-commands` to print the slash command registration payload and
//! exit.

use emote_common::{try_init_tracing_with_config, AppConfig, AppResult, TracingConfig};
use emote_service::commands::definitions;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if std::env::args().any(|arg| arg == "--print-commands") {
        match serde_json::to_string_pretty(&definitions()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to encode command definitions: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let config = AppConfig::from_env();

    // Initialize tracing
    let tracing_config = match &config {
        Ok(config) => TracingConfig::for_environment(config.app.env),
        Err(_) => TracingConfig::default(),
    };
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    // Run the tracker
    if let Err(e) = run(config).await {
        error!(code = e.error_code(), error = %e, "Tracker failed");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> AppResult<()> {
    info!(
        name = %config.app.name,
        env = ?config.app.env,
        "Starting emote tracker..."
    );

    emote_gateway::run(config).await?;

    Ok(())
}
