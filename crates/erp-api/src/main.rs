//! ERP API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p erp-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env` file.

use erp_common::{try_init_tracing_with_config, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Tracing needs the environment before the full config is validated
    let env = std::env::var("APP_ENV")
        .ok()
        .and_then(|raw| raw.parse::<Environment>().ok())
        .unwrap_or_default();

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting ERP API Server...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = config.app.env.as_str(),
        address = %config.server.address(),
        "Configuration loaded"
    );

    erp_api::run(config).await?;

    Ok(())
}
