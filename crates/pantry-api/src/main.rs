//! Pantry API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p pantry-api
//! ```
//!
//! Configuration is loaded from environment variables or a .env file.

use pantry_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing
    let tracing_config = if config.app.env.is_production() {
        TracingConfig::production()
    } else {
        TracingConfig::development()
    };
    if let Err(e) = try_init_tracing(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        address = %config.server.address(),
        "Starting pantry server"
    );

    // Run the server
    if let Err(e) = pantry_api::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}
