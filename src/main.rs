//! Contact Book - Main entry point
//!
//! Runs the interactive contact book on stdin/stdout. Logs go to stderr so
//! they never interleave with the dialogue.

use anyhow::Result;
use contact_book::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over the configured level
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        phone_retry_limit = config.phone_retry_limit,
        "Starting contact book"
    );

    contact_book::session::run_session(&config)?;

    info!("Contact book shutdown complete");
    Ok(())
}
