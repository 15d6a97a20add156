//! Halving Sample Application Entry Point
//!
//! Halves the configured start value once, then keeps halving until the
//! chain becomes absent, logging each checked result.

use std::process::ExitCode;

use halving::{HalvingConfig, run};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,halving=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match HalvingConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                "Configuration loaded: start={}, steps={}",
                config.start,
                config.steps
            );
            config
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Scenario failed: {e}");
            ExitCode::FAILURE
        }
    }
}
