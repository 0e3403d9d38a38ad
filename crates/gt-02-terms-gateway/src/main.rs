//! # Terms Gateway
//!
//! Serves governance terms and accepts updates authorized by a signed
//! challenge from the configured admin address.
//!
//! ## Configuration (environment)
//!
//! - `GT_CONFIG` - optional JSON config file, overridden by the variables below
//! - `GT_ADMIN_ADDRESS` (required) - address allowed to update terms
//! - `GT_HTTP_HOST` / `GT_HTTP_PORT` - bind address, default `127.0.0.1:8787`
//! - `GT_TERMS_PATH` - persist terms to this file, in memory when unset
//! - `GT_MAX_CHALLENGE_AGE_SECS` - freshness window, default 300
//! - `GT_MAX_BODY_BYTES` - request body cap
//! - `GT_CORS_ORIGINS` - comma separated allowed origins
//!
//! Log verbosity follows `RUST_LOG`, default `info`.

use anyhow::{Context, Result};
use gt_02_terms_gateway::{GatewayConfig, TermsGatewayService};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = GatewayConfig::from_env().context("failed to read configuration")?;
    let service = TermsGatewayService::new(config).context("invalid gateway configuration")?;

    info!(
        version = gt_02_terms_gateway::VERSION,
        addr = %service.config().http_addr(),
        "Starting terms gateway"
    );

    service.serve(shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
