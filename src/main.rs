//! rdstation-token - exchange an RD Station authorization code for tokens.
//!
//! Usage: `rdstation-token <code>` (or set `RDSTATION_AUTH_CODE`). Client
//! credentials come from the environment; see `Config::from_env`. The token
//! triple is printed to stdout as JSON, logs go to stderr.

use anyhow::{Context, Result};
use rdstation_client::{AuthorizationService, Config};
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded, API URL: {}", config.api_url);

    let code = env::args()
        .nth(1)
        .or_else(|| env::var("RDSTATION_AUTH_CODE").ok())
        .context("Missing authorization code: pass it as the first argument or set RDSTATION_AUTH_CODE")?;

    let service = AuthorizationService::from_config(&config, code);
    let response = match service.get_access_token() {
        Ok(response) => response,
        Err(e) => {
            error!("Token exchange failed: {}", e);
            return Err(e.into());
        }
    };

    let output = serde_json::json!({
        "access_token": response.access_token(),
        "refresh_token": response.refresh_token(),
        "expires_in": response.expires_in(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    let metrics = service.transport().metrics();
    info!(
        "Done ({} HTTP request(s), avg {} ms)",
        metrics.http_requests_total(),
        metrics.http_duration_avg_ms()
    );
    Ok(())
}
