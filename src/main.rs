//! company-employees server
//!
//! Reads the YAML file named by `COMPANY_EMPLOYEES_CONFIG` (defaults apply
//! when unset) and serves the API until Ctrl+C or SIGTERM.

use anyhow::Result;
use company_employees::config::AppConfig;
use company_employees::server::ServerBuilder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    // RUST_LOG overrides the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        address = %config.server.bind_address(),
        seed = config.seed,
        "starting company-employees"
    );

    ServerBuilder::new().with_config(config).serve().await
}
