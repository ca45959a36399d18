//! Binary entrypoint for the uigen tool server.
use tracing_subscriber::EnvFilter;
use uigen_api::{config::ServerConfig, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // UIGEN_ADDR and UIGEN_LOG override the defaults
    let config = ServerConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    run(&config).await
}
