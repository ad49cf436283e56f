//! # Depot Server
//!
//! Main entry point for the Depot catalog service.

use depot_config::ConfigLoader;
use depot_core::DepotResult;
use depot_server::startup;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Depot Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> DepotResult<()> {
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get();

    info!("Environment: {}", config.app.environment);

    startup::run(config).await
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,depot=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
