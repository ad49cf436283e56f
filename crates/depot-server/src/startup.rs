//! Server startup and graceful shutdown.

use crate::di::{build_app_module, AppModule};
use async_trait::async_trait;
use depot_config::AppConfig;
use depot_core::{DepotError, DepotResult};
use depot_repository::DatabasePoolInterface;
use depot_rest::{create_router_with_state, AppState, ReadinessProbe};
use std::sync::Arc;
use tokio::signal;
use tracing::info;

/// Reports readiness from the database pool's health check.
struct PoolReadinessProbe {
    pool: Arc<dyn DatabasePoolInterface>,
}

#[async_trait]
impl ReadinessProbe for PoolReadinessProbe {
    async fn check(&self) -> DepotResult<()> {
        self.pool.health_check().await
    }
}

/// Builds the application module and serves the REST API until shutdown.
pub async fn run(config: AppConfig) -> DepotResult<()> {
    let module = build_module(&config).await?;
    serve(module, &config).await
}

/// Builds the application module, running migrations when configured.
pub async fn build_module(config: &AppConfig) -> DepotResult<Arc<AppModule>> {
    let module = build_app_module(&config.database, &config.listing).await?;

    if config.database.auto_migrate {
        module.database_pool().run_migrations().await?;
    }

    Ok(module)
}

/// Serves the REST API on the configured address.
pub async fn serve(module: Arc<AppModule>, config: &AppConfig) -> DepotResult<()> {
    let state = AppState::from_module(module.as_ref()).with_readiness(Arc::new(
        PoolReadinessProbe {
            pool: module.database_pool(),
        },
    ));
    let router = create_router_with_state(state, &config.server);

    let rest_addr = config.server.rest_addr();
    info!("Starting REST server on http://{}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr)
        .await
        .map_err(|e| DepotError::Internal(format!("Failed to bind REST: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| DepotError::Internal(format!("REST server error: {}", e)))?;

    module.database_pool().close().await;
    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
