//! Application state for Axum handlers.

use async_trait::async_trait;
use depot_core::DepotResult;
use depot_service::LocomotiveService;
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Backing-store probe consulted by the readiness endpoint.
///
/// The server wires the database pool's health check in here; test routers
/// leave it unset and report ready unconditionally.
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    async fn check(&self) -> DepotResult<()>;
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub locomotive_service: Arc<dyn LocomotiveService>,
    pub readiness: Option<Arc<dyn ReadinessProbe>>,
}

impl AppState {
    /// Creates a new application state without a readiness probe.
    pub fn new(locomotive_service: Arc<dyn LocomotiveService>) -> Self {
        Self {
            locomotive_service,
            readiness: None,
        }
    }

    /// Attaches a readiness probe.
    #[must_use]
    pub fn with_readiness(mut self, probe: Arc<dyn ReadinessProbe>) -> Self {
        self.readiness = Some(probe);
        self
    }

    /// Creates the application state by resolving services from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn LocomotiveService>,
    {
        Self {
            locomotive_service: module.resolve(),
            readiness: None,
        }
    }
}
