//! Dependency injection module using Shaku.

use depot_config::{DatabaseConfig, ListingConfig};
use depot_core::{module, DepotResult, HasComponent};
use depot_repository::{DatabasePool, DatabasePoolInterface, MySqlLocomotiveRepository};
use depot_service::{
    LocomotiveService, LocomotiveServiceImpl, LocomotiveServiceImplParameters,
};
use std::sync::Arc;

// Single-process application module: database pool, MySQL repository, and
// the catalog service on top.
module! {
    pub AppModule {
        components = [
            DatabasePool,
            MySqlLocomotiveRepository,
            LocomotiveServiceImpl,
        ],
        providers = [],
    }
}

impl AppModule {
    /// Resolves the catalog service from the module.
    pub fn locomotive_service(&self) -> Arc<dyn LocomotiveService> {
        self.resolve()
    }

    /// Resolves the database pool from the module.
    pub fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}

/// Builds the application module with all dependencies.
pub async fn build_app_module(
    db_config: &DatabaseConfig,
    listing_config: &ListingConfig,
) -> DepotResult<Arc<AppModule>> {
    let db_pool = DatabasePool::connect(db_config).await?;

    let module = AppModule::builder()
        .with_component_parameters::<DatabasePool>(depot_repository::DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .with_component_parameters::<LocomotiveServiceImpl>(LocomotiveServiceImplParameters {
            page_size: listing_config.page_size,
        })
        .build();

    Ok(Arc::new(module))
}
