//! Repository trait definitions.

use async_trait::async_trait;
use depot_core::{DepotResult, Interface, Locomotive, ProductId, TagId};

/// Locomotive repository trait.
///
/// The service layer treats this as a lazily-evaluated source of entity
/// graphs: implementations resolve the tag, railway company (with country),
/// stock status, and image relationships before handing entities back.
#[async_trait]
pub trait LocomotiveRepository: Interface + Send + Sync {
    /// Finds a locomotive by ID with all relationships resolved.
    async fn find_by_id(&self, id: ProductId) -> DepotResult<Option<Locomotive>>;

    /// Finds all locomotives with all relationships resolved.
    ///
    /// Filtering, ordering, and pagination happen in the service layer on
    /// the projected transfer shapes, not here.
    async fn find_all(&self) -> DepotResult<Vec<Locomotive>>;

    /// Inserts a new locomotive and returns it with database-assigned IDs.
    async fn insert(&self, locomotive: &Locomotive) -> DepotResult<Locomotive>;

    /// Updates an existing locomotive and returns the stored state.
    async fn update(&self, locomotive: &Locomotive) -> DepotResult<Locomotive>;

    /// Deletes a locomotive by ID. Returns false when nothing was deleted.
    async fn delete(&self, id: ProductId) -> DepotResult<bool>;

    /// Checks whether a locomotive exists.
    async fn exists(&self, id: ProductId) -> DepotResult<bool>;

    /// Lists all distinct tags in use, for the filter UI.
    async fn list_tags(&self) -> DepotResult<Vec<TagId>>;
}
