//! Locomotive service trait definition.

use crate::dto::{
    AddLocomotiveDto, DetailsLocomotiveDto, EditLocomotiveDto, LocomotiveListResponse,
    TagListResponse,
};
use crate::query::QueryOptions;
use async_trait::async_trait;
use depot_core::{DepotResult, Interface, ProductId};

/// Locomotive catalog service trait.
#[async_trait]
pub trait LocomotiveService: Interface + Send + Sync {
    /// Lists locomotives matching the given criteria, paginated.
    ///
    /// Criteria apply in a fixed order: search, then filters, then ordering,
    /// then pagination. Out-of-range pages are clamped, never rejected.
    async fn get_list(&self, options: QueryOptions) -> DepotResult<LocomotiveListResponse>;

    /// Gets the full detail projection of one locomotive.
    async fn get_details(&self, id: ProductId) -> DepotResult<DetailsLocomotiveDto>;

    /// Adds a new locomotive and returns it as stored.
    async fn add_locomotive(&self, request: AddLocomotiveDto) -> DepotResult<DetailsLocomotiveDto>;

    /// Applies a partial edit to a locomotive's own field group.
    async fn edit_locomotive(
        &self,
        request: EditLocomotiveDto,
    ) -> DepotResult<DetailsLocomotiveDto>;

    /// Deletes a locomotive.
    async fn delete_locomotive(&self, id: ProductId) -> DepotResult<()>;

    /// Lists all distinct tags in use.
    async fn list_tags(&self) -> DepotResult<TagListResponse>;
}
