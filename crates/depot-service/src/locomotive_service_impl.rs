//! Locomotive service implementation.

use crate::dto::{
    AddLocomotiveDto, DetailsLocomotiveDto, EditLocomotiveDto, LocomotiveListResponse,
    TagListResponse,
};
use crate::locomotive_service::LocomotiveService;
use crate::mappers;
use crate::query::QueryOptions;
use crate::search;
use async_trait::async_trait;
use depot_core::{DepotError, DepotResult, Locomotive, Page, ProductId, ValidateExt};
use depot_repository::LocomotiveRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Locomotive catalog service backed by a repository.
///
/// Listing criteria run in memory over the projected rows, in a fixed
/// order: search, then filters, then ordering, then pagination.
#[derive(Component)]
#[shaku(interface = LocomotiveService)]
pub struct LocomotiveServiceImpl {
    #[shaku(inject)]
    repository: Arc<dyn LocomotiveRepository>,

    /// Rows per listing page, from [`depot_config::ListingConfig`].
    #[shaku(default = 10)]
    page_size: usize,
}

impl LocomotiveServiceImpl {
    /// Creates a service directly, bypassing the DI container. Used in
    /// tests with a mocked repository.
    pub fn new(repository: Arc<dyn LocomotiveRepository>, page_size: usize) -> Self {
        Self {
            repository,
            page_size,
        }
    }

    async fn load(&self, id: ProductId) -> DepotResult<Locomotive> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DepotError::not_found("Locomotive", id))
    }
}

#[async_trait]
impl LocomotiveService for LocomotiveServiceImpl {
    async fn get_list(&self, options: QueryOptions) -> DepotResult<LocomotiveListResponse> {
        debug!(
            order_by = %options.order_by,
            page = options.page.unwrap_or(1),
            "Listing locomotives"
        );

        let locomotives = self.repository.find_all().await?;
        let mut rows: Vec<_> = locomotives.iter().map(mappers::to_list_dto).collect();

        if let Some(term) = options.search.as_deref() {
            rows = search::search(rows, term);
        }
        rows = search::filter(rows, &options.filters);
        rows = search::order_by(rows, options.order_by);

        let page = Page::paginate(rows, options.page.unwrap_or(1), self.page_size);
        Ok(LocomotiveListResponse {
            locomotives: page.items,
            page: page.page,
            total_pages: page.total_pages,
        })
    }

    async fn get_details(&self, id: ProductId) -> DepotResult<DetailsLocomotiveDto> {
        debug!("Getting locomotive: {}", id);

        let locomotive = self.load(id).await?;
        Ok(mappers::to_details_dto(&locomotive))
    }

    async fn add_locomotive(&self, request: AddLocomotiveDto) -> DepotResult<DetailsLocomotiveDto> {
        debug!("Adding locomotive: {}", request.name);

        request.validate_request()?;

        let mut locomotive = Locomotive::default();
        mappers::apply_add_properties(&mut locomotive, &request);

        let saved = self.repository.insert(&locomotive).await?;

        info!("Locomotive added: {}", saved.product.id);
        Ok(mappers::to_details_dto(&saved))
    }

    async fn edit_locomotive(
        &self,
        request: EditLocomotiveDto,
    ) -> DepotResult<DetailsLocomotiveDto> {
        debug!("Editing locomotive: {}", request.id);

        request.validate_request()?;

        let mut locomotive = self.load(request.id).await?;
        mappers::apply_edit_locomotive_properties(&mut locomotive, &request);

        let saved = self.repository.update(&locomotive).await?;

        info!("Locomotive edited: {}", saved.product.id);
        Ok(mappers::to_details_dto(&saved))
    }

    async fn delete_locomotive(&self, id: ProductId) -> DepotResult<()> {
        debug!("Deleting locomotive: {}", id);

        if !self.repository.exists(id).await? {
            return Err(DepotError::not_found("Locomotive", id));
        }
        self.repository.delete(id).await?;

        info!("Locomotive deleted: {}", id);
        Ok(())
    }

    async fn list_tags(&self) -> DepotResult<TagListResponse> {
        let tags = self.repository.list_tags().await?;
        Ok(TagListResponse { tags })
    }
}
