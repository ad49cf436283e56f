//! OpenAPI documentation configuration.

use depot_core::{
    Control, DecoderId, Epoch, ErrorResponse, FieldError, ImageId, LocoType, ProductId,
    RailwayCompanyId, Scale, TagId,
};
use depot_service::{
    AddImageDto, AddLocomotiveDto, DetailsLocomotiveDto, EditLocomotiveDto, FilterOptions,
    ImageDto, ListLocomotiveDto, LocomotiveListResponse, OrderBy, StockStatusDto, TagListResponse,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Depot API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Depot API",
        version = "1.0.0",
        description = "RESTful API for the Depot model train catalog"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Locomotive endpoints
        crate::controllers::locomotive_controller::list_locomotives,
        crate::controllers::locomotive_controller::get_locomotive,
        crate::controllers::locomotive_controller::add_locomotive,
        crate::controllers::locomotive_controller::edit_locomotive,
        crate::controllers::locomotive_controller::delete_locomotive,
        crate::controllers::locomotive_controller::list_tags,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            // Core types
            ProductId,
            ImageId,
            RailwayCompanyId,
            DecoderId,
            TagId,
            Scale,
            Epoch,
            Control,
            LocoType,
            ErrorResponse,
            FieldError,
            // Query types
            OrderBy,
            FilterOptions,
            // Catalog DTOs
            ImageDto,
            StockStatusDto,
            ListLocomotiveDto,
            DetailsLocomotiveDto,
            AddImageDto,
            AddLocomotiveDto,
            EditLocomotiveDto,
            LocomotiveListResponse,
            TagListResponse,
        )
    ),
    tags(
        (name = "locomotives", description = "Locomotive catalog endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
