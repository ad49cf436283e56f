//! Locomotive catalog controller.

use crate::{
    extractors::ListingQuery,
    responses::{created, no_content, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use depot_core::ProductId;
use depot_service::{
    AddLocomotiveDto, DetailsLocomotiveDto, EditLocomotiveDto, LocomotiveListResponse,
    TagListResponse,
};
use tracing::debug;

/// Creates the locomotive router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_locomotives).post(add_locomotive))
        .route("/tags", get(list_tags))
        .route(
            "/:id",
            get(get_locomotive)
                .put(edit_locomotive)
                .delete(delete_locomotive),
        )
}

/// List locomotives matching the given criteria, paginated.
#[utoipa::path(
    get,
    path = "/locomotives",
    tag = "locomotives",
    params(
        ("search" = Option<String>, Query, description = "Whitespace-separated search terms matched against name and railway company"),
        ("tags" = Option<String>, Query, description = "Comma-separated tag filter"),
        ("scales" = Option<String>, Query, description = "Comma-separated scale filter"),
        ("epochs" = Option<String>, Query, description = "Comma-separated epoch filter"),
        ("controls" = Option<String>, Query, description = "Comma-separated control filter"),
        ("loco_types" = Option<String>, Query, description = "Comma-separated locomotive type filter"),
        ("order_by" = Option<String>, Query, description = "Sort key, e.g. name_asc or price_desc"),
        ("page" = Option<u32>, Query, description = "1-indexed page; out-of-range values are clamped"),
    ),
    responses(
        (status = 200, description = "One page of matching locomotives", body = LocomotiveListResponse),
        (status = 400, description = "Unknown filter value or sort key")
    )
)]
pub async fn list_locomotives(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> ApiResult<LocomotiveListResponse> {
    debug!("List locomotives request");

    let options = query.into_options()?;
    let response = state.locomotive_service.get_list(options).await?;
    ok(response)
}

/// Get one locomotive with all its details.
#[utoipa::path(
    get,
    path = "/locomotives/{id}",
    tag = "locomotives",
    params(("id" = i64, Path, description = "Locomotive ID")),
    responses(
        (status = 200, description = "Locomotive details", body = DetailsLocomotiveDto),
        (status = 404, description = "Locomotive not found")
    )
)]
pub async fn get_locomotive(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<DetailsLocomotiveDto> {
    debug!("Get locomotive request: {}", id);

    let response = state
        .locomotive_service
        .get_details(ProductId::new(id))
        .await?;
    ok(response)
}

/// Add a new locomotive.
#[utoipa::path(
    post,
    path = "/locomotives",
    tag = "locomotives",
    request_body = AddLocomotiveDto,
    responses(
        (status = 201, description = "Locomotive created", body = DetailsLocomotiveDto),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn add_locomotive(
    State(state): State<AppState>,
    Json(request): Json<AddLocomotiveDto>,
) -> Result<(StatusCode, Json<ApiResponse<DetailsLocomotiveDto>>), AppError> {
    debug!("Add locomotive request: {}", request.name);

    let response = state.locomotive_service.add_locomotive(request).await?;
    Ok(created(response))
}

/// Edit a locomotive's own field group.
#[utoipa::path(
    put,
    path = "/locomotives/{id}",
    tag = "locomotives",
    params(("id" = i64, Path, description = "Locomotive ID")),
    request_body = EditLocomotiveDto,
    responses(
        (status = 200, description = "Locomotive updated", body = DetailsLocomotiveDto),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Locomotive not found")
    )
)]
pub async fn edit_locomotive(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut request): Json<EditLocomotiveDto>,
) -> ApiResult<DetailsLocomotiveDto> {
    debug!("Edit locomotive request: {}", id);

    // The path is authoritative for which row is edited.
    request.id = ProductId::new(id);

    let response = state.locomotive_service.edit_locomotive(request).await?;
    ok(response)
}

/// Delete a locomotive.
#[utoipa::path(
    delete,
    path = "/locomotives/{id}",
    tag = "locomotives",
    params(("id" = i64, Path, description = "Locomotive ID")),
    responses(
        (status = 204, description = "Locomotive deleted"),
        (status = 404, description = "Locomotive not found")
    )
)]
pub async fn delete_locomotive(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("Delete locomotive request: {}", id);

    state
        .locomotive_service
        .delete_locomotive(ProductId::new(id))
        .await?;
    Ok(no_content())
}

/// List the distinct tags in use.
#[utoipa::path(
    get,
    path = "/locomotives/tags",
    tag = "locomotives",
    responses(
        (status = 200, description = "All tags in use", body = TagListResponse)
    )
)]
pub async fn list_tags(State(state): State<AppState>) -> ApiResult<TagListResponse> {
    debug!("List tags request");

    let response = state.locomotive_service.list_tags().await?;
    ok(response)
}
