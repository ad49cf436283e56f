//! HTTP-level tests for the locomotive API, driven through the full router
//! with an in-memory service.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use depot_config::ServerConfig;
use depot_core::{DepotError, DepotResult, Locomotive, Page, ProductId};
use depot_rest::{create_router_with_state, AppState, ReadinessProbe};
use depot_service::{
    mappers, AddLocomotiveDto, DetailsLocomotiveDto, EditLocomotiveDto, LocomotiveListResponse,
    LocomotiveService, QueryOptions, TagListResponse,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Service stub serving a fixed two-row catalog.
struct StubLocomotiveService {
    catalog: Vec<Locomotive>,
}

impl StubLocomotiveService {
    fn new() -> Self {
        let mut br218 = Locomotive::default();
        br218.product.id = ProductId::new(1);
        br218.product.name = "BR 218".to_string();
        br218.product.price_cents = 24_999;

        let mut big_boy = Locomotive::default();
        big_boy.product.id = ProductId::new(2);
        big_boy.product.name = "Big Boy".to_string();
        big_boy.product.price_cents = 89_999;

        Self {
            catalog: vec![br218, big_boy],
        }
    }
}

#[async_trait]
impl LocomotiveService for StubLocomotiveService {
    async fn get_list(&self, options: QueryOptions) -> DepotResult<LocomotiveListResponse> {
        let mut rows: Vec<_> = self.catalog.iter().map(mappers::to_list_dto).collect();
        if let Some(term) = options.search.as_deref() {
            rows = depot_service::search::search(rows, term);
        }
        let page = Page::paginate(rows, options.page.unwrap_or(1), 10);
        Ok(LocomotiveListResponse {
            locomotives: page.items,
            page: page.page,
            total_pages: page.total_pages,
        })
    }

    async fn get_details(&self, id: ProductId) -> DepotResult<DetailsLocomotiveDto> {
        self.catalog
            .iter()
            .find(|l| l.product.id == id)
            .map(mappers::to_details_dto)
            .ok_or_else(|| DepotError::not_found("Locomotive", id))
    }

    async fn add_locomotive(&self, _request: AddLocomotiveDto) -> DepotResult<DetailsLocomotiveDto> {
        unimplemented!("not exercised here")
    }

    async fn edit_locomotive(
        &self,
        _request: EditLocomotiveDto,
    ) -> DepotResult<DetailsLocomotiveDto> {
        unimplemented!("not exercised here")
    }

    async fn delete_locomotive(&self, id: ProductId) -> DepotResult<()> {
        if self.catalog.iter().any(|l| l.product.id == id) {
            Ok(())
        } else {
            Err(DepotError::not_found("Locomotive", id))
        }
    }

    async fn list_tags(&self) -> DepotResult<TagListResponse> {
        Ok(TagListResponse { tags: Vec::new() })
    }
}

fn test_router() -> axum::Router {
    let state = AppState::new(Arc::new(StubLocomotiveService::new()));
    create_router_with_state(state, &ServerConfig::default())
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = test_router()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_locomotives() {
    let response = test_router()
        .oneshot(
            Request::get("/api/v1/locomotives")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["page"], 1);
    assert_eq!(json["data"]["total_pages"], 1);
    assert_eq!(json["data"]["locomotives"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_locomotives_with_search() {
    let response = test_router()
        .oneshot(
            Request::get("/api/v1/locomotives?search=big")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"]["locomotives"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Big Boy");
}

#[tokio::test]
async fn test_list_rejects_unknown_order_key() {
    let response = test_router()
        .oneshot(
            Request::get("/api/v1/locomotives?order_by=by_popularity")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_get_locomotive_details() {
    let response = test_router()
        .oneshot(
            Request::get("/api/v1/locomotives/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "BR 218");
}

#[tokio::test]
async fn test_get_locomotive_not_found() {
    let response = test_router()
        .oneshot(
            Request::get("/api/v1/locomotives/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_locomotive_returns_no_content() {
    let response = test_router()
        .oneshot(
            Request::delete("/api/v1/locomotives/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

/// Readiness probe stub with a fixed answer.
struct FixedReadiness {
    healthy: bool,
}

#[async_trait]
impl ReadinessProbe for FixedReadiness {
    async fn check(&self) -> DepotResult<()> {
        if self.healthy {
            Ok(())
        } else {
            Err(DepotError::Database("connection refused".to_string()))
        }
    }
}

fn router_with_readiness(healthy: bool) -> axum::Router {
    let state = AppState::new(Arc::new(StubLocomotiveService::new()))
        .with_readiness(Arc::new(FixedReadiness { healthy }));
    create_router_with_state(state, &ServerConfig::default())
}

#[tokio::test]
async fn test_ready_reflects_backing_store_health() {
    let response = router_with_readiness(true)
        .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router_with_readiness(false)
        .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_ready_without_probe_reports_ok() {
    let response = test_router()
        .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
