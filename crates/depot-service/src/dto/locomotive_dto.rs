//! Locomotive-related DTOs.
//!
//! Read shapes (`ListLocomotiveDto`, `DetailsLocomotiveDto`) are flattened
//! projections built per request and discarded after serialization. Write
//! shapes (`AddLocomotiveDto`, `EditLocomotiveDto`) carry caller-supplied
//! fields plus identifiers of reused sub-resources. Fields whose source
//! relationship may be unset are `Option` rather than defaulting to a
//! sentinel.

use chrono::{DateTime, Utc};
use depot_core::{
    Control, DecoderId, Epoch, ImageId, LocoType, ProductId, RailwayCompanyId, Scale, TagId,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A product image, read shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImageDto {
    /// Absent for attach-by-id references whose row has not been loaded.
    pub url: Option<String>,
}

/// Stock record, read and write shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StockStatusDto {
    pub amount: i32,
    pub next_stock: Option<DateTime<Utc>>,
}

/// Flattened locomotive row for catalog listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListLocomotiveDto {
    pub id: ProductId,
    pub name: String,
    pub price_cents: i64,
    pub images: Vec<ImageDto>,
    pub tag: Option<TagId>,
    pub stock_status: Option<StockStatusDto>,
    pub scale: Scale,
    pub epoch: Epoch,
    /// Absent when the company reference is unset or failed to join.
    pub railway_company_name: Option<String>,
    pub control: Control,
    pub loco_type: LocoType,
}

/// Full locomotive projection for detail views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetailsLocomotiveDto {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub images: Vec<ImageDto>,
    pub tag: Option<TagId>,
    pub stock_status: Option<StockStatusDto>,
    pub scale: Scale,
    pub epoch: Epoch,
    pub length_mm: i32,
    pub num_axles: i16,
    pub railway_company_name: Option<String>,
    pub railway_company_country_name: Option<String>,
    pub control: Control,
    pub loco_type: LocoType,
    pub auto_coupling: bool,
    pub num_driven_axles: i16,
}

/// A newly supplied image, write shape.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddImageDto {
    #[validate(url(message = "Invalid image URL"))]
    pub url: String,
}

/// Request to add a locomotive to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddLocomotiveDto {
    #[validate(custom(function = depot_core::validation::rules::not_blank, message = "Name must not be blank"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price_cents: i64,

    pub tag: Option<TagId>,

    pub stock_status: StockStatusDto,

    /// IDs of already stored images to attach, in display order.
    #[serde(default)]
    pub reused_images: Vec<ImageId>,

    /// New images to store, appended after the reused ones.
    #[serde(default)]
    #[validate(nested)]
    pub added_images: Vec<AddImageDto>,

    pub scale: Scale,
    pub epoch: Epoch,

    #[validate(range(min = 0))]
    pub length_mm: i32,

    #[validate(range(min = 0))]
    pub num_axles: i16,

    pub railway_company: Option<RailwayCompanyId>,

    pub control: Control,
    pub loco_type: LocoType,
    pub auto_coupling: bool,

    #[validate(range(min = 0))]
    pub num_driven_axles: i16,

    pub digital_decoder: Option<DecoderId>,
}

/// Request to edit a locomotive.
///
/// Deliberately narrower than [`AddLocomotiveDto`]: only the
/// locomotive-specific fields can be edited here; name, price, images, and
/// stock are managed through their own flows.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct EditLocomotiveDto {
    pub id: ProductId,
    pub control: Control,
    pub loco_type: LocoType,
    pub auto_coupling: bool,

    #[validate(range(min = 0))]
    pub num_driven_axles: i16,

    pub digital_decoder: Option<DecoderId>,
}

/// One page of the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocomotiveListResponse {
    pub locomotives: Vec<ListLocomotiveDto>,
    /// The 1-indexed page number actually served (after clamping).
    pub page: u32,
    /// Total pages for the current criteria; at least 1.
    pub total_pages: u32,
}

/// Distinct tags in use, for the filter UI.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagListResponse {
    pub tags: Vec<TagId>,
}
