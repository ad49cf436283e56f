//! # Depot Service
//!
//! Business logic service layer for the Depot catalog: transfer shapes,
//! entity-to-DTO mapping, query shaping (search, filter, order), and the
//! paginated list service.
//!
//! The listing pipeline composes in a fixed order, with each stage a no-op
//! when its criterion is absent:
//! project to DTOs → search → filter → order → paginate.

pub mod dto;
pub mod locomotive_service;
pub mod locomotive_service_impl;
pub mod mappers;
pub mod query;
pub mod search;

pub use dto::*;
pub use locomotive_service::*;
pub use locomotive_service_impl::*;
pub use query::*;
