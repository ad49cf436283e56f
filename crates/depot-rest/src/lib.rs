//! # Depot REST
//!
//! REST API layer using Axum for Depot.
//! Provides HTTP endpoints for the locomotive catalog and health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
