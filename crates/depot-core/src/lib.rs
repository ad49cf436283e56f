//! # Depot Core
//!
//! Core types, domain model, and error definitions for the Depot model-train
//! catalog. This crate provides the foundational abstractions used across all
//! layers: the error taxonomy, typed identifiers, pagination, and the catalog
//! entities themselves.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};
