//! # Depot Config
//!
//! Layered configuration for the Depot catalog service.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
