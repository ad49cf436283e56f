//! # Depot Server Library
//!
//! Dependency injection configuration and server startup for the Depot
//! catalog service.

pub mod di;
pub mod startup;
