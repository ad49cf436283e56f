//! Result type aliases for the Depot catalog.

use crate::DepotError;

/// A specialized `Result` type for Depot operations.
pub type DepotResult<T> = Result<T, DepotError>;
