//! Custom Axum extractors.

mod listing;

pub use listing::*;
