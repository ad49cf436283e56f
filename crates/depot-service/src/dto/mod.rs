//! Transfer shapes exchanged with the presentation layer.

mod locomotive_dto;

pub use locomotive_dto::*;
