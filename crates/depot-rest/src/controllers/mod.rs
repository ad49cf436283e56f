//! REST API controllers.

pub mod health_controller;
pub mod locomotive_controller;

pub use health_controller::*;
