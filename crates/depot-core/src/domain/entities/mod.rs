//! Catalog entities.

mod locomotive;
mod product;
mod railway_company;

pub use locomotive::{Locomotive, LocomotiveAttributes, ModelAttributes, RollingStockAttributes};
pub use product::{Image, ProductCore, StockStatus};
pub use railway_company::{Country, RailwayCompany};
