//! # Depot Repository
//!
//! Persistence layer for the Depot catalog. Provides the repository trait
//! the service layer programs against, plus the MySQL implementation and
//! connection pool management.

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::MySqlLocomotiveRepository;
pub use pool::{DatabasePool, DatabasePoolInterface, DatabasePoolParameters};
pub use traits::LocomotiveRepository;
