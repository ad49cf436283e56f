//! MySQL repository implementations.

mod locomotive_repository;

pub use locomotive_repository::MySqlLocomotiveRepository;
