//! Inhabitant aggregate

pub mod model;
pub mod repository;

pub use model::{Address, Inhabitant, NewInhabitant};
pub use repository::InhabitantRepositoryInterface;
