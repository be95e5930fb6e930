//! User aggregate
//!
//! Caseworker identity: model, validated candidates, and gateway trait.

pub mod model;
pub mod repository;

pub use model::{NewUser, User, UserNameUpdate, UserRole};
pub use repository::UserRepositoryInterface;
