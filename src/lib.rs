//! # Social Assistance Service
//!
//! REST backend for municipal social-assistance record keeping:
//! caseworkers (users), communities, inhabitants (beneficiaries) and
//! assistance orders.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, validation rules and gateway traits
//! - **application**: Entity services orchestrating the use cases
//! - **infrastructure**: External concerns (database, password hashing, JWT)
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
