//! HTTP REST API interfaces
//!
//! - `middleware`: Bearer-token authentication middleware
//! - `modules`: request handlers and DTOs, one module per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;

pub use router::create_api_router;
