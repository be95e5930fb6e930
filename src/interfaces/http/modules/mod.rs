//! HTTP endpoint modules, one per resource

pub mod auth;
pub mod communities;
pub mod inhabitants;
pub mod orders;
pub mod users;
