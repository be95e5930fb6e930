//! Database entities

pub mod community;
pub mod inhabitant;
pub mod order;
pub mod user;
