//! Identity boundary: password hashing and token issuance

pub mod jwt;
pub mod password;
