//! Domain errors

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// A single field-level constraint failure.
///
/// `property` is the field path (`"address.street"` for nested fields),
/// `constraints` lists every human-readable rule the value broke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    pub property: String,
    pub constraints: Vec<String>,
}

#[derive(Debug, Error)]
pub enum DomainError {
    /// A required field is missing from the request.
    #[error("{0}")]
    Precondition(String),

    /// One or more field constraints failed.
    #[error("validation failed")]
    Validation(Vec<FieldViolation>),

    /// A foreign id on the candidate does not resolve to an existing record.
    #[error("{entity} not found")]
    ReferenceNotFound { entity: &'static str },

    /// No record for the requested key.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// A natural-key precheck found another record holding the value.
    #[error("{0}")]
    Duplicate(String),

    /// Deletion refused because dependent records exist.
    #[error("{0}")]
    HasDependents(String),

    /// Login failed. Deliberately does not say whether the email exists.
    #[error("Invalid e-mail or password")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Unexpected failure in a collaborator (hashing, token signing, ...).
    #[error("{0}")]
    Internal(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
