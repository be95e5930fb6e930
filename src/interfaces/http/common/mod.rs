//! Shared HTTP response types
//!
//! Error bodies come in two shapes: `{ "error": string }` for single
//! conditions and `{ "errors": [{ property, constraints }] }` for field
//! validation failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{DomainError, FieldViolation};

/// Single-condition error body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Validation error body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorBody {
    pub errors: Vec<FieldViolation>,
}

/// Plain confirmation body for deletes and similar.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Domain error carried across the handler boundary. Handlers bubble
/// `DomainError` up with `?` and this wrapper picks the status and body.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            DomainError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorBody { errors: violations }),
            )
                .into_response(),

            err @ (DomainError::Precondition(_)
            | DomainError::Duplicate(_)
            | DomainError::HasDependents(_)
            | DomainError::InvalidCredentials) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response(),

            err @ (DomainError::ReferenceNotFound { .. } | DomainError::NotFound { .. }) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response(),

            // Storage and collaborator failures are logged with detail but
            // never leaked to the client.
            err @ (DomainError::Database(_) | DomainError::Internal(_)) => {
                tracing::error!(error = %err, "Unexpected failure while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
