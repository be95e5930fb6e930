//! Community (administrative zone) domain model

use serde::Serialize;
use validator::Validate;

#[derive(Debug, Clone, Serialize)]
pub struct Community {
    pub id: String,
    pub name: String,
}

/// Create/rename candidate.
#[derive(Debug, Validate)]
pub struct NewCommunity {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}
