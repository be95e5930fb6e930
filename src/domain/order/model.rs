//! Order (service request) domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Order status. Any value may follow any other; transitions are free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Pendente")]
    Pending,
    #[serde(rename = "Negado")]
    Rejected,
    #[serde(rename = "Atendido")]
    Attended,
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Rejected => "Negado",
            Self::Attended => "Atendido",
        }
    }

    /// Parse a wire value. Unrecognized strings must be rejected by the
    /// caller; they are never coerced to `Pending`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pendente" => Some(Self::Pending),
            "Negado" => Some(Self::Rejected),
            "Atendido" => Some(Self::Attended),
            _ => None,
        }
    }
}

/// Order model. `user_id` and `inhabitant_id` are soft references checked
/// at creation time only.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: String,
    pub content: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "inhabitantID")]
    pub inhabitant_id: String,
    pub status: OrderStatus,
    pub date: DateTime<Utc>,
    pub date_update: DateTime<Utc>,
}

/// Create/update candidate.
#[derive(Debug, Validate)]
pub struct NewOrder {
    #[validate(length(min = 5, max = 255, message = "content must be between 5 and 255 characters"))]
    pub content: String,
    #[validate(length(min = 1, message = "userID must not be empty"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "inhabitantID must not be empty"))]
    pub inhabitant_id: String,
}
