//! Auth DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::interfaces::http::modules::users::UserDto;

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login response: the authenticated user (password stripped) plus token.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[serde(rename = "userData")]
    pub user_data: UserDto,
    pub token: String,
}
