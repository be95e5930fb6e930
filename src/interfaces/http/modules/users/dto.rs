//! User DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::User;

/// User API representation. The password hash never leaves the server.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "userType")]
    pub user_type: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            user_type: u.role.as_str().to_string(),
        }
    }
}

/// Signup request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "userType")]
    pub user_type: Option<String>,
}

/// Rename request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
}

/// Deletion confirmation carrying the removed id
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedUserResponse {
    pub id: String,
    pub message: String,
}
