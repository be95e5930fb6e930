//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use super::dto::{LoginRequest, LoginResponse};
use crate::application::services::UserService;
use crate::infrastructure::database::repositories::UserRepository;
use crate::interfaces::http::common::ApiError;
use crate::interfaces::http::modules::users::UserDto;

#[derive(Clone)]
pub struct AuthHandlerState {
    pub user_service: Arc<UserService<UserRepository>>,
}

#[utoipa::path(
    post,
    path = "/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 400, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let auth = state
        .user_service
        .login(
            request.email.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(LoginResponse {
        user_data: UserDto::from(auth.user),
        token: auth.token,
    }))
}
