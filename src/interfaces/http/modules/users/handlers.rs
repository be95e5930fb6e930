//! User management API handlers
//!
//! Signup is open; everything else sits behind the Bearer middleware.
//! Delegates to `UserService` from the application layer.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateUserRequest, DeletedUserResponse, UpdateUserRequest, UserDto};
use crate::application::services::{CreateUserInput, UserService};
use crate::infrastructure::database::repositories::UserRepository;
use crate::interfaces::http::common::ApiError;

/// User handler state — concrete over `UserRepository` for Axum compatibility.
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService<UserRepository>>,
}

#[utoipa::path(
    post,
    path = "/v1/user",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Missing fields, invalid values or duplicate email")
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let user = state
        .user_service
        .create_user(CreateUserInput {
            name: request.name,
            email: request.email,
            password: request.password,
            user_type: request.user_type,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

#[utoipa::path(
    get,
    path = "/v1/user",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User list", body = [UserDto]),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/v1/user/{email}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "User details", body = UserDto),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user_by_email(
    State(state): State<UserHandlerState>,
    Path(email): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state.user_service.get_by_email(&email).await?;
    Ok(Json(UserDto::from(user)))
}

#[utoipa::path(
    patch,
    path = "/v1/user/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User renamed", body = UserDto),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state.user_service.update_user(&id, request.name).await?;
    Ok(Json(UserDto::from(user)))
}

#[utoipa::path(
    delete,
    path = "/v1/user/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = DeletedUserResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedUserResponse>, ApiError> {
    let id = state.user_service.delete_user(&id).await?;
    Ok(Json(DeletedUserResponse {
        id,
        message: "User deleted".to_string(),
    }))
}
