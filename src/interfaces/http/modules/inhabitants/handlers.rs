//! Inhabitant API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreateInhabitantRequest, InhabitantDto, InhabitantListItemDto, SavedInhabitantResponse,
};
use crate::application::services::{CreateInhabitantInput, InhabitantService};
use crate::infrastructure::database::repositories::{CommunityRepository, InhabitantRepository};
use crate::interfaces::http::common::{ApiError, MessageResponse};

#[derive(Clone)]
pub struct InhabitantHandlerState {
    pub inhabitant_service: Arc<InhabitantService<InhabitantRepository, CommunityRepository>>,
}

fn to_input(request: CreateInhabitantRequest) -> CreateInhabitantInput {
    CreateInhabitantInput {
        name: request.name,
        cpf: request.cpf,
        phone: request.phone,
        street: request.street,
        number: request.number,
        community_id: request.community_id,
    }
}

#[utoipa::path(
    post,
    path = "/v1/inhabitant",
    tag = "Inhabitants",
    security(("bearer_auth" = [])),
    request_body = CreateInhabitantRequest,
    responses(
        (status = 201, description = "Inhabitant created", body = SavedInhabitantResponse),
        (status = 400, description = "Invalid CPF, missing fields or duplicate"),
        (status = 404, description = "Community not found")
    )
)]
pub async fn create_inhabitant(
    State(state): State<InhabitantHandlerState>,
    Json(request): Json<CreateInhabitantRequest>,
) -> Result<(StatusCode, Json<SavedInhabitantResponse>), ApiError> {
    let inhabitant = state
        .inhabitant_service
        .create_inhabitant(to_input(request))
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(SavedInhabitantResponse {
            inhabitant: InhabitantDto::from(inhabitant),
            message: "Inhabitant created successfully".to_string(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/v1/inhabitant",
    tag = "Inhabitants",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Inhabitant list with community names", body = [InhabitantListItemDto]),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_inhabitants(
    State(state): State<InhabitantHandlerState>,
) -> Result<Json<Vec<InhabitantListItemDto>>, ApiError> {
    let rows = state.inhabitant_service.list_inhabitants().await?;
    Ok(Json(rows.into_iter().map(InhabitantListItemDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/v1/inhabitant/{cpf}",
    tag = "Inhabitants",
    security(("bearer_auth" = [])),
    params(("cpf" = String, Path, description = "Inhabitant CPF, formatted or bare")),
    responses(
        (status = 200, description = "Inhabitant details", body = InhabitantDto),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_inhabitant_by_cpf(
    State(state): State<InhabitantHandlerState>,
    Path(cpf): Path<String>,
) -> Result<Json<InhabitantDto>, ApiError> {
    let inhabitant = state.inhabitant_service.get_by_cpf(&cpf).await?;
    Ok(Json(InhabitantDto::from(inhabitant)))
}

#[utoipa::path(
    put,
    path = "/v1/inhabitant/{id}",
    tag = "Inhabitants",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Inhabitant ID")),
    request_body = CreateInhabitantRequest,
    responses(
        (status = 200, description = "Inhabitant updated", body = SavedInhabitantResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_inhabitant(
    State(state): State<InhabitantHandlerState>,
    Path(id): Path<String>,
    Json(request): Json<CreateInhabitantRequest>,
) -> Result<Json<SavedInhabitantResponse>, ApiError> {
    let inhabitant = state
        .inhabitant_service
        .update_inhabitant(&id, to_input(request))
        .await?;
    Ok(Json(SavedInhabitantResponse {
        inhabitant: InhabitantDto::from(inhabitant),
        message: "Inhabitant updated successfully".to_string(),
    }))
}

#[utoipa::path(
    delete,
    path = "/v1/inhabitant/{id}",
    tag = "Inhabitants",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Inhabitant ID")),
    responses(
        (status = 200, description = "Inhabitant deleted", body = MessageResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_inhabitant(
    State(state): State<InhabitantHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.inhabitant_service.delete_inhabitant(&id).await?;
    Ok(Json(MessageResponse::new("Inhabitant deleted")))
}
