//! Community API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CommunityDto, CommunityNameQuery, CreateCommunityRequest, CreatedCommunityResponse,
};
use crate::application::services::CommunityService;
use crate::infrastructure::database::repositories::{CommunityRepository, InhabitantRepository};
use crate::interfaces::http::common::{ApiError, MessageResponse};

#[derive(Clone)]
pub struct CommunityHandlerState {
    pub community_service: Arc<CommunityService<CommunityRepository, InhabitantRepository>>,
}

#[utoipa::path(
    post,
    path = "/v1/community",
    tag = "Communities",
    security(("bearer_auth" = [])),
    request_body = CreateCommunityRequest,
    responses(
        (status = 201, description = "Community created", body = CreatedCommunityResponse),
        (status = 400, description = "Missing name or duplicate")
    )
)]
pub async fn create_community(
    State(state): State<CommunityHandlerState>,
    Json(request): Json<CreateCommunityRequest>,
) -> Result<(StatusCode, Json<CreatedCommunityResponse>), ApiError> {
    let community = state.community_service.create_community(request.name).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedCommunityResponse {
            community: CommunityDto::from(community),
            message: "Community created".to_string(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/v1/community",
    tag = "Communities",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Community list", body = [CommunityDto]),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_communities(
    State(state): State<CommunityHandlerState>,
) -> Result<Json<Vec<CommunityDto>>, ApiError> {
    let communities = state.community_service.list_communities().await?;
    Ok(Json(communities.into_iter().map(CommunityDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/v1/community/{id}",
    tag = "Communities",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Community ID")),
    responses(
        (status = 200, description = "Community details", body = CommunityDto),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_community(
    State(state): State<CommunityHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<CommunityDto>, ApiError> {
    let community = state.community_service.get_by_id(&id).await?;
    Ok(Json(CommunityDto::from(community)))
}

#[utoipa::path(
    get,
    path = "/v1/community/query/name",
    tag = "Communities",
    security(("bearer_auth" = [])),
    params(CommunityNameQuery),
    responses(
        (status = 200, description = "Community details", body = CommunityDto),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_community_by_name(
    State(state): State<CommunityHandlerState>,
    Query(query): Query<CommunityNameQuery>,
) -> Result<Json<CommunityDto>, ApiError> {
    let community = state.community_service.get_by_name(&query.name).await?;
    Ok(Json(CommunityDto::from(community)))
}

#[utoipa::path(
    put,
    path = "/v1/community/{id}",
    tag = "Communities",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Community ID")),
    request_body = CreateCommunityRequest,
    responses(
        (status = 200, description = "Community renamed", body = CommunityDto),
        (status = 400, description = "Name already in use"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_community(
    State(state): State<CommunityHandlerState>,
    Path(id): Path<String>,
    Json(request): Json<CreateCommunityRequest>,
) -> Result<Json<CommunityDto>, ApiError> {
    let community = state
        .community_service
        .update_community(&id, request.name)
        .await?;
    Ok(Json(CommunityDto::from(community)))
}

#[utoipa::path(
    delete,
    path = "/v1/community/{id}",
    tag = "Communities",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Community ID")),
    responses(
        (status = 200, description = "Community deleted", body = MessageResponse),
        (status = 400, description = "Community still has inhabitants"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_community(
    State(state): State<CommunityHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.community_service.delete_community(&id).await?;
    Ok(Json(MessageResponse::new("Community deleted")))
}
