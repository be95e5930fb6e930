//! Order API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CommunityOrderDto, CreateOrderRequest, OrderDto, ProcessedOrderDto, UpdateOrderRequest,
};
use crate::application::services::{CreateOrderInput, OrderService, UpdateOrderInput};
use crate::infrastructure::database::repositories::{
    CommunityRepository, InhabitantRepository, OrderRepository, UserRepository,
};
use crate::interfaces::http::common::{ApiError, MessageResponse};

#[derive(Clone)]
pub struct OrderHandlerState {
    pub order_service:
        Arc<OrderService<OrderRepository, UserRepository, InhabitantRepository, CommunityRepository>>,
}

#[utoipa::path(
    post,
    path = "/v1/order",
    tag = "Orders",
    security(("bearer_auth" = [])),
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created with status Pendente", body = OrderDto),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "User or inhabitant not found")
    )
)]
pub async fn create_order(
    State(state): State<OrderHandlerState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderDto>), ApiError> {
    let order = state
        .order_service
        .create_order(CreateOrderInput {
            content: request.content,
            user_id: request.user_id,
            inhabitant_id: request.inhabitant_id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(OrderDto::from(order))))
}

#[utoipa::path(
    get,
    path = "/v1/order",
    tag = "Orders",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Order list, newest first", body = [OrderDto]),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_orders(
    State(state): State<OrderHandlerState>,
) -> Result<Json<Vec<OrderDto>>, ApiError> {
    let orders = state.order_service.list_orders().await?;
    Ok(Json(orders.into_iter().map(OrderDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/v1/order/data/view",
    tag = "Orders",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Orders joined with caseworker and beneficiary", body = [ProcessedOrderDto]),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_processed_orders(
    State(state): State<OrderHandlerState>,
) -> Result<Json<Vec<ProcessedOrderDto>>, ApiError> {
    let rows = state.order_service.get_all_orders_processed().await?;
    Ok(Json(rows.into_iter().map(ProcessedOrderDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/v1/order/with/community",
    tag = "Orders",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current-year orders projected to community and date", body = [CommunityOrderDto]),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_orders_with_community(
    State(state): State<OrderHandlerState>,
) -> Result<Json<Vec<CommunityOrderDto>>, ApiError> {
    let rows = state.order_service.get_orders_with_community().await?;
    Ok(Json(rows.into_iter().map(CommunityOrderDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/v1/order/{id}",
    tag = "Orders",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = OrderDto),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_order(
    State(state): State<OrderHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<OrderDto>, ApiError> {
    let order = state.order_service.get_by_id(&id).await?;
    Ok(Json(OrderDto::from(order)))
}

#[utoipa::path(
    put,
    path = "/v1/order/{id}",
    tag = "Orders",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Order ID")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderDto),
        (status = 400, description = "Invalid content or status"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_order(
    State(state): State<OrderHandlerState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateOrderRequest>,
) -> Result<Json<OrderDto>, ApiError> {
    let order = state
        .order_service
        .update_order(
            &id,
            UpdateOrderInput {
                content: request.content,
                status: request.status,
            },
        )
        .await?;
    Ok(Json(OrderDto::from(order)))
}

#[utoipa::path(
    delete,
    path = "/v1/order/{id}",
    tag = "Orders",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted", body = MessageResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_order(
    State(state): State<OrderHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.order_service.delete_order(&id).await?;
    Ok(Json(MessageResponse::new("Order deleted")))
}
