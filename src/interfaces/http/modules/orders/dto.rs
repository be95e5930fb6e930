//! Order DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::services::{CommunityOrderRow, ProcessedOrder};
use crate::domain::Order;

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderDto {
    pub id: String,
    pub content: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "inhabitantID")]
    pub inhabitant_id: String,
    /// One of `Pendente`, `Negado`, `Atendido`
    pub status: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "dateUpdate")]
    pub date_update: DateTime<Utc>,
}

impl From<Order> for OrderDto {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            content: o.content,
            user_id: o.user_id,
            inhabitant_id: o.inhabitant_id,
            status: o.status.as_str().to_string(),
            date: o.date,
            date_update: o.date_update,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub content: Option<String>,
    #[serde(rename = "userID")]
    pub user_id: Option<String>,
    #[serde(rename = "inhabitantID")]
    pub inhabitant_id: Option<String>,
}

/// Partial update: omitted fields keep their stored value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    pub content: Option<String>,
    pub status: Option<String>,
}

/// Processed-report row: the order joined with caseworker and beneficiary,
/// dates rendered `DD/MM/YYYY`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProcessedOrderDto {
    pub id: String,
    pub content: String,
    pub status: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "userType")]
    pub user_role: String,
    #[serde(rename = "inhabitantName")]
    pub inhabitant_name: String,
    #[serde(rename = "inhabitantCPF")]
    pub inhabitant_cpf: String,
    pub date: String,
    #[serde(rename = "dateUpdate")]
    pub date_update: String,
}

impl From<ProcessedOrder> for ProcessedOrderDto {
    fn from(row: ProcessedOrder) -> Self {
        Self {
            id: row.id,
            content: row.content,
            status: row.status.as_str().to_string(),
            user_name: row.user_name,
            user_role: row.user_role,
            inhabitant_name: row.inhabitant_name,
            inhabitant_cpf: row.inhabitant_cpf,
            date: row.date,
            date_update: row.date_update,
        }
    }
}

/// Current-year projection row.
#[derive(Debug, Serialize, ToSchema)]
pub struct CommunityOrderDto {
    pub community: String,
    pub date: String,
}

impl From<CommunityOrderRow> for CommunityOrderDto {
    fn from(row: CommunityOrderRow) -> Self {
        Self {
            community: row.community,
            date: row.date,
        }
    }
}
