//! Community DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Community;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommunityDto {
    pub id: String,
    pub name: String,
}

impl From<Community> for CommunityDto {
    fn from(c: Community) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommunityRequest {
    pub name: Option<String>,
}

/// Creation response wrapping the new record with a confirmation.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedCommunityResponse {
    pub community: CommunityDto,
    pub message: String,
}

/// Name lookup query string
#[derive(Debug, Deserialize, IntoParams)]
pub struct CommunityNameQuery {
    pub name: String,
}
