//! Inhabitant DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::services::InhabitantWithCommunity;
use crate::domain::Inhabitant;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddressDto {
    pub street: String,
    pub number: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InhabitantDto {
    pub id: String,
    pub name: String,
    pub cpf: String,
    #[serde(rename = "numberPhone")]
    pub phone: String,
    pub address: AddressDto,
    #[serde(rename = "communityID")]
    pub community_id: String,
}

impl From<Inhabitant> for InhabitantDto {
    fn from(i: Inhabitant) -> Self {
        Self {
            id: i.id,
            name: i.name,
            cpf: i.cpf,
            phone: i.phone,
            address: AddressDto {
                street: i.address.street,
                number: i.address.number,
            },
            community_id: i.community_id,
        }
    }
}

/// Listing row: the inhabitant plus its community's display name.
#[derive(Debug, Serialize, ToSchema)]
pub struct InhabitantListItemDto {
    #[serde(flatten)]
    pub inhabitant: InhabitantDto,
    pub community: String,
}

impl From<InhabitantWithCommunity> for InhabitantListItemDto {
    fn from(row: InhabitantWithCommunity) -> Self {
        Self {
            inhabitant: InhabitantDto::from(row.inhabitant),
            community: row.community_name,
        }
    }
}

/// Create/update response wrapping the record with a confirmation.
#[derive(Debug, Serialize, ToSchema)]
pub struct SavedInhabitantResponse {
    pub inhabitant: InhabitantDto,
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateInhabitantRequest {
    pub name: Option<String>,
    pub cpf: Option<String>,
    #[serde(rename = "numberPhone")]
    pub phone: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    #[serde(rename = "communityID")]
    pub community_id: Option<String>,
}
