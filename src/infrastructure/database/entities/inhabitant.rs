//! Inhabitant entity for database

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Inhabitant model.
///
/// The address sub-object is flattened into columns; `community_id` is a
/// soft reference with no foreign key, matching the original document
/// schema. CPF uniqueness is a service-layer precheck.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inhabitants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub cpf: String,
    pub phone: String,
    pub address_street: String,
    pub address_number: String,
    pub community_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
