//! User entity for database

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Caseworker category
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum UserRole {
    #[sea_orm(string_value = "Bolsa Família")]
    BolsaFamilia,
    #[sea_orm(string_value = "Centro de Referência de Assistência Social")]
    Cras,
    #[sea_orm(string_value = "None")]
    None,
}

/// User model.
///
/// Email uniqueness is a service-layer precheck, not a column constraint;
/// the store mirrors the original document database, which enforced nothing.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
