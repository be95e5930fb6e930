//! Create inhabitants table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // community_id is a soft reference (no foreign key); cpf uniqueness
        // is a service-layer precheck.
        manager
            .create_table(
                Table::create()
                    .table(Inhabitants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inhabitants::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Inhabitants::Name).string().not_null())
                    .col(ColumnDef::new(Inhabitants::Cpf).string().not_null())
                    .col(
                        ColumnDef::new(Inhabitants::Phone)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Inhabitants::AddressStreet).string().not_null())
                    .col(ColumnDef::new(Inhabitants::AddressNumber).string().not_null())
                    .col(ColumnDef::new(Inhabitants::CommunityId).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inhabitants::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Inhabitants {
    Table,
    Id,
    Name,
    Cpf,
    Phone,
    AddressStreet,
    AddressNumber,
    CommunityId,
}
