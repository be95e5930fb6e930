//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240901_000001_create_users;
mod m20240901_000002_create_communities;
mod m20240901_000003_create_inhabitants;
mod m20240901_000004_create_orders;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240901_000001_create_users::Migration),
            Box::new(m20240901_000002_create_communities::Migration),
            Box::new(m20240901_000003_create_inhabitants::Migration),
            Box::new(m20240901_000004_create_orders::Migration),
        ]
    }
}
