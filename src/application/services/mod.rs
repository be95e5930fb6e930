//! Application services: one per entity, generic over the persistence
//! gateways they orchestrate.

pub mod community;
pub mod inhabitant;
pub mod order;
pub mod user;

pub use community::CommunityService;
pub use inhabitant::{CreateInhabitantInput, InhabitantService, InhabitantWithCommunity};
pub use order::{
    CommunityOrderRow, CreateOrderInput, OrderService, ProcessedOrder, UpdateOrderInput,
};
pub use user::{AuthResult, CreateUserInput, UserService};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use sea_orm::{ConnectOptions, Database, DatabaseConnection};
    use sea_orm_migration::MigratorTrait;

    use crate::infrastructure::crypto::jwt::JwtConfig;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::repositories::{
        CommunityRepository, InhabitantRepository, OrderRepository, UserRepository,
    };

    use super::{CommunityService, InhabitantService, OrderService, UserService};

    /// Fresh in-memory SQLite with the schema applied. A single connection
    /// keeps every query on the same in-memory database.
    pub async fn test_db() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);
        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    pub fn user_service(db: &DatabaseConnection) -> UserService<UserRepository> {
        UserService::new(
            Arc::new(UserRepository::new(db.clone())),
            JwtConfig::default(),
            4,
        )
    }

    pub fn community_service(
        db: &DatabaseConnection,
    ) -> CommunityService<CommunityRepository, InhabitantRepository> {
        CommunityService::new(
            Arc::new(CommunityRepository::new(db.clone())),
            Arc::new(InhabitantRepository::new(db.clone())),
        )
    }

    pub fn inhabitant_service(
        db: &DatabaseConnection,
    ) -> InhabitantService<InhabitantRepository, CommunityRepository> {
        InhabitantService::new(
            Arc::new(InhabitantRepository::new(db.clone())),
            Arc::new(CommunityRepository::new(db.clone())),
        )
    }

    pub fn order_service(
        db: &DatabaseConnection,
    ) -> OrderService<OrderRepository, UserRepository, InhabitantRepository, CommunityRepository>
    {
        OrderService::new(
            Arc::new(OrderRepository::new(db.clone())),
            Arc::new(UserRepository::new(db.clone())),
            Arc::new(InhabitantRepository::new(db.clone())),
            Arc::new(CommunityRepository::new(db.clone())),
        )
    }
}
