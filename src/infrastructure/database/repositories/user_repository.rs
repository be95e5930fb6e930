use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::{DomainResult, User, UserRepositoryInterface, UserRole};
use crate::infrastructure::database::entities::user;

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::BolsaFamilia => UserRole::BolsaFamilia,
        user::UserRole::Cras => UserRole::Cras,
        user::UserRole::None => UserRole::None,
    }
}

fn domain_role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::BolsaFamilia => user::UserRole::BolsaFamilia,
        UserRole::Cras => user::UserRole::Cras,
        UserRole::None => user::UserRole::None,
    }
}

fn model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        role: entity_role_to_domain(model.role),
    }
}

fn to_active_model(u: &User) -> user::ActiveModel {
    user::ActiveModel {
        id: Set(u.id.clone()),
        name: Set(u.name.clone()),
        email: Set(u.email.clone()),
        password_hash: Set(u.password_hash.clone()),
        role: Set(domain_role_to_entity(u.role)),
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn insert(&self, new: User) -> DomainResult<()> {
        to_active_model(&new).insert(&self.db).await?;
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find().all(&self.db).await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_domain))
    }

    async fn update(&self, u: &User) -> DomainResult<()> {
        to_active_model(u).update(&self.db).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        user::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
