use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::{Community, CommunityRepositoryInterface, DomainResult};
use crate::infrastructure::database::entities::community;

pub struct CommunityRepository {
    db: DatabaseConnection,
}

impl CommunityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(model: community::Model) -> Community {
    Community {
        id: model.id,
        name: model.name,
    }
}

fn to_active_model(c: &Community) -> community::ActiveModel {
    community::ActiveModel {
        id: Set(c.id.clone()),
        name: Set(c.name.clone()),
    }
}

#[async_trait]
impl CommunityRepositoryInterface for CommunityRepository {
    async fn insert(&self, new: Community) -> DomainResult<()> {
        to_active_model(&new).insert(&self.db).await?;
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<Community>> {
        let models = community::Entity::find().all(&self.db).await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Community>> {
        let model = community::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Community>> {
        let model = community::Entity::find()
            .filter(community::Column::Name.eq(name))
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_domain))
    }

    async fn update(&self, c: &Community) -> DomainResult<()> {
        to_active_model(c).update(&self.db).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        community::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
