use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::{Address, DomainResult, Inhabitant, InhabitantRepositoryInterface};
use crate::infrastructure::database::entities::inhabitant;

pub struct InhabitantRepository {
    db: DatabaseConnection,
}

impl InhabitantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(model: inhabitant::Model) -> Inhabitant {
    Inhabitant {
        id: model.id,
        name: model.name,
        cpf: model.cpf,
        phone: model.phone,
        address: Address {
            street: model.address_street,
            number: model.address_number,
        },
        community_id: model.community_id,
    }
}

fn to_active_model(i: &Inhabitant) -> inhabitant::ActiveModel {
    inhabitant::ActiveModel {
        id: Set(i.id.clone()),
        name: Set(i.name.clone()),
        cpf: Set(i.cpf.clone()),
        phone: Set(i.phone.clone()),
        address_street: Set(i.address.street.clone()),
        address_number: Set(i.address.number.clone()),
        community_id: Set(i.community_id.clone()),
    }
}

#[async_trait]
impl InhabitantRepositoryInterface for InhabitantRepository {
    async fn insert(&self, new: Inhabitant) -> DomainResult<()> {
        to_active_model(&new).insert(&self.db).await?;
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<Inhabitant>> {
        let models = inhabitant::Entity::find().all(&self.db).await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Inhabitant>> {
        let model = inhabitant::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_cpf(&self, cpf: &str) -> DomainResult<Option<Inhabitant>> {
        let model = inhabitant::Entity::find()
            .filter(inhabitant::Column::Cpf.eq(cpf))
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_domain))
    }

    async fn exists_for_community(&self, community_id: &str) -> DomainResult<bool> {
        let model = inhabitant::Entity::find()
            .filter(inhabitant::Column::CommunityId.eq(community_id))
            .one(&self.db)
            .await?;
        Ok(model.is_some())
    }

    async fn update(&self, i: &Inhabitant) -> DomainResult<()> {
        to_active_model(i).update(&self.db).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        inhabitant::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
