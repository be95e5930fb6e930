use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{DomainResult, Order, OrderRepositoryInterface, OrderStatus};
use crate::infrastructure::database::entities::order;

pub struct OrderRepository {
    db: DatabaseConnection,
}

impl OrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn entity_status_to_domain(status: order::OrderStatus) -> OrderStatus {
    match status {
        order::OrderStatus::Pending => OrderStatus::Pending,
        order::OrderStatus::Rejected => OrderStatus::Rejected,
        order::OrderStatus::Attended => OrderStatus::Attended,
    }
}

fn domain_status_to_entity(status: OrderStatus) -> order::OrderStatus {
    match status {
        OrderStatus::Pending => order::OrderStatus::Pending,
        OrderStatus::Rejected => order::OrderStatus::Rejected,
        OrderStatus::Attended => order::OrderStatus::Attended,
    }
}

fn model_to_domain(model: order::Model) -> Order {
    Order {
        id: model.id,
        content: model.content,
        user_id: model.user_id,
        inhabitant_id: model.inhabitant_id,
        status: entity_status_to_domain(model.status),
        date: model.date,
        date_update: model.date_update,
    }
}

fn to_active_model(o: &Order) -> order::ActiveModel {
    order::ActiveModel {
        id: Set(o.id.clone()),
        content: Set(o.content.clone()),
        user_id: Set(o.user_id.clone()),
        inhabitant_id: Set(o.inhabitant_id.clone()),
        status: Set(domain_status_to_entity(o.status)),
        date: Set(o.date),
        date_update: Set(o.date_update),
    }
}

#[async_trait]
impl OrderRepositoryInterface for OrderRepository {
    async fn insert(&self, new: Order) -> DomainResult<()> {
        to_active_model(&new).insert(&self.db).await?;
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<Order>> {
        let models = order::Entity::find()
            .order_by_desc(order::Column::Date)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Order>> {
        let model = order::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn update(&self, o: &Order) -> DomainResult<()> {
        to_active_model(o).update(&self.db).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        order::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
