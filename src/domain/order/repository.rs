use async_trait::async_trait;

use super::Order;
use crate::domain::DomainResult;

/// Persistence gateway for orders.
#[async_trait]
pub trait OrderRepositoryInterface: Send + Sync {
    async fn insert(&self, order: Order) -> DomainResult<()>;

    async fn list(&self) -> DomainResult<Vec<Order>>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Order>>;

    async fn update(&self, order: &Order) -> DomainResult<()>;
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
