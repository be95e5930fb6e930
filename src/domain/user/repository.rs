use async_trait::async_trait;

use super::User;
use crate::domain::DomainResult;

/// Persistence gateway for users. Natural key: email.
#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    async fn insert(&self, user: User) -> DomainResult<()>;

    async fn list(&self) -> DomainResult<Vec<User>>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    async fn update(&self, user: &User) -> DomainResult<()>;
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
