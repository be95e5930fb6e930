use async_trait::async_trait;

use super::Community;
use crate::domain::DomainResult;

/// Persistence gateway for communities. Natural key: name.
#[async_trait]
pub trait CommunityRepositoryInterface: Send + Sync {
    async fn insert(&self, community: Community) -> DomainResult<()>;

    async fn list(&self) -> DomainResult<Vec<Community>>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Community>>;
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Community>>;

    async fn update(&self, community: &Community) -> DomainResult<()>;
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
