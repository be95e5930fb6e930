use async_trait::async_trait;

use super::Inhabitant;
use crate::domain::DomainResult;

/// Persistence gateway for inhabitants. Natural key: cpf.
#[async_trait]
pub trait InhabitantRepositoryInterface: Send + Sync {
    async fn insert(&self, inhabitant: Inhabitant) -> DomainResult<()>;

    async fn list(&self) -> DomainResult<Vec<Inhabitant>>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Inhabitant>>;
    async fn find_by_cpf(&self, cpf: &str) -> DomainResult<Option<Inhabitant>>;

    /// Deletion-guard probe: does any inhabitant reference this community?
    async fn exists_for_community(&self, community_id: &str) -> DomainResult<bool>;

    async fn update(&self, inhabitant: &Inhabitant) -> DomainResult<()>;
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
