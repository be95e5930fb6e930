//! Community management service

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::domain::{
    collect_violations, Community, CommunityRepositoryInterface, DomainError, DomainResult,
    InhabitantRepositoryInterface, NewCommunity,
};

/// Community service.
///
/// Needs the inhabitant gateway as well: the store has no foreign keys, so
/// the deletion guard is a manual scan for dependents.
pub struct CommunityService<C, I>
where
    C: CommunityRepositoryInterface,
    I: InhabitantRepositoryInterface,
{
    communities: Arc<C>,
    inhabitants: Arc<I>,
}

impl<C, I> CommunityService<C, I>
where
    C: CommunityRepositoryInterface,
    I: InhabitantRepositoryInterface,
{
    pub fn new(communities: Arc<C>, inhabitants: Arc<I>) -> Self {
        Self {
            communities,
            inhabitants,
        }
    }

    pub async fn create_community(&self, name: Option<String>) -> DomainResult<Community> {
        let name = name.unwrap_or_default();
        if name.is_empty() {
            return Err(DomainError::Precondition("Name is required".into()));
        }

        let candidate = NewCommunity { name };
        if let Err(errors) = candidate.validate() {
            return Err(DomainError::Validation(collect_violations(&errors)));
        }

        if self.communities.find_by_name(&candidate.name).await?.is_some() {
            return Err(DomainError::Duplicate("Community name already in use".into()));
        }

        let community = Community {
            id: uuid::Uuid::new_v4().to_string(),
            name: candidate.name,
        };
        self.communities.insert(community.clone()).await?;

        info!(community_id = %community.id, name = %community.name, "Community created");
        Ok(community)
    }

    pub async fn list_communities(&self) -> DomainResult<Vec<Community>> {
        self.communities.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> DomainResult<Community> {
        self.communities
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { entity: "Community" })
    }

    pub async fn get_by_name(&self, name: &str) -> DomainResult<Community> {
        self.communities
            .find_by_name(name)
            .await?
            .ok_or(DomainError::NotFound { entity: "Community" })
    }

    /// Rename a community. The uniqueness precheck only conflicts when a
    /// *different* record already holds the name, so renaming a community
    /// to its current name is a no-op, not an error.
    pub async fn update_community(&self, id: &str, name: Option<String>) -> DomainResult<Community> {
        let name = name.unwrap_or_default();

        let Some(mut community) = self.communities.find_by_id(id).await? else {
            return Err(DomainError::NotFound { entity: "Community" });
        };

        let candidate = NewCommunity { name };
        if let Err(errors) = candidate.validate() {
            return Err(DomainError::Validation(collect_violations(&errors)));
        }

        if let Some(holder) = self.communities.find_by_name(&candidate.name).await? {
            if holder.id != community.id {
                return Err(DomainError::Duplicate("Community name already in use".into()));
            }
        }

        community.name = candidate.name;
        self.communities.update(&community).await?;

        Ok(community)
    }

    /// Delete a community unless any inhabitant still references it.
    pub async fn delete_community(&self, id: &str) -> DomainResult<()> {
        let Some(community) = self.communities.find_by_id(id).await? else {
            return Err(DomainError::NotFound { entity: "Community" });
        };

        if self.inhabitants.exists_for_community(&community.id).await? {
            return Err(DomainError::HasDependents(
                "Community has registered inhabitants".into(),
            ));
        }

        self.communities.delete(&community.id).await?;
        info!(community_id = %community.id, "Community deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{
        community_service, inhabitant_service, test_db,
    };
    use crate::application::services::inhabitant::CreateInhabitantInput;
    use crate::domain::DomainError;

    #[tokio::test]
    async fn duplicate_name_is_rejected() {
        let db = test_db().await;
        let service = community_service(&db);

        service.create_community(Some("Vila Nova".into())).await.unwrap();
        let err = service.create_community(Some("Vila Nova".into())).await.unwrap_err();
        assert!(matches!(err, DomainError::Duplicate(_)));
    }

    #[tokio::test]
    async fn rename_to_own_name_is_allowed_but_collision_is_not() {
        let db = test_db().await;
        let service = community_service(&db);

        let a = service.create_community(Some("Centro".into())).await.unwrap();
        service.create_community(Some("Jardim".into())).await.unwrap();

        // Same name, same record: fine.
        service.update_community(&a.id, Some("Centro".into())).await.unwrap();
        // Another record's name: duplicate.
        let err = service
            .update_community(&a.id, Some("Jardim".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Duplicate(_)));
    }

    #[tokio::test]
    async fn delete_is_blocked_while_inhabitants_reference_it() {
        let db = test_db().await;
        let communities = community_service(&db);
        let inhabitants = inhabitant_service(&db);

        let community = communities.create_community(Some("Beira Rio".into())).await.unwrap();
        inhabitants
            .create_inhabitant(CreateInhabitantInput {
                name: Some("Maria da Silva".into()),
                cpf: Some("529.982.247-25".into()),
                phone: None,
                street: Some("Rua das Flores".into()),
                number: Some("42".into()),
                community_id: Some(community.id.clone()),
            })
            .await
            .unwrap();

        let err = communities.delete_community(&community.id).await.unwrap_err();
        assert!(matches!(err, DomainError::HasDependents(_)));
        // Still there.
        assert!(communities.get_by_id(&community.id).await.is_ok());
    }

    #[tokio::test]
    async fn delete_succeeds_without_dependents() {
        let db = test_db().await;
        let service = community_service(&db);

        let community = service.create_community(Some("Sem Moradores".into())).await.unwrap();
        service.delete_community(&community.id).await.unwrap();
        let err = service.get_by_id(&community.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
