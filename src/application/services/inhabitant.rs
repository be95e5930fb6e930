//! Inhabitant management service

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::domain::cpf::sanitize_cpf;
use crate::domain::{
    collect_violations, Address, CommunityRepositoryInterface, DomainError, DomainResult,
    Inhabitant, InhabitantRepositoryInterface, NewInhabitant,
};

/// Sentinel shown when an inhabitant's community reference dangles.
pub const UNKNOWN_COMMUNITY: &str = "Unknown community";

/// Create/update input as it arrives from the wire.
#[derive(Debug, Default)]
pub struct CreateInhabitantInput {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub community_id: Option<String>,
}

/// Listing row enriched with the community display name.
#[derive(Debug)]
pub struct InhabitantWithCommunity {
    pub inhabitant: Inhabitant,
    pub community_name: String,
}

pub struct InhabitantService<I, C>
where
    I: InhabitantRepositoryInterface,
    C: CommunityRepositoryInterface,
{
    inhabitants: Arc<I>,
    communities: Arc<C>,
}

impl<I, C> InhabitantService<I, C>
where
    I: InhabitantRepositoryInterface,
    C: CommunityRepositoryInterface,
{
    pub fn new(inhabitants: Arc<I>, communities: Arc<C>) -> Self {
        Self {
            inhabitants,
            communities,
        }
    }

    /// Sanitize, presence-check, validate, then resolve the community and
    /// check CPF uniqueness before persisting.
    ///
    /// The CPF is sanitized before anything else: formatted input
    /// (`529.982.247-25`) would otherwise fail the exact-length rule.
    pub async fn create_inhabitant(&self, input: CreateInhabitantInput) -> DomainResult<Inhabitant> {
        let candidate = self.build_candidate(input)?;
        self.check_references(&candidate, None).await?;

        let inhabitant = Inhabitant {
            id: uuid::Uuid::new_v4().to_string(),
            name: candidate.name,
            cpf: candidate.cpf,
            phone: candidate.phone,
            address: candidate.address,
            community_id: candidate.community_id,
        };
        self.inhabitants.insert(inhabitant.clone()).await?;

        info!(inhabitant_id = %inhabitant.id, "Inhabitant created");
        Ok(inhabitant)
    }

    /// List all inhabitants, each with its community's display name.
    /// Dangling references render as [`UNKNOWN_COMMUNITY`].
    pub async fn list_inhabitants(&self) -> DomainResult<Vec<InhabitantWithCommunity>> {
        let inhabitants = self.inhabitants.list().await?;

        let mut rows = Vec::with_capacity(inhabitants.len());
        for inhabitant in inhabitants {
            let community_name = self
                .communities
                .find_by_id(&inhabitant.community_id)
                .await?
                .map(|c| c.name)
                .unwrap_or_else(|| UNKNOWN_COMMUNITY.to_string());
            rows.push(InhabitantWithCommunity {
                inhabitant,
                community_name,
            });
        }
        Ok(rows)
    }

    /// Lookup by CPF; the key is sanitized before matching, so formatted
    /// and bare CPFs address the same record.
    pub async fn get_by_cpf(&self, cpf: &str) -> DomainResult<Inhabitant> {
        self.inhabitants
            .find_by_cpf(&sanitize_cpf(cpf))
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Inhabitant",
            })
    }

    pub async fn update_inhabitant(
        &self,
        id: &str,
        input: CreateInhabitantInput,
    ) -> DomainResult<Inhabitant> {
        let Some(existing) = self.inhabitants.find_by_id(id).await? else {
            return Err(DomainError::NotFound {
                entity: "Inhabitant",
            });
        };

        let candidate = self.build_candidate(input)?;
        self.check_references(&candidate, Some(&existing.id)).await?;

        let inhabitant = Inhabitant {
            id: existing.id,
            name: candidate.name,
            cpf: candidate.cpf,
            phone: candidate.phone,
            address: candidate.address,
            community_id: candidate.community_id,
        };
        self.inhabitants.update(&inhabitant).await?;

        Ok(inhabitant)
    }

    pub async fn delete_inhabitant(&self, id: &str) -> DomainResult<()> {
        let Some(inhabitant) = self.inhabitants.find_by_id(id).await? else {
            return Err(DomainError::NotFound {
                entity: "Inhabitant",
            });
        };

        self.inhabitants.delete(&inhabitant.id).await?;
        info!(inhabitant_id = %inhabitant.id, "Inhabitant deleted");
        Ok(())
    }

    // ── Orchestration steps ─────────────────────────────────────

    fn build_candidate(&self, input: CreateInhabitantInput) -> DomainResult<NewInhabitant> {
        let name = input.name.unwrap_or_default();
        let cpf = sanitize_cpf(&input.cpf.unwrap_or_default());
        let street = input.street.unwrap_or_default();
        let number = input.number.unwrap_or_default();
        let community_id = input.community_id.unwrap_or_default();

        if name.is_empty()
            || cpf.is_empty()
            || street.is_empty()
            || number.is_empty()
            || community_id.is_empty()
        {
            return Err(DomainError::Precondition(
                "Name, CPF, address and community are required".into(),
            ));
        }

        let candidate = NewInhabitant {
            name,
            cpf,
            phone: input.phone.unwrap_or_default(),
            address: Address { street, number },
            community_id,
        };
        if let Err(errors) = candidate.validate() {
            return Err(DomainError::Validation(collect_violations(&errors)));
        }
        Ok(candidate)
    }

    /// Community must exist; the CPF must not belong to a different record.
    async fn check_references(
        &self,
        candidate: &NewInhabitant,
        own_id: Option<&str>,
    ) -> DomainResult<()> {
        if self
            .communities
            .find_by_id(&candidate.community_id)
            .await?
            .is_none()
        {
            return Err(DomainError::ReferenceNotFound {
                entity: "Community",
            });
        }

        if let Some(holder) = self.inhabitants.find_by_cpf(&candidate.cpf).await? {
            if own_id != Some(holder.id.as_str()) {
                return Err(DomainError::Duplicate("CPF already in use".into()));
            }
        }
        Ok(())
    }
}
