//! Domain CRUD and tree assembly.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use vault_core::error::AppError;
use vault_core::result::AppResult;
use vault_database::repositories::domain::DomainRepository;
use vault_entity::domain::{CreateDomain, Domain, DomainNode, UpdateDomain, build_forest};

use crate::cache::ListingCache;

/// Manages domain CRUD and the hierarchical read view.
#[derive(Debug, Clone)]
pub struct DomainService {
    /// Domain repository.
    domain_repo: Arc<DomainRepository>,
    /// Listing cache, invalidated on domain writes.
    listing_cache: ListingCache,
}

impl DomainService {
    /// Creates a new domain service.
    pub fn new(domain_repo: Arc<DomainRepository>, listing_cache: ListingCache) -> Self {
        Self {
            domain_repo,
            listing_cache,
        }
    }

    /// Returns every domain as a forest of root nodes with nested
    /// children.
    pub async fn list_tree(&self) -> AppResult<Vec<DomainNode>> {
        let rows = self.domain_repo.find_all().await?;
        Ok(build_forest(rows))
    }

    /// Creates a new domain.
    pub async fn create_domain(&self, data: CreateDomain) -> AppResult<Domain> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Domain name cannot be empty"));
        }

        let domain = self.domain_repo.create(&data).await?;

        // A new domain can change how a cached listing's name resolves
        // (e.g. by making the name ambiguous).
        self.listing_cache.invalidate_all();

        info!(domain_id = %domain.id, name = %domain.name, "Domain created");
        Ok(domain)
    }

    /// Updates a domain in place. A domain may not reference itself as
    /// parent.
    pub async fn update_domain(&self, id: Uuid, data: UpdateDomain) -> AppResult<Domain> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Domain name cannot be empty"));
        }
        if data.parent_id == Some(id) {
            return Err(AppError::validation("A domain cannot be its own parent"));
        }

        let domain = self.domain_repo.update(id, &data).await?;

        // A rename changes the listing resolution key.
        self.listing_cache.invalidate_all();

        info!(domain_id = %domain.id, name = %domain.name, "Domain updated");
        Ok(domain)
    }

    /// Deletes a domain. Child domains and templates are governed by the
    /// schema's referential rules.
    pub async fn delete_domain(&self, id: Uuid) -> AppResult<()> {
        let deleted = self.domain_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Domain {id} not found")));
        }

        self.listing_cache.invalidate_all();

        info!(domain_id = %id, "Domain deleted");
        Ok(())
    }
}
