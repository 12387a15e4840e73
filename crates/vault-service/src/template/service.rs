//! Template CRUD scoped by domain name.
//!
//! Callers address domains by human-readable name; the name is resolved
//! to a typed id exactly once here, and only the id flows into the
//! repository layer.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use vault_core::error::AppError;
use vault_core::result::AppResult;
use vault_database::repositories::domain::DomainRepository;
use vault_database::repositories::template::TemplateRepository;
use vault_entity::domain::{Domain, DomainSummary};
use vault_entity::template::{
    CreateTemplate, PatchTemplate, ReferenceLink, Template, TemplateWithDomain, UpdateTemplate,
};

use crate::cache::ListingCache;

/// Request to create a new template. The domain is addressed by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTemplateRequest {
    /// Template name.
    pub name: String,
    /// Template body.
    pub content: String,
    /// Name of the owning domain.
    pub domain_name: String,
    /// Reference links to store.
    pub reference_links: Option<Vec<ReferenceLink>>,
    /// Favorite flag; only written when supplied.
    pub is_favorite: Option<bool>,
}

/// Request to fully update a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTemplateRequest {
    /// New name.
    pub name: String,
    /// New body.
    pub content: String,
    /// New reference links (None clears them).
    pub reference_links: Option<Vec<ReferenceLink>>,
    /// Favorite flag; only written when supplied.
    pub is_favorite: Option<bool>,
}

/// Manages template CRUD and the per-domain listing view.
#[derive(Debug, Clone)]
pub struct TemplateService {
    /// Template repository.
    template_repo: Arc<TemplateRepository>,
    /// Domain repository, used only for name resolution and the joined
    /// summary.
    domain_repo: Arc<DomainRepository>,
    /// Listing cache, invalidated on every template write.
    listing_cache: ListingCache,
}

impl TemplateService {
    /// Creates a new template service.
    pub fn new(
        template_repo: Arc<TemplateRepository>,
        domain_repo: Arc<DomainRepository>,
        listing_cache: ListingCache,
    ) -> Self {
        Self {
            template_repo,
            domain_repo,
            listing_cache,
        }
    }

    /// Resolve a domain name to its row, surfacing NotFound verbatim.
    async fn resolve_domain(&self, name: &str) -> AppResult<Domain> {
        self.domain_repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Domain '{name}' not found")))
    }

    /// Lists all templates for a domain, newest first, each joined with
    /// the domain's summary.
    pub async fn list_by_domain(&self, domain_name: &str) -> AppResult<Vec<TemplateWithDomain>> {
        if let Some(cached) = self.listing_cache.get(domain_name).await {
            return Ok((*cached).clone());
        }

        let domain = self.resolve_domain(domain_name).await?;
        let summary = DomainSummary::from(domain.clone());

        let templates = self.template_repo.find_by_domain(domain.id).await?;
        let listing: Vec<TemplateWithDomain> = templates
            .into_iter()
            .map(|template| TemplateWithDomain {
                template,
                domain: summary.clone(),
            })
            .collect();

        self.listing_cache
            .insert(domain_name, Arc::new(listing.clone()))
            .await;
        Ok(listing)
    }

    /// Fetches a single template joined with its domain.
    pub async fn get_template(&self, id: Uuid) -> AppResult<TemplateWithDomain> {
        let template = self
            .template_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Template {id} not found")))?;

        self.with_domain(template).await
    }

    /// Creates a template under the named domain.
    pub async fn create_template(
        &self,
        req: CreateTemplateRequest,
    ) -> AppResult<TemplateWithDomain> {
        let domain = self.resolve_domain(&req.domain_name).await?;

        let template = self
            .template_repo
            .create(&CreateTemplate {
                name: req.name,
                content: req.content,
                domain_id: domain.id,
                reference_links: req.reference_links,
                is_favorite: req.is_favorite,
            })
            .await?;

        self.listing_cache.invalidate_all();

        info!(template_id = %template.id, domain = %domain.name, "Template created");
        Ok(TemplateWithDomain {
            template,
            domain: DomainSummary::from(domain),
        })
    }

    /// Fully updates a template. `updated_at` is refreshed on every call,
    /// whether or not any visible field changed.
    pub async fn update_template(
        &self,
        id: Uuid,
        req: UpdateTemplateRequest,
    ) -> AppResult<TemplateWithDomain> {
        let template = self
            .template_repo
            .update(
                id,
                &UpdateTemplate {
                    name: req.name,
                    content: req.content,
                    reference_links: req.reference_links,
                    is_favorite: req.is_favorite,
                },
                Utc::now(),
            )
            .await?;

        self.listing_cache.invalidate_all();

        info!(template_id = %id, "Template updated");
        self.with_domain(template).await
    }

    /// Applies a partial update (favorite toggle and/or link edits).
    pub async fn patch_template(
        &self,
        id: Uuid,
        patch: PatchTemplate,
    ) -> AppResult<TemplateWithDomain> {
        if patch.is_empty() {
            return Err(AppError::validation("No fields to update"));
        }

        let template = self.template_repo.patch(id, &patch).await?;

        self.listing_cache.invalidate_all();

        info!(template_id = %id, "Template patched");
        self.with_domain(template).await
    }

    /// Deletes a template by id.
    pub async fn delete_template(&self, id: Uuid) -> AppResult<()> {
        let deleted = self.template_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Template {id} not found")));
        }

        self.listing_cache.invalidate_all();

        info!(template_id = %id, "Template deleted");
        Ok(())
    }

    /// Join a template with its domain summary.
    async fn with_domain(&self, template: Template) -> AppResult<TemplateWithDomain> {
        let domain = self
            .domain_repo
            .find_by_id(template.domain_id)
            .await?
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Domain {} missing for template {}",
                    template.domain_id, template.id
                ))
            })?;

        Ok(TemplateWithDomain {
            template,
            domain: DomainSummary::from(domain),
        })
    }
}
