//! Template repository implementation.
//!
//! Writes tolerate a backend schema that predates the `is_favorite`
//! column: an insert or update that fails with an error naming the column
//! is retried once with the column omitted.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use tracing::warn;
use uuid::Uuid;

use vault_core::error::{AppError, ErrorKind};
use vault_core::result::AppResult;
use vault_entity::template::{CreateTemplate, PatchTemplate, Template, UpdateTemplate};

/// Heuristic check for a missing `is_favorite` column.
///
/// The backend reports the failure as a plain database error, so the only
/// signal available is the error text naming the column.
fn is_favorite_schema_error(err: &sqlx::Error) -> bool {
    err.to_string().contains("is_favorite")
}

/// Repository for template CRUD scoped by domain.
#[derive(Debug, Clone)]
pub struct TemplateRepository {
    pool: PgPool,
}

impl TemplateRepository {
    /// Create a new template repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a template by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Template>> {
        sqlx::query_as::<_, Template>("SELECT * FROM templates WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find template", e))
    }

    /// List all templates in a domain, newest first. No pagination: the
    /// full set for the domain is returned every call.
    pub async fn find_by_domain(&self, domain_id: Uuid) -> AppResult<Vec<Template>> {
        sqlx::query_as::<_, Template>(
            "SELECT * FROM templates WHERE domain_id = $1 ORDER BY created_at DESC",
        )
        .bind(domain_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list templates", e))
    }

    /// Create a new template, retrying without `is_favorite` when the
    /// schema rejects the column.
    pub async fn create(&self, data: &CreateTemplate) -> AppResult<Template> {
        match self.insert(data, data.is_favorite).await {
            Err(e) if data.is_favorite.is_some() && is_favorite_schema_error(&e) => {
                warn!(error = %e, "is_favorite rejected by schema, retrying insert without it");
                self.insert(data, None)
                    .await
                    .map_err(|e| map_retry_error("Failed to create template", e))
            }
            Ok(template) => Ok(template),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Database,
                "Failed to create template",
                e,
            )),
        }
    }

    async fn insert(
        &self,
        data: &CreateTemplate,
        is_favorite: Option<bool>,
    ) -> Result<Template, sqlx::Error> {
        match is_favorite {
            Some(favorite) => {
                sqlx::query_as::<_, Template>(
                    "INSERT INTO templates (name, content, domain_id, reference_links, is_favorite) \
                     VALUES ($1, $2, $3, $4, $5) RETURNING *",
                )
                .bind(&data.name)
                .bind(&data.content)
                .bind(data.domain_id)
                .bind(data.reference_links.as_ref().map(Json))
                .bind(favorite)
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Template>(
                    "INSERT INTO templates (name, content, domain_id, reference_links) \
                     VALUES ($1, $2, $3, $4) RETURNING *",
                )
                .bind(&data.name)
                .bind(&data.content)
                .bind(data.domain_id)
                .bind(data.reference_links.as_ref().map(Json))
                .fetch_one(&self.pool)
                .await
            }
        }
    }

    /// Update a template in full. `updated_at` is always written from the
    /// supplied timestamp. Same retry policy as [`create`](Self::create).
    pub async fn update(
        &self,
        id: Uuid,
        data: &UpdateTemplate,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Template> {
        let result = match self.update_row(id, data, data.is_favorite, updated_at).await {
            Err(e) if data.is_favorite.is_some() && is_favorite_schema_error(&e) => {
                warn!(error = %e, "is_favorite rejected by schema, retrying update without it");
                self.update_row(id, data, None, updated_at)
                    .await
                    .map_err(|e| map_retry_error("Failed to update template", e))
            }
            Ok(row) => Ok(row),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Database,
                "Failed to update template",
                e,
            )),
        }?;

        result.ok_or_else(|| AppError::not_found(format!("Template {id} not found")))
    }

    async fn update_row(
        &self,
        id: Uuid,
        data: &UpdateTemplate,
        is_favorite: Option<bool>,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Template>, sqlx::Error> {
        match is_favorite {
            Some(favorite) => {
                sqlx::query_as::<_, Template>(
                    "UPDATE templates SET name = $2, content = $3, reference_links = $4, \
                     updated_at = $5, is_favorite = $6 WHERE id = $1 RETURNING *",
                )
                .bind(id)
                .bind(&data.name)
                .bind(&data.content)
                .bind(data.reference_links.as_ref().map(Json))
                .bind(updated_at)
                .bind(favorite)
                .fetch_optional(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Template>(
                    "UPDATE templates SET name = $2, content = $3, reference_links = $4, \
                     updated_at = $5 WHERE id = $1 RETURNING *",
                )
                .bind(id)
                .bind(&data.name)
                .bind(&data.content)
                .bind(data.reference_links.as_ref().map(Json))
                .bind(updated_at)
                .fetch_optional(&self.pool)
                .await
            }
        }
    }

    /// Apply a partial update (favorite toggle and/or link replacement).
    /// Fields absent from the patch are left unchanged.
    pub async fn patch(&self, id: Uuid, data: &PatchTemplate) -> AppResult<Template> {
        let result = match self.patch_row(id, data, data.is_favorite).await {
            Err(e) if data.is_favorite.is_some() && is_favorite_schema_error(&e) => {
                warn!(error = %e, "is_favorite rejected by schema, retrying patch without it");
                self.patch_row(id, data, None)
                    .await
                    .map_err(|e| map_retry_error("Failed to patch template", e))
            }
            Ok(row) => Ok(row),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Database,
                "Failed to patch template",
                e,
            )),
        }?;

        result.ok_or_else(|| AppError::not_found(format!("Template {id} not found")))
    }

    async fn patch_row(
        &self,
        id: Uuid,
        data: &PatchTemplate,
        is_favorite: Option<bool>,
    ) -> Result<Option<Template>, sqlx::Error> {
        // $2 distinguishes "field absent" from an explicit null: a patch
        // carrying `reference_links: null` clears the stored links.
        let links_present = data.reference_links.is_some();
        let links = data
            .reference_links
            .as_ref()
            .and_then(|l| l.as_ref())
            .map(Json);

        match is_favorite {
            Some(favorite) => {
                sqlx::query_as::<_, Template>(
                    "UPDATE templates SET \
                     reference_links = CASE WHEN $2 THEN $3 ELSE reference_links END, \
                     is_favorite = $4 WHERE id = $1 RETURNING *",
                )
                .bind(id)
                .bind(links_present)
                .bind(links)
                .bind(favorite)
                .fetch_optional(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Template>(
                    "UPDATE templates SET \
                     reference_links = CASE WHEN $2 THEN $3 ELSE reference_links END \
                     WHERE id = $1 RETURNING *",
                )
                .bind(id)
                .bind(links_present)
                .bind(links)
                .fetch_optional(&self.pool)
                .await
            }
        }
    }

    /// Delete a template by ID. No cascading cleanup is performed here.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM templates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete template", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

/// Classify the outcome of the single retry: a failure still naming
/// `is_favorite` means the schema and the write disagree beyond what the
/// fallback can paper over; anything else is an ordinary database error.
fn map_retry_error(context: &str, err: sqlx::Error) -> AppError {
    if is_favorite_schema_error(&err) {
        AppError::with_source(
            ErrorKind::SchemaMismatch,
            format!("{context}: is_favorite column unsupported by schema"),
            err,
        )
    } else {
        AppError::with_source(ErrorKind::Database, context.to_string(), err)
    }
}
