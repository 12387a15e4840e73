//! Domain repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use vault_core::error::{AppError, ErrorKind};
use vault_core::result::AppResult;
use vault_entity::domain::{CreateDomain, Domain, UpdateDomain};

/// Repository for domain CRUD and name resolution.
#[derive(Debug, Clone)]
pub struct DomainRepository {
    pool: PgPool,
}

impl DomainRepository {
    /// Create a new domain repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every domain, ordered by name.
    pub async fn find_all(&self) -> AppResult<Vec<Domain>> {
        sqlx::query_as::<_, Domain>("SELECT * FROM domains ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list domains", e))
    }

    /// Find a domain by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Domain>> {
        sqlx::query_as::<_, Domain>("SELECT * FROM domains WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find domain", e))
    }

    /// Resolve a domain by exact name match.
    ///
    /// `name` is not guaranteed unique by the schema; when more than one
    /// domain matches, resolution fails with a conflict rather than
    /// picking a row arbitrarily.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Domain>> {
        let mut matches = sqlx::query_as::<_, Domain>("SELECT * FROM domains WHERE name = $1")
            .bind(name)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to resolve domain name", e)
            })?;

        if matches.len() > 1 {
            return Err(AppError::conflict(format!(
                "Domain name '{name}' is ambiguous ({} rows match)",
                matches.len()
            )));
        }
        Ok(matches.pop())
    }

    /// Create a new domain.
    pub async fn create(&self, data: &CreateDomain) -> AppResult<Domain> {
        sqlx::query_as::<_, Domain>(
            "INSERT INTO domains (name, description, parent_id) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create domain", e))
    }

    /// Update a domain in place.
    pub async fn update(&self, id: Uuid, data: &UpdateDomain) -> AppResult<Domain> {
        sqlx::query_as::<_, Domain>(
            "UPDATE domains SET name = $2, description = $3, parent_id = $4 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.parent_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update domain", e))?
        .ok_or_else(|| AppError::not_found(format!("Domain {id} not found")))
    }

    /// Delete a domain. Children and templates are governed by the
    /// schema's referential rules, not by this layer.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM domains WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete domain", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
