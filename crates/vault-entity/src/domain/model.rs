//! Domain entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A category used to group templates, possibly nested under a parent.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Domain {
    /// Unique domain identifier.
    pub id: Uuid,
    /// Display name. Also the external reference key templates resolve
    /// against; uniqueness is not enforced by the schema.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Parent domain ID (None for root domains).
    pub parent_id: Option<Uuid>,
    /// When the domain was created.
    pub created_at: DateTime<Utc>,
}

impl Domain {
    /// Check if this is a root domain (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to create a new domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDomain {
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Parent domain (None for root).
    pub parent_id: Option<Uuid>,
}

/// In-place update payload for a domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDomain {
    /// New display name.
    pub name: String,
    /// New description (None clears it).
    pub description: Option<String>,
    /// New parent (None moves the domain to the root level).
    pub parent_id: Option<Uuid>,
}

/// The domain projection joined onto templates returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DomainSummary {
    /// Domain ID.
    pub id: Uuid,
    /// Domain name.
    pub name: String,
    /// Domain description.
    pub description: Option<String>,
}

impl From<Domain> for DomainSummary {
    fn from(domain: Domain) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            description: domain.description,
        }
    }
}
