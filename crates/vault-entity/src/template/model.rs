//! Template entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::DomainSummary;

use super::link::ReferenceLink;

/// A stored reusable text block belonging to exactly one domain.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Template {
    /// Unique template identifier.
    pub id: Uuid,
    /// Template name.
    pub name: String,
    /// Template body.
    pub content: String,
    /// The domain this template belongs to.
    pub domain_id: Uuid,
    /// Ordered reference links, if any.
    pub reference_links: Option<Json<Vec<ReferenceLink>>>,
    /// Favorite flag. The column may be absent from older schemas, so
    /// reads fall back to the default instead of failing.
    #[sqlx(default)]
    pub is_favorite: Option<bool>,
    /// When the template was created.
    pub created_at: DateTime<Utc>,
    /// When the template was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new template. `domain_id` is already
/// resolved from the caller-supplied domain name at this point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTemplate {
    /// Template name.
    pub name: String,
    /// Template body.
    pub content: String,
    /// Owning domain.
    pub domain_id: Uuid,
    /// Reference links to store.
    pub reference_links: Option<Vec<ReferenceLink>>,
    /// Favorite flag; only written when supplied.
    pub is_favorite: Option<bool>,
}

/// Full update payload for a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTemplate {
    /// New name.
    pub name: String,
    /// New body.
    pub content: String,
    /// New reference links (None clears them).
    pub reference_links: Option<Vec<ReferenceLink>>,
    /// Favorite flag; only written when supplied.
    pub is_favorite: Option<bool>,
}

/// Partial update payload: favorite toggle and/or link edits.
///
/// `reference_links` is doubly optional: an absent field leaves the stored
/// links untouched, while an explicit `null` clears them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchTemplate {
    /// Replacement reference links. `None` = leave unchanged,
    /// `Some(None)` = clear, `Some(Some(links))` = replace.
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub reference_links: Option<Option<Vec<ReferenceLink>>>,
    /// New favorite flag, when provided.
    pub is_favorite: Option<bool>,
}

/// Deserialize a present-but-possibly-null field as `Some(inner)`, so an
/// explicit JSON `null` becomes `Some(None)` instead of `None`.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

impl PatchTemplate {
    /// Whether the patch carries any field at all.
    pub fn is_empty(&self) -> bool {
        self.reference_links.is_none() && self.is_favorite.is_none()
    }
}

/// A template joined with its domain projection for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateWithDomain {
    /// The template row.
    #[serde(flatten)]
    pub template: Template,
    /// The owning domain's summary.
    pub domain: DomainSummary,
}
