//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use vault_entity::template::ReferenceLink;

/// Create domain request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDomainRequest {
    /// Domain name.
    #[validate(length(min = 1, max = 255, message = "Domain name is required"))]
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Parent domain ID (None for a root domain).
    pub parent_id: Option<Uuid>,
}

/// Update domain request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateDomainRequest {
    /// New name.
    #[validate(length(min = 1, max = 255, message = "Domain name is required"))]
    pub name: String,
    /// New description (omit to clear).
    pub description: Option<String>,
    /// New parent (omit to move to root level).
    pub parent_id: Option<Uuid>,
}

/// Template listing query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTemplatesQuery {
    /// Domain name to list templates for.
    pub domain: String,
}

/// Create template request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTemplateRequest {
    /// Template name.
    #[validate(length(min = 1, max = 255, message = "Template name is required"))]
    pub name: String,
    /// Template body.
    #[validate(length(min = 1, message = "Template content is required"))]
    pub content: String,
    /// Name of the owning domain.
    #[validate(length(min = 1, message = "Domain name is required"))]
    pub domain_name: String,
    /// Reference links.
    pub reference_links: Option<Vec<ReferenceLink>>,
    /// Favorite flag; only written when supplied.
    pub is_favorite: Option<bool>,
}

/// Full template update request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTemplateRequest {
    /// New name.
    #[validate(length(min = 1, max = 255, message = "Template name is required"))]
    pub name: String,
    /// New body.
    #[validate(length(min = 1, message = "Template content is required"))]
    pub content: String,
    /// New reference links (omit to clear).
    pub reference_links: Option<Vec<ReferenceLink>>,
    /// Favorite flag; only written when supplied.
    pub is_favorite: Option<bool>,
}

/// Partial template update request body. At least one field must be set.
/// An explicit `"reference_links": null` clears the stored links; omitting
/// the field leaves them unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchTemplateRequest {
    /// Replacement reference links (doubly optional, see above).
    #[serde(
        default,
        deserialize_with = "vault_entity::template::model::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub reference_links: Option<Option<Vec<ReferenceLink>>>,
    /// New favorite flag.
    pub is_favorite: Option<bool>,
}
