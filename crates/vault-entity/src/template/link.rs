//! Reference links attached to templates.

use serde::{Deserialize, Serialize};

/// A titled URL attached to a template.
///
/// Stored as an ordered JSONB array on the template row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceLink {
    /// Link target.
    pub url: String,
    /// Display title.
    pub title: String,
}
