//! Template entities.

pub mod link;
pub mod model;

pub use link::ReferenceLink;
pub use model::{CreateTemplate, PatchTemplate, Template, TemplateWithDomain, UpdateTemplate};
