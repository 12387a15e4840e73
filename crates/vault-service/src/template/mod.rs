//! Template management services.

pub mod service;

pub use service::{CreateTemplateRequest, TemplateService, UpdateTemplateRequest};
