//! Repository implementations for Template Vault entities.

pub mod domain;
pub mod template;

pub use domain::DomainRepository;
pub use template::TemplateRepository;
