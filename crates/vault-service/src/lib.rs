//! # vault-service
//!
//! Business logic service layer for Template Vault. Each service
//! orchestrates repositories and the listing cache to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod cache;
pub mod domain;
pub mod template;

pub use cache::ListingCache;
pub use domain::DomainService;
pub use template::TemplateService;
