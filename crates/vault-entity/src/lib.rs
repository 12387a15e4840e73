//! # vault-entity
//!
//! Entity models for Template Vault. Every struct in this crate represents
//! a database table row, a write payload, or a derived view type. All
//! entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! database rows additionally derive `sqlx::FromRow`.

pub mod domain;
pub mod template;
