//! # vault-database
//!
//! PostgreSQL connection management, embedded migrations, and concrete
//! repository implementations for Template Vault.

pub mod connection;
pub mod migration;
pub mod repositories;
