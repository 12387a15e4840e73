//! # vault-core
//!
//! Core crate for Template Vault. Contains configuration schemas and the
//! unified error system shared by every other crate.
//!
//! This crate has **no** internal dependencies on other vault crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
