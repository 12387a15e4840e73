//! # vault-api
//!
//! HTTP API layer for Template Vault built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, compression, request
//! tracing), DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
