//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use vault_core::config::AppConfig;
use vault_database::repositories::domain::DomainRepository;
use vault_database::repositories::template::TemplateRepository;
use vault_service::domain::DomainService;
use vault_service::template::TemplateService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Domain repository.
    pub domain_repo: Arc<DomainRepository>,
    /// Template repository.
    pub template_repo: Arc<TemplateRepository>,
    /// Domain service.
    pub domain_service: Arc<DomainService>,
    /// Template service.
    pub template_service: Arc<TemplateService>,
}
