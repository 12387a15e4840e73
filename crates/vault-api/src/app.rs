//! Application builder — wires repositories, services, and state into a
//! running Axum server.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use vault_core::config::AppConfig;
use vault_core::error::AppError;
use vault_core::result::AppResult;
use vault_database::repositories::domain::DomainRepository;
use vault_database::repositories::template::TemplateRepository;
use vault_service::cache::ListingCache;
use vault_service::domain::DomainService;
use vault_service::template::TemplateService;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the application state and router from a configuration and an
/// already-connected pool.
pub fn build_app(config: AppConfig, db_pool: PgPool) -> Router {
    let state = build_state(config, db_pool);
    build_router(state)
}

/// Wires repositories and services into an [`AppState`].
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    let domain_repo = Arc::new(DomainRepository::new(db_pool.clone()));
    let template_repo = Arc::new(TemplateRepository::new(db_pool.clone()));

    let listing_cache = ListingCache::new(&config.cache);

    let domain_service = Arc::new(DomainService::new(
        Arc::clone(&domain_repo),
        listing_cache.clone(),
    ));
    let template_service = Arc::new(TemplateService::new(
        Arc::clone(&template_repo),
        Arc::clone(&domain_repo),
        listing_cache,
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        domain_repo,
        template_repo,
        domain_service,
        template_service,
    }
}

/// Runs the Template Vault server with the given configuration and pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> AppResult<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app = build_app(config, db_pool);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Template Vault listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Template Vault shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
