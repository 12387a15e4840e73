//! Route definitions for the Template Vault HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use vault_core::config::app::CorsConfig;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(domain_routes())
        .merge(template_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Domain CRUD and tree.
fn domain_routes() -> Router<AppState> {
    Router::new()
        .route("/domains", get(handlers::domain::list_domains))
        .route("/domains", post(handlers::domain::create_domain))
        .route("/domains/{id}", put(handlers::domain::update_domain))
        .route("/domains/{id}", delete(handlers::domain::delete_domain))
}

/// Template CRUD scoped by domain name.
fn template_routes() -> Router<AppState> {
    Router::new()
        .route("/templates", get(handlers::template::list_templates))
        .route("/templates", post(handlers::template::create_template))
        .route("/templates/{id}", get(handlers::template::get_template))
        .route("/templates/{id}", put(handlers::template::update_template))
        .route(
            "/templates/{id}",
            axum::routing::patch(handlers::template::patch_template),
        )
        .route(
            "/templates/{id}",
            delete(handlers::template::delete_template),
        )
}

/// Health check endpoints.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    use http::Method;
    use tower_http::cors::Any;

    let mut cors = CorsLayer::new();

    if config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors
}
