//! Domain CRUD and tree handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use vault_core::error::AppError;
use vault_entity::domain::{CreateDomain, Domain, DomainNode, UpdateDomain};

use crate::dto::request::{CreateDomainRequest, UpdateDomainRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/domains
pub async fn list_domains(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<DomainNode>>>, ApiError> {
    let forest = state.domain_service.list_tree().await?;
    Ok(Json(ApiResponse::ok(forest)))
}

/// POST /api/domains
pub async fn create_domain(
    State(state): State<AppState>,
    Json(req): Json<CreateDomainRequest>,
) -> Result<Json<ApiResponse<Domain>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let domain = state
        .domain_service
        .create_domain(CreateDomain {
            name: req.name,
            description: req.description,
            parent_id: req.parent_id,
        })
        .await?;

    Ok(Json(ApiResponse::ok(domain)))
}

/// PUT /api/domains/{id}
pub async fn update_domain(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDomainRequest>,
) -> Result<Json<ApiResponse<Domain>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let domain = state
        .domain_service
        .update_domain(
            id,
            UpdateDomain {
                name: req.name,
                description: req.description,
                parent_id: req.parent_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(domain)))
}

/// DELETE /api/domains/{id}
pub async fn delete_domain(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.domain_service.delete_domain(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Domain deleted".to_string(),
    })))
}
