//! Template CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use vault_core::error::AppError;
use vault_entity::template::{PatchTemplate, TemplateWithDomain};
use vault_service::template::{
    CreateTemplateRequest as SvcCreate, UpdateTemplateRequest as SvcUpdate,
};

use crate::dto::request::{
    CreateTemplateRequest, ListTemplatesQuery, PatchTemplateRequest, UpdateTemplateRequest,
};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/templates?domain=NAME
pub async fn list_templates(
    State(state): State<AppState>,
    Query(query): Query<ListTemplatesQuery>,
) -> Result<Json<ApiResponse<Vec<TemplateWithDomain>>>, ApiError> {
    if query.domain.is_empty() {
        return Err(AppError::validation("domain query parameter is required").into());
    }

    let listing = state.template_service.list_by_domain(&query.domain).await?;
    Ok(Json(ApiResponse::ok(listing)))
}

/// GET /api/templates/{id}
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TemplateWithDomain>>, ApiError> {
    let template = state.template_service.get_template(id).await?;
    Ok(Json(ApiResponse::ok(template)))
}

/// POST /api/templates
pub async fn create_template(
    State(state): State<AppState>,
    Json(req): Json<CreateTemplateRequest>,
) -> Result<Json<ApiResponse<TemplateWithDomain>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let template = state
        .template_service
        .create_template(SvcCreate {
            name: req.name,
            content: req.content,
            domain_name: req.domain_name,
            reference_links: req.reference_links,
            is_favorite: req.is_favorite,
        })
        .await?;

    Ok(Json(ApiResponse::ok(template)))
}

/// PUT /api/templates/{id}
pub async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTemplateRequest>,
) -> Result<Json<ApiResponse<TemplateWithDomain>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let template = state
        .template_service
        .update_template(
            id,
            SvcUpdate {
                name: req.name,
                content: req.content,
                reference_links: req.reference_links,
                is_favorite: req.is_favorite,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(template)))
}

/// PATCH /api/templates/{id}
pub async fn patch_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<PatchTemplateRequest>,
) -> Result<Json<ApiResponse<TemplateWithDomain>>, ApiError> {
    let template = state
        .template_service
        .patch_template(
            id,
            PatchTemplate {
                reference_links: req.reference_links,
                is_favorite: req.is_favorite,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(template)))
}

/// DELETE /api/templates/{id}
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.template_service.delete_template(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Template deleted".to_string(),
    })))
}
