//! Public and host-facing venue handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use tourhub_core::error::AppError;
use tourhub_entity::venue::UpdateVenue;
use tourhub_service::venue::CreateVenueRequest;

use crate::dto::request::{CreateVenueDto, SetActiveDto, UpdateVenueDto};
use crate::dto::validate_dto;
use crate::extractors::{AuthUser, ListParams, MaybeAuthUser};
use crate::state::AppState;

/// GET /api/venues (public catalog)
pub async fn list_venues(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = state
        .venue_service
        .list_public(&params.scope(), &params.page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/venues/mine (host dashboard, any moderation state)
pub async fn list_my_venues(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ListParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = state
        .venue_service
        .list_moderable(&auth.ctx, &params.scope(), &params.page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/venues/{id}
pub async fn get_venue(
    State(state): State<AppState>,
    MaybeAuthUser(ctx): MaybeAuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let venue = state.venue_service.get(&ctx, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": venue })))
}

/// POST /api/venues
pub async fn create_venue(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateVenueDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate_dto(&req)?;
    let venue = state
        .venue_service
        .create(
            &auth.ctx,
            CreateVenueRequest {
                name: req.name,
                description: req.description,
                category: req.category,
                city: req.city,
                address: req.address,
                price_range: req.price_range,
            },
        )
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": venue })))
}

/// PUT /api/venues/{id}
pub async fn update_venue(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateVenueDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate_dto(&req)?;
    let venue = state
        .venue_service
        .update(
            &auth.ctx,
            id,
            UpdateVenue {
                name: req.name,
                description: req.description,
                category: req.category,
                city: req.city,
                address: req.address,
                price_range: req.price_range,
            },
        )
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": venue })))
}

/// PUT /api/venues/{id}/active
pub async fn set_venue_active(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<SetActiveDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    let venue = state
        .venue_moderation
        .set_active(&auth.ctx, id, req.is_active)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": venue })))
}

/// DELETE /api/venues/{id} (host-side hard delete)
pub async fn delete_venue(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.venue_service.delete(&auth.ctx, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Venue deleted" } }),
    ))
}
