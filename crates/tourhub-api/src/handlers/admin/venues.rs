//! Admin venue moderation handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use tourhub_core::error::AppError;
use tourhub_service::listing::filter_and_sort;

use crate::dto::request::{RejectDto, SetActiveDto, SetFeaturedDto};
use crate::extractors::{AuthUser, ListParams};
use crate::state::AppState;

/// GET /api/admin/venues
pub async fn list_venues(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ListParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let page = state
        .venue_service
        .list_moderable(&auth.ctx, &params.scope(), &params.page_request())
        .await?;

    let refined = filter_and_sort(&page.items, params.search_term(), params.sort_key());
    let result = tourhub_core::types::pagination::PageResponse {
        items: refined,
        ..page
    };

    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// PUT /api/admin/venues/{id}/approve
pub async fn approve_venue(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let venue = state.venue_moderation.approve(&auth.ctx, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": venue })))
}

/// PUT /api/admin/venues/{id}/reject
pub async fn reject_venue(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<RejectDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    let venue = state
        .venue_moderation
        .reject(&auth.ctx, id, &req.reason)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": venue })))
}

/// PUT /api/admin/venues/{id}/feature
pub async fn feature_venue(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<SetFeaturedDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    let venue = state
        .venue_moderation
        .set_featured(&auth.ctx, id, req.featured)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": venue })))
}

/// PUT /api/admin/venues/{id}/active
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
