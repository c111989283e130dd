//! Public and organizer-facing event handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use tourhub_core::error::AppError;
use tourhub_entity::event::UpdateEvent;
use tourhub_service::event::CreateEventRequest;

use crate::dto::request::{CreateEventDto, SetActiveDto, UpdateEventDto};
use crate::dto::validate_dto;
use crate::extractors::{AuthUser, ListParams, MaybeAuthUser};
use crate::state::AppState;

/// GET /api/events (public catalog)
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = state
        .event_service
        .list_public(&params.scope(), &params.page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/events/mine (organizer dashboard, any moderation state)
pub async fn list_my_events(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ListParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = state
        .event_service
        .list_moderable(&auth.ctx, &params.scope(), &params.page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    MaybeAuthUser(ctx): MaybeAuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let event = state.event_service.get(&ctx, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": event })))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateEventDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate_dto(&req)?;
    let event = state
        .event_service
        .create(
            &auth.ctx,
            CreateEventRequest {
                title: req.title,
                description: req.description,
                category: req.category,
                city: req.city,
                venue_name: req.venue_name,
                start_at: req.start_at,
                end_at: req.end_at,
                price_cents: req.price_cents,
                capacity: req.capacity,
            },
        )
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": event })))
}

/// PUT /api/events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEventDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate_dto(&req)?;
    let event = state
        .event_service
        .update(
            &auth.ctx,
            id,
            UpdateEvent {
                title: req.title,
                description: req.description,
                category: req.category,
                city: req.city,
                venue_name: req.venue_name,
                start_at: req.start_at,
                end_at: req.end_at,
                price_cents: req.price_cents,
                capacity: req.capacity,
            },
        )
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": event })))
}

/// PUT /api/events/{id}/active
pub async fn set_event_active(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<SetActiveDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    let event = state
        .event_moderation
        .set_active(&auth.ctx, id, req.is_active)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": event })))
}

/// DELETE /api/events/{id} (organizer-side hard delete)
pub async fn delete_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.event_service.delete(&auth.ctx, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Event deleted" } }),
    ))
}
