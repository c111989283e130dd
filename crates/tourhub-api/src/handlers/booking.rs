//! Booking handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use tourhub_core::error::AppError;

use crate::dto::request::CreateBookingDto;
use crate::dto::validate_dto;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateBookingDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate_dto(&req)?;
    let booking = state
        .booking_service
        .create(&auth.ctx, req.event_id, req.quantity)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": booking })))
}

/// GET /api/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = state
        .booking_service
        .list_own(&auth.ctx, &params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/bookings/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let booking = state.booking_service.get(&auth.ctx, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": booking })))
}

/// PUT /api/bookings/{id}/cancel
pub async fn cancel_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let booking = state.booking_service.cancel(&auth.ctx, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": booking })))
}
