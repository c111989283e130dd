//! Appointment handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use tourhub_core::error::AppError;

use crate::dto::request::{CreateAppointmentDto, UpdateAppointmentStatusDto};
use crate::dto::validate_dto;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/appointments
pub async fn create_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateAppointmentDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate_dto(&req)?;
    let appointment = state
        .appointment_service
        .create(&auth.ctx, req.doctor_id, req.scheduled_at, &req.reason)
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": appointment }),
    ))
}

/// GET /api/appointments
pub async fn list_appointments(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = state
        .appointment_service
        .list_for(&auth.ctx, &params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/appointments/{id}
pub async fn get_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let appointment = state.appointment_service.get(&auth.ctx, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": appointment }),
    ))
}

/// PUT /api/appointments/{id}/status
pub async fn update_appointment_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAppointmentStatusDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    let appointment = state
        .appointment_service
        .update_status(&auth.ctx, id, req.status)
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": appointment }),
    ))
}
