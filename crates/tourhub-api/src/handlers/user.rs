//! Self-service account handlers.

use axum::Json;
use axum::extract::State;

use tourhub_core::error::AppError;
use tourhub_entity::user::UpdateProfile;

use crate::dto::request::{ChangePasswordDto, UpdateProfileDto};
use crate::dto::validate_dto;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// PUT /api/users/me
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate_dto(&req)?;
    let user = state
        .auth_service
        .update_profile(
            &auth.ctx,
            UpdateProfile {
                first_name: req.first_name,
                last_name: req.last_name,
                phone: req.phone,
            },
        )
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": user })))
}

/// PUT /api/users/me/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ChangePasswordDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate_dto(&req)?;
    state
        .auth_service
        .change_password(&auth.ctx, &req.current_password, &req.new_password)
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Password changed" } }),
    ))
}
