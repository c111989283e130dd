//! Authentication handlers.

use axum::Json;
use axum::extract::State;

use tourhub_core::error::AppError;
use tourhub_entity::user::Role;
use tourhub_service::auth::RegisterRequest;

use crate::dto::request::{LoginDto, RefreshDto, RegisterDto};
use crate::dto::validate_dto;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate_dto(&req)?;
    let user = state
        .auth_service
        .register(RegisterRequest {
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            phone: req.phone,
            role: req.role.unwrap_or(Role::User),
        })
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": user })))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate_dto(&req)?;
    let result = state.auth_service.login(&req.email, &req.password).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "data": {
            "tokens": result.tokens,
            "user": result.user,
        }
    })))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    let tokens = state.auth_service.refresh(&req.refresh_token).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": tokens })))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, AppError> {
    state.auth_service.logout(&auth.claims).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Logged out" } }),
    ))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, AppError> {
    let user = state.auth_service.current_user(&auth.ctx).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": user })))
}
