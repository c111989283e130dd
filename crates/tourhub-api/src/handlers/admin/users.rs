//! Admin account management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use tourhub_core::error::AppError;
use tourhub_entity::user::Role;
use tourhub_service::user::CreateAdminRequest;

use crate::dto::request::{ChangeUserStatusDto, CreateAdminDto, UpdatePermissionsDto};
use crate::dto::validate_dto;
use crate::extractors::{AuthUser, ListParams};
use crate::state::AppState;

/// Role filter for the account listing.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RoleQuery {
    /// Account role to list; defaults to travelers.
    pub role: Option<Role>,
}

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(role_query): Query<RoleQuery>,
    Query(params): Query<ListParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = state
        .admin_user_service
        .list_accounts(
            &auth.ctx,
            role_query.role.unwrap_or(Role::User),
            params.search_term(),
            params.sort_key(),
            &params.page_request(),
        )
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let user = state.admin_user_service.get_account(&auth.ctx, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": user })))
}

/// PUT /api/admin/users/{id}/status
pub async fn change_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeUserStatusDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    let user = state
        .admin_user_service
        .change_status(&auth.ctx, id, req.status)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": user })))
}

/// POST /api/admin/admins
pub async fn create_admin(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateAdminDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    validate_dto(&req)?;
    let user = state
        .admin_user_service
        .create_admin(
            &auth.ctx,
            CreateAdminRequest {
                email: req.email,
                password: req.password,
                first_name: req.first_name,
                last_name: req.last_name,
                permissions: req.permissions,
            },
        )
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": user })))
}

/// PUT /api/admin/admins/{id}/permissions
pub async fn update_permissions(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePermissionsDto>,
) -> Result<Json<serde_json::Value>, AppError> {
    let user = state
        .admin_user_service
        .update_permissions(&auth.ctx, id, req.permissions)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": user })))
}
