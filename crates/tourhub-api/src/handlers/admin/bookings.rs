//! Admin booking oversight handlers.

use axum::Json;
use axum::extract::{Query, State};

use tourhub_core::error::AppError;

use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = state
        .booking_service
        .list_all(&auth.ctx, &params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}
