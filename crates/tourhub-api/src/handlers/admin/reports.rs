//! Admin reporting handlers.

use axum::Json;
use axum::extract::State;

use tourhub_core::error::AppError;

use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/admin/reports/overview
pub async fn overview(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, AppError> {
    let report = state.report_service.overview(&auth.ctx).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": report })))
}
