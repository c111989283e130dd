//! Authentication extractors — pull the JWT from the Authorization
//! header, validate it and its session, and build the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use tourhub_auth::access::Actor;
use tourhub_auth::jwt::Claims;
use tourhub_core::error::AppError;
use tourhub_service::context::RequestContext;

use crate::state::AppState;

/// Extracted authenticated caller, required.
///
/// Rejects with `Unauthorized` when the header is missing, the token is
/// invalid or expired, or the session behind it is gone.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The request context for service calls.
    pub ctx: RequestContext,
    /// The validated claims (needed by logout).
    pub claims: Claims,
}

/// Extracted caller for public endpoints: authenticated when a valid
/// token is presented, anonymous otherwise. Never rejects.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub RequestContext);

async fn authenticate(parts: &mut Parts, state: &AppState) -> Result<AuthUser, AppError> {
    let auth_header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

    let claims = state.jwt_decoder.decode_access_token(token).await?;

    // The session outlives nothing: revoked or expired means rejected.
    state
        .session_manager
        .validate_session(claims.session_id())
        .await?;

    let actor = Actor::from_claims(&claims);
    let ctx = RequestContext::authenticated(actor, claims.session_id());

    Ok(AuthUser { ctx, claims })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(parts, state).await
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if parts.headers.get("authorization").is_none() {
            return Ok(MaybeAuthUser(RequestContext::anonymous()));
        }
        match authenticate(parts, state).await {
            Ok(auth) => Ok(MaybeAuthUser(auth.ctx)),
            // A bad credential on a public endpoint degrades to anonymous
            // rather than failing the request.
            Err(_) => Ok(MaybeAuthUser(RequestContext::anonymous())),
        }
    }
}
