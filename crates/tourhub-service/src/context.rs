//! Request context carrying the caller identity for the current request.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use tourhub_auth::access::Actor;
use tourhub_core::error::AppError;

/// Context for the current request.
///
/// Built once per request by the HTTP layer — from validated JWT claims
/// for authenticated calls, or as `anonymous()` for public ones — and
/// passed into every service method so each authorization decision sees
/// the same caller identity. No service reads ambient auth state.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The caller identity evaluated by the access rules.
    pub actor: Actor,
    /// The login session behind the credential, if authenticated.
    pub session_id: Option<Uuid>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Context for an authenticated caller.
    pub fn authenticated(actor: Actor, session_id: Uuid) -> Self {
        Self {
            actor,
            session_id: Some(session_id),
            request_time: Utc::now(),
        }
    }

    /// Context for an unauthenticated caller.
    pub fn anonymous() -> Self {
        Self {
            actor: Actor::Anonymous,
            session_id: None,
            request_time: Utc::now(),
        }
    }

    /// The caller's account id, or `Unauthorized` for anonymous callers.
    pub fn require_account(&self) -> Result<Uuid, AppError> {
        self.actor
            .id()
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}
