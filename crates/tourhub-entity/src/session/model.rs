//! Server-side login session model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A server-side login session.
///
/// Created at login and revoked at logout; access tokens carry the session
/// id and are rejected once the session is revoked or expired.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// The logged-in user.
    pub user_id: Uuid,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
    /// Set when the session is revoked (logout or admin action).
    pub revoked_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Whether this session is still usable.
    pub fn is_valid(&self) -> bool {
        self.revoked_at.is_none() && Utc::now() < self.expires_at
    }
}
