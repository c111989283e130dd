//! Session lifecycle manager.
//!
//! A session is created at login, validated on every authenticated
//! request, and destroyed at logout. Tokens outlive nothing: once the
//! session is revoked or expired, every token carrying its id is dead.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;
use uuid::Uuid;

use tourhub_core::config::auth::AuthConfig;
use tourhub_core::error::AppError;
use tourhub_database::repositories::session::SessionRepository;
use tourhub_entity::session::Session;

/// Manages the server-side session lifecycle.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// Session persistence.
    session_repo: Arc<SessionRepository>,
    /// Session lifetime in hours.
    session_ttl_hours: i64,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(session_repo: Arc<SessionRepository>, config: &AuthConfig) -> Self {
        Self {
            session_repo,
            session_ttl_hours: config.session_ttl_hours as i64,
        }
    }

    /// Creates a session for a freshly authenticated user.
    pub async fn create_session(&self, user_id: Uuid) -> Result<Session, AppError> {
        let expires_at = Utc::now() + Duration::hours(self.session_ttl_hours);
        let session = self.session_repo.create(user_id, expires_at).await?;

        info!(user_id = %user_id, session_id = %session.id, "Session created");
        Ok(session)
    }

    /// Validates that a session exists, is unrevoked, and is unexpired.
    pub async fn validate_session(&self, session_id: Uuid) -> Result<Session, AppError> {
        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Session not found"))?;

        if !session.is_valid() {
            return Err(AppError::unauthorized("Session is revoked or expired"));
        }

        Ok(session)
    }

    /// Revokes a session (logout). Idempotent.
    pub async fn revoke_session(&self, session_id: Uuid) -> Result<(), AppError> {
        self.session_repo.revoke(session_id).await?;
        info!(session_id = %session_id, "Session revoked");
        Ok(())
    }
}
