//! Authentication and session configuration.

use serde::{Deserialize, Serialize};

/// Authentication settings: JWT signing, token lifetimes, and password
/// strength requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret used to sign JWTs.
    pub jwt_secret: String,
    /// Access token lifetime in minutes.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
    /// Refresh token lifetime in hours.
    #[serde(default = "default_refresh_ttl")]
    pub jwt_refresh_ttl_hours: u64,
    /// Server-side session lifetime in hours.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_hours: u64,
    /// Minimum password length.
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
    /// Minimum zxcvbn strength score (0-4).
    #[serde(default = "default_min_password_score")]
    pub min_password_score: u8,
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    24
}

fn default_session_ttl() -> u64 {
    24
}

fn default_min_password_length() -> usize {
    8
}

fn default_min_password_score() -> u8 {
    2
}
