//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::permission::AdminPermission;
use super::role::Role;
use super::status::UserStatus;

/// A registered account in the TourHub marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login email.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone number (optional).
    pub phone: Option<String>,
    /// Account role.
    pub role: Role,
    /// Account status.
    pub status: UserStatus,
    /// Admin permission set; empty and meaningless for non-admin roles.
    pub admin_permissions: Json<Vec<AdminPermission>>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check if this account has the admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Check if the user can log in right now.
    pub fn can_login(&self) -> bool {
        self.status.can_login()
    }
}

/// Data required to create a new user row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login email (unique).
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone (optional).
    pub phone: Option<String>,
    /// Assigned role.
    pub role: Role,
    /// Admin permission set (ignored unless the role is admin).
    pub admin_permissions: Vec<AdminPermission>,
}

/// Self-service profile update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New contact phone.
    pub phone: Option<String>,
}
