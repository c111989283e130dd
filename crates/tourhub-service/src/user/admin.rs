//! Admin account management: customer listing, status changes, and admin
//! provisioning.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use tourhub_auth::access;
use tourhub_auth::password::{PasswordHasher, PasswordValidator};
use tourhub_core::error::AppError;
use tourhub_core::result::AppResult;
use tourhub_core::types::pagination::{PageRequest, PageResponse};
use tourhub_core::types::sorting::SortKey;
use tourhub_database::repositories::user::UserRepository;
use tourhub_entity::user::{AdminPermission, CreateUser, Role, User, UserStatus};

use crate::context::RequestContext;
use crate::listing::{ListEntry, filter_and_sort};

/// Customer row shown on the admin dashboard.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CustomerSummary {
    /// Account id.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login email.
    pub email: String,
    /// Contact phone.
    pub phone: Option<String>,
    /// Account role.
    pub role: Role,
    /// Account status.
    pub status: UserStatus,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl From<User> for CustomerSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            role: user.role,
            status: user.status,
            created_at: user.created_at,
        }
    }
}

impl ListEntry for CustomerSummary {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
        ];
        if let Some(phone) = &self.phone {
            fields.push(phone.clone());
        }
        fields
    }

    fn sort_date(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn sort_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload for provisioning a new admin account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateAdminRequest {
    /// Login email.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Granted permission set.
    pub permissions: Vec<AdminPermission>,
}

/// Handles administrative account management.
#[derive(Clone)]
pub struct AdminUserService {
    /// User store.
    user_repo: Arc<UserRepository>,
    /// Password hashing.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
}

impl AdminUserService {
    /// Create a new admin user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
        }
    }

    /// List accounts of one role with free-text search and dashboard
    /// sorting applied to the fetched page.
    pub async fn list_accounts(
        &self,
        ctx: &RequestContext,
        role: Role,
        search: &str,
        sort: SortKey,
        page: &PageRequest,
    ) -> AppResult<PageResponse<CustomerSummary>> {
        access::require_permission(&ctx.actor, AdminPermission::ManageUsers)?;

        let fetched = self.user_repo.find_by_role(role, page).await?;
        let response = fetched.map(CustomerSummary::from);
        let refined = filter_and_sort(&response.items, search, sort);

        Ok(PageResponse {
            items: refined,
            ..response
        })
    }

    /// Fetch one account.
    pub async fn get_account(&self, ctx: &RequestContext, id: Uuid) -> AppResult<User> {
        access::require_permission(&ctx.actor, AdminPermission::ManageUsers)?;

        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Activate or deactivate an account.
    pub async fn change_status(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        status: UserStatus,
    ) -> AppResult<User> {
        access::require_permission(&ctx.actor, AdminPermission::ManageUsers)?;

        if ctx.actor.is_actor(id) {
            return Err(AppError::forbidden("Cannot change your own status"));
        }

        let user = self
            .user_repo
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(admin = ?ctx.actor.id(), target = %id, status = %status, "Account status changed");
        Ok(user)
    }

    /// Provision a new admin account with an explicit permission set.
    pub async fn create_admin(
        &self,
        ctx: &RequestContext,
        req: CreateAdminRequest,
    ) -> AppResult<User> {
        access::require_permission(&ctx.actor, AdminPermission::ManageAdmins)?;

        if self.user_repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("Email is already registered"));
        }

        self.validator.validate(&req.password)?;
        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                email: req.email,
                password_hash,
                first_name: req.first_name,
                last_name: req.last_name,
                phone: None,
                role: Role::Admin,
                admin_permissions: req.permissions,
            })
            .await?;

        info!(admin = ?ctx.actor.id(), new_admin = %user.id, "Admin account created");
        Ok(user)
    }

    /// Replace an admin's permission set.
    pub async fn update_permissions(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        permissions: Vec<AdminPermission>,
    ) -> AppResult<User> {
        access::require_permission(&ctx.actor, AdminPermission::ManageAdmins)?;

        if ctx.actor.is_actor(id) {
            return Err(AppError::forbidden("Cannot change your own permissions"));
        }

        let user = self
            .user_repo
            .update_admin_permissions(id, &permissions)
            .await?
            .ok_or_else(|| AppError::not_found("Admin not found"))?;

        info!(admin = ?ctx.actor.id(), target = %id, "Admin permissions updated");
        Ok(user)
    }
}
