//! Authentication flows: register, login, refresh, logout.

use std::sync::Arc;

use tracing::{info, warn};

use tourhub_auth::jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair};
use tourhub_auth::password::{PasswordHasher, PasswordValidator};
use tourhub_auth::session::SessionManager;
use tourhub_core::error::AppError;
use tourhub_core::result::AppResult;
use tourhub_database::repositories::user::UserRepository;
use tourhub_entity::user::{CreateUser, Role, UpdateProfile, User};

use crate::context::RequestContext;

/// Self-service registration payload.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// Login email.
    pub email: String,
    /// Plaintext password, validated and hashed here.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone (optional).
    pub phone: Option<String>,
    /// Requested role; admin accounts cannot be self-registered.
    pub role: Role,
}

/// Result of a successful login.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LoginResult {
    /// Generated token pair.
    pub tokens: TokenPair,
    /// The authenticated user.
    pub user: User,
}

/// Orchestrates credentials, sessions, and tokens.
#[derive(Clone)]
pub struct AuthService {
    /// User store.
    user_repo: Arc<UserRepository>,
    /// Session lifecycle.
    session_manager: Arc<SessionManager>,
    /// Token creation.
    jwt_encoder: Arc<JwtEncoder>,
    /// Token validation (for refresh and logout).
    jwt_decoder: Arc<JwtDecoder>,
    /// Password hashing.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
}

impl AuthService {
    /// Create a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        session_manager: Arc<SessionManager>,
        jwt_encoder: Arc<JwtEncoder>,
        jwt_decoder: Arc<JwtDecoder>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            user_repo,
            session_manager,
            jwt_encoder,
            jwt_decoder,
            hasher,
            validator,
        }
    }

    /// Register a new account. Admin accounts are created by existing
    /// admins, never through this path.
    pub async fn register(&self, req: RegisterRequest) -> AppResult<User> {
        if req.role == Role::Admin {
            return Err(AppError::validation(
                "Admin accounts are created by an administrator",
            ));
        }
        if req.first_name.trim().is_empty() || req.last_name.trim().is_empty() {
            return Err(AppError::validation("First and last name are required"));
        }

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
                phone: req.phone,
                role: req.role,
                admin_permissions: Vec::new(),
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "Account registered");
        Ok(user)
    }

    /// Authenticate and open a session.
    ///
    /// Credential failures are indistinguishable on purpose: a missing
    /// account and a wrong password report the same error.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResult> {
        let invalid = || AppError::unauthorized("Invalid email or password");

        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(invalid)?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Failed login attempt");
            return Err(invalid());
        }

        if !user.can_login() {
            return Err(AppError::forbidden("Account is deactivated"));
        }

        let session = self.session_manager.create_session(user.id).await?;
        let tokens = self.jwt_encoder.generate_token_pair(&user, session.id)?;

        if let Err(e) = self.user_repo.update_last_login(user.id).await {
            warn!(user_id = %user.id, error = %e, "Failed to record last login");
        }

        info!(user_id = %user.id, session_id = %session.id, "Login");
        Ok(LoginResult { tokens, user })
    }

    /// Exchange a refresh token for a fresh token pair on the same
    /// session. Role and permissions are re-read from the store so a
    /// revoked capability does not survive a refresh.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let claims = self.jwt_decoder.decode_refresh_token(refresh_token).await?;
        let session = self
            .session_manager
            .validate_session(claims.session_id())
            .await?;

        let user = self
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::unauthorized("Account no longer exists"))?;

        if !user.can_login() {
            return Err(AppError::forbidden("Account is deactivated"));
        }

        self.jwt_encoder.generate_token_pair(&user, session.id)
    }

    /// Close the session behind the presented token and revoke the token
    /// itself.
    pub async fn logout(&self, claims: &Claims) -> AppResult<()> {
        self.session_manager
            .revoke_session(claims.session_id())
            .await?;
        self.jwt_decoder
            .blocklist_token(claims.jti, claims.remaining_ttl_seconds())
            .await?;

        info!(user_id = %claims.user_id(), session_id = %claims.session_id(), "Logout");
        Ok(())
    }

    /// The calling user's own account row.
    pub async fn current_user(&self, ctx: &RequestContext) -> AppResult<User> {
        let user_id = ctx.require_account()?;
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Account not found"))
    }

    /// Update the calling user's profile fields.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        patch: UpdateProfile,
    ) -> AppResult<User> {
        let user_id = ctx.require_account()?;
        self.user_repo
            .update_profile(user_id, &patch)
            .await?
            .ok_or_else(|| AppError::not_found("Account not found"))
    }

    /// Change the calling user's password after verifying the current one.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let user = self.current_user(ctx).await?;

        if !self
            .hasher
            .verify_password(current_password, &user.password_hash)?
        {
            return Err(AppError::unauthorized("Current password is incorrect"));
        }

        self.validator
            .validate_not_same(current_password, new_password)?;
        self.validator.validate(new_password)?;

        let hash = self.hasher.hash_password(new_password)?;
        self.user_repo.update_password(user.id, &hash).await?;

        info!(user_id = %user.id, "Password changed");
        Ok(())
    }
}
