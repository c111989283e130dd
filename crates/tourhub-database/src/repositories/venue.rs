//! Venue repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use tourhub_core::error::{AppError, ErrorKind};
use tourhub_core::result::AppResult;
use tourhub_core::types::pagination::{PageRequest, PageResponse};
use tourhub_core::types::scope::ScopeFilter;
use tourhub_entity::moderation::ApprovalStatus;
use tourhub_entity::venue::{CreateVenue, UpdateVenue, Venue};

use super::moderable::ModerableRepository;

/// Repository for venue CRUD, listing, and moderation updates.
#[derive(Debug, Clone)]
pub struct VenueRepository {
    pool: PgPool,
}

impl VenueRepository {
    /// Create a new venue repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List publicly visible venues (approved and active), featured first.
    pub async fn list_public(
        &self,
        scope: &ScopeFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Venue>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM venues \
             WHERE approval_status = 'approved' AND is_active = TRUE \
               AND ($1::uuid IS NULL OR host_id = $1) \
               AND ($2::text IS NULL OR city ILIKE $2) \
               AND ($3::text IS NULL OR category = $3)",
        )
        .bind(scope.owner_id)
        .bind(&scope.city)
        .bind(&scope.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count venues", e))?;

        let venues = sqlx::query_as::<_, Venue>(
            "SELECT * FROM venues \
             WHERE approval_status = 'approved' AND is_active = TRUE \
               AND ($1::uuid IS NULL OR host_id = $1) \
               AND ($2::text IS NULL OR city ILIKE $2) \
               AND ($3::text IS NULL OR category = $3) \
             ORDER BY featured DESC, name ASC LIMIT $4 OFFSET $5",
        )
        .bind(scope.owner_id)
        .bind(&scope.city)
        .bind(&scope.category)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list venues", e))?;

        Ok(PageResponse::new(
            venues,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all venues regardless of moderation state (admin surface).
    pub async fn list_all(
        &self,
        scope: &ScopeFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Venue>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM venues \
             WHERE ($1::uuid IS NULL OR host_id = $1) \
               AND ($2::text IS NULL OR city ILIKE $2) \
               AND ($3::text IS NULL OR category = $3)",
        )
        .bind(scope.owner_id)
        .bind(&scope.city)
        .bind(&scope.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count venues", e))?;

        let venues = sqlx::query_as::<_, Venue>(
            "SELECT * FROM venues \
             WHERE ($1::uuid IS NULL OR host_id = $1) \
               AND ($2::text IS NULL OR city ILIKE $2) \
               AND ($3::text IS NULL OR category = $3) \
             ORDER BY created_at DESC LIMIT $4 OFFSET $5",
        )
        .bind(scope.owner_id)
        .bind(&scope.city)
        .bind(&scope.category)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list venues", e))?;

        Ok(PageResponse::new(
            venues,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new venue in pending state.
    pub async fn create(&self, data: &CreateVenue) -> AppResult<Venue> {
        sqlx::query_as::<_, Venue>(
            "INSERT INTO venues (host_id, name, description, category, city, address, price_range) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(data.host_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.category)
        .bind(&data.city)
        .bind(&data.address)
        .bind(&data.price_range)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create venue", e))
    }

    /// Patch owner-editable fields, leaving the approval state untouched.
    pub async fn update(&self, id: Uuid, patch: &UpdateVenue) -> AppResult<Option<Venue>> {
        sqlx::query_as::<_, Venue>(
            "UPDATE venues SET name = COALESCE($2, name), \
                               description = COALESCE($3, description), \
                               category = COALESCE($4, category), \
                               city = COALESCE($5, city), \
                               address = COALESCE($6, address), \
                               price_range = COALESCE($7, price_range), \
                               updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.description)
        .bind(&patch.category)
        .bind(&patch.city)
        .bind(&patch.address)
        .bind(&patch.price_range)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update venue", e))
    }

    /// Hard-delete a venue. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete venue", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count venues per moderation state (admin dashboard).
    pub async fn count_by_status(&self, status: ApprovalStatus) -> AppResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM venues WHERE approval_status = $1")
                .bind(status)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count venues", e)
                })?;
        Ok(count as u64)
    }
}

#[async_trait]
impl ModerableRepository for VenueRepository {
    type Resource = Venue;

    fn resource_name(&self) -> &'static str {
        "venue"
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Venue>> {
        sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find venue by id", e)
            })
    }

    async fn apply_decision(
        &self,
        id: Uuid,
        decision: ApprovalStatus,
        rejection_reason: Option<&str>,
    ) -> AppResult<Option<Venue>> {
        sqlx::query_as::<_, Venue>(
            "UPDATE venues SET approval_status = $2, rejection_reason = $3, updated_at = NOW() \
             WHERE id = $1 AND approval_status = 'pending' \
             RETURNING *",
        )
        .bind(id)
        .bind(decision)
        .bind(rejection_reason)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to moderate venue", e))
    }

    async fn set_active(&self, id: Uuid, is_active: bool) -> AppResult<Option<Venue>> {
        sqlx::query_as::<_, Venue>(
            "UPDATE venues SET is_active = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update venue activity", e)
        })
    }

    async fn set_featured(&self, id: Uuid, featured: bool) -> AppResult<Option<Venue>> {
        sqlx::query_as::<_, Venue>(
            "UPDATE venues SET featured = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(featured)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update venue feature flag", e)
        })
    }
}
