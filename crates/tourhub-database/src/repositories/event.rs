//! Event repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use tourhub_core::error::{AppError, ErrorKind};
use tourhub_core::result::AppResult;
use tourhub_core::types::pagination::{PageRequest, PageResponse};
use tourhub_core::types::scope::ScopeFilter;
use tourhub_entity::event::{CreateEvent, Event, UpdateEvent};
use tourhub_entity::moderation::ApprovalStatus;

use super::moderable::ModerableRepository;

/// Repository for event CRUD, listing, and moderation updates.
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Create a new event repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List publicly visible events (approved and active), featured first.
    ///
    /// The scope filter narrows by owner, city, or category; it cannot
    /// surface non-visible rows.
    pub async fn list_public(
        &self,
        scope: &ScopeFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Event>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM events \
             WHERE approval_status = 'approved' AND is_active = TRUE \
               AND ($1::uuid IS NULL OR organizer_id = $1) \
               AND ($2::text IS NULL OR city ILIKE $2) \
               AND ($3::text IS NULL OR category = $3)",
        )
        .bind(scope.owner_id)
        .bind(&scope.city)
        .bind(&scope.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count events", e))?;

        let events = sqlx::query_as::<_, Event>(
            "SELECT * FROM events \
             WHERE approval_status = 'approved' AND is_active = TRUE \
               AND ($1::uuid IS NULL OR organizer_id = $1) \
               AND ($2::text IS NULL OR city ILIKE $2) \
               AND ($3::text IS NULL OR category = $3) \
             ORDER BY featured DESC, start_at ASC LIMIT $4 OFFSET $5",
        )
        .bind(scope.owner_id)
        .bind(&scope.city)
        .bind(&scope.category)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list events", e))?;

        Ok(PageResponse::new(
            events,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all events regardless of moderation state (admin surface).
    pub async fn list_all(
        &self,
        scope: &ScopeFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Event>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM events \
             WHERE ($1::uuid IS NULL OR organizer_id = $1) \
               AND ($2::text IS NULL OR city ILIKE $2) \
               AND ($3::text IS NULL OR category = $3)",
        )
        .bind(scope.owner_id)
        .bind(&scope.city)
        .bind(&scope.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count events", e))?;

        let events = sqlx::query_as::<_, Event>(
            "SELECT * FROM events \
             WHERE ($1::uuid IS NULL OR organizer_id = $1) \
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
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list events", e))?;

        Ok(PageResponse::new(
            events,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new event in pending state.
    pub async fn create(&self, data: &CreateEvent) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (organizer_id, title, description, category, city, venue_name, \
                                 start_at, end_at, price_cents, capacity) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING *",
        )
        .bind(data.organizer_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.category)
        .bind(&data.city)
        .bind(&data.venue_name)
        .bind(data.start_at)
        .bind(data.end_at)
        .bind(data.price_cents)
        .bind(data.capacity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create event", e))
    }

    /// Patch owner-editable fields. The approval state is deliberately
    /// untouched by this statement.
    pub async fn update(&self, id: Uuid, patch: &UpdateEvent) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET title = COALESCE($2, title), \
                               description = COALESCE($3, description), \
                               category = COALESCE($4, category), \
                               city = COALESCE($5, city), \
                               venue_name = COALESCE($6, venue_name), \
                               start_at = COALESCE($7, start_at), \
                               end_at = COALESCE($8, end_at), \
                               price_cents = COALESCE($9, price_cents), \
                               capacity = COALESCE($10, capacity), \
                               updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(&patch.category)
        .bind(&patch.city)
        .bind(&patch.venue_name)
        .bind(patch.start_at)
        .bind(patch.end_at)
        .bind(patch.price_cents)
        .bind(patch.capacity)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update event", e))
    }

    /// Hard-delete an event. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete event", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Reserve tickets atomically: the count only moves if the capacity
    /// still holds, so two racing bookings cannot oversell.
    pub async fn reserve_tickets(&self, id: Uuid, quantity: i32) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET bookings_count = bookings_count + $2, updated_at = NOW() \
             WHERE id = $1 AND bookings_count + $2 <= capacity \
             RETURNING *",
        )
        .bind(id)
        .bind(quantity)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to reserve tickets", e))
    }

    /// Release previously reserved tickets (booking cancelled).
    pub async fn release_tickets(&self, id: Uuid, quantity: i32) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET bookings_count = GREATEST(bookings_count - $2, 0), \
                               updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(quantity)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to release tickets", e))
    }

    /// Count events per moderation state (admin dashboard).
    pub async fn count_by_status(&self, status: ApprovalStatus) -> AppResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM events WHERE approval_status = $1")
                .bind(status)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count events", e)
                })?;
        Ok(count as u64)
    }
}

#[async_trait]
impl ModerableRepository for EventRepository {
    type Resource = Event;

    fn resource_name(&self) -> &'static str {
        "event"
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find event by id", e)
            })
    }

    async fn apply_decision(
        &self,
        id: Uuid,
        decision: ApprovalStatus,
        rejection_reason: Option<&str>,
    ) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET approval_status = $2, rejection_reason = $3, updated_at = NOW() \
             WHERE id = $1 AND approval_status = 'pending' \
             RETURNING *",
        )
        .bind(id)
        .bind(decision)
        .bind(rejection_reason)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to moderate event", e))
    }

    async fn set_active(&self, id: Uuid, is_active: bool) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET is_active = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update event activity", e)
        })
    }

    async fn set_featured(&self, id: Uuid, featured: bool) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET featured = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(featured)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update event feature flag", e)
        })
    }
}
