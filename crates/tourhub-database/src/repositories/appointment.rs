//! Appointment repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use tourhub_core::error::{AppError, ErrorKind};
use tourhub_core::result::AppResult;
use tourhub_core::types::pagination::{PageRequest, PageResponse};
use tourhub_entity::appointment::{Appointment, AppointmentStatus, CreateAppointment};

/// Repository for medical appointments.
#[derive(Debug, Clone)]
pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    /// Create a new appointment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an appointment by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Appointment>> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find appointment", e)
            })
    }

    /// List a traveler's appointments, soonest first.
    pub async fn list_by_user(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Appointment>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM appointments WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count appointments", e)
                })?;

        let appointments = sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments WHERE user_id = $1 \
             ORDER BY scheduled_at ASC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list appointments", e)
        })?;

        Ok(PageResponse::new(
            appointments,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List a doctor's appointments, soonest first.
    pub async fn list_by_doctor(
        &self,
        doctor_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Appointment>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM appointments WHERE doctor_id = $1")
                .bind(doctor_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count appointments", e)
                })?;

        let appointments = sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments WHERE doctor_id = $1 \
             ORDER BY scheduled_at ASC LIMIT $2 OFFSET $3",
        )
        .bind(doctor_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list appointments", e)
        })?;

        Ok(PageResponse::new(
            appointments,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a pending appointment request.
    pub async fn create(&self, data: &CreateAppointment) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>(
            "INSERT INTO appointments (user_id, doctor_id, scheduled_at, reason) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.doctor_id)
        .bind(data.scheduled_at)
        .bind(&data.reason)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create appointment", e))
    }

    /// Move an appointment between states with a compare-and-swap on the
    /// expected current state.
    ///
    /// Returns `None` when no row with this id is in the expected state.
    pub async fn update_status(
        &self,
        id: Uuid,
        expected: AppointmentStatus,
        next: AppointmentStatus,
    ) -> AppResult<Option<Appointment>> {
        sqlx::query_as::<_, Appointment>(
            "UPDATE appointments SET status = $3, updated_at = NOW() \
             WHERE id = $1 AND status = $2 \
             RETURNING *",
        )
        .bind(id)
        .bind(expected)
        .bind(next)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update appointment", e)
        })
    }
}
