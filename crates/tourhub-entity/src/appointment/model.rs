//! Appointment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::AppointmentStatus;

/// A traveler's appointment request with a doctor.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    /// Unique appointment identifier.
    pub id: Uuid,
    /// The requesting traveler.
    pub user_id: Uuid,
    /// The doctor taking the appointment.
    pub doctor_id: Uuid,
    /// Requested visit time.
    pub scheduled_at: DateTime<Utc>,
    /// Reason for the visit.
    pub reason: String,
    /// Appointment state.
    pub status: AppointmentStatus,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
    /// When the request was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create an appointment request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointment {
    /// Requesting traveler.
    pub user_id: Uuid,
    /// Target doctor.
    pub doctor_id: Uuid,
    /// Requested visit time.
    pub scheduled_at: DateTime<Utc>,
    /// Reason for the visit.
    pub reason: String,
}
