//! Booking entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::BookingStatus;

/// A traveler's ticket booking for an event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// The traveler who booked.
    pub user_id: Uuid,
    /// The booked event.
    pub event_id: Uuid,
    /// Number of tickets.
    pub quantity: i32,
    /// Ticket price at booking time, in cents.
    pub unit_price_cents: i64,
    /// Total charged, in cents.
    pub total_cents: i64,
    /// Booking state.
    pub status: BookingStatus,
    /// When the booking was made.
    pub created_at: DateTime<Utc>,
    /// When the booking was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a booking row. The price fields are snapshots
/// taken from the event at booking time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBooking {
    /// Booking traveler.
    pub user_id: Uuid,
    /// Target event.
    pub event_id: Uuid,
    /// Number of tickets.
    pub quantity: i32,
    /// Snapshot of the ticket price in cents.
    pub unit_price_cents: i64,
}
