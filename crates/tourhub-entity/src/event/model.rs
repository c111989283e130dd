//! Event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::moderation::{ApprovalStatus, Moderable};

/// A ticketed event listed on the marketplace.
///
/// Created by an organizer in `pending` state; appears in public listings
/// only once approved by an admin and active.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique event identifier.
    pub id: Uuid,
    /// The organizer who created and owns this event.
    pub organizer_id: Uuid,
    /// Event title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Category tag (music, food, culture, ...).
    pub category: String,
    /// City where the event takes place.
    pub city: String,
    /// Free-text venue name shown on the listing.
    pub venue_name: String,
    /// When the event starts.
    pub start_at: DateTime<Utc>,
    /// When the event ends.
    pub end_at: DateTime<Utc>,
    /// Ticket price in cents.
    pub price_cents: i64,
    /// Maximum number of tickets.
    pub capacity: i32,
    /// Tickets booked so far.
    pub bookings_count: i32,
    /// Moderation state.
    pub approval_status: ApprovalStatus,
    /// Reason recorded on rejection; cleared on approval.
    pub rejection_reason: Option<String>,
    /// Owner/admin visibility toggle.
    pub is_active: bool,
    /// Admin-only promotional flag.
    pub featured: bool,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
    /// When the event was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Remaining bookable tickets.
    pub fn remaining_capacity(&self) -> i32 {
        (self.capacity - self.bookings_count).max(0)
    }
}

impl Moderable for Event {
    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Uuid {
        self.organizer_id
    }

    fn approval_status(&self) -> ApprovalStatus {
        self.approval_status
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn display_label(&self) -> &str {
        &self.title
    }
}

/// Data required to create a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEvent {
    /// Owning organizer.
    pub organizer_id: Uuid,
    /// Event title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Category tag.
    pub category: String,
    /// City.
    pub city: String,
    /// Venue name.
    pub venue_name: String,
    /// Start time.
    pub start_at: DateTime<Utc>,
    /// End time.
    pub end_at: DateTime<Utc>,
    /// Ticket price in cents.
    pub price_cents: i64,
    /// Ticket capacity.
    pub capacity: i32,
}

/// Owner-editable event metadata. Moderation fields are absent on purpose:
/// owner edits never touch the approval state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEvent {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New venue name.
    pub venue_name: Option<String>,
    /// New start time.
    pub start_at: Option<DateTime<Utc>>,
    /// New end time.
    pub end_at: Option<DateTime<Utc>>,
    /// New ticket price in cents.
    pub price_cents: Option<i64>,
    /// New capacity.
    pub capacity: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event(status: ApprovalStatus, active: bool) -> Event {
        let now = Utc::now();
        Event {
            id: Uuid::new_v4(),
            organizer_id: Uuid::new_v4(),
            title: "Jazz Night".to_string(),
            description: "An evening of live jazz".to_string(),
            category: "music".to_string(),
            city: "Lisbon".to_string(),
            venue_name: "Blue Room".to_string(),
            start_at: now,
            end_at: now,
            price_cents: 2500,
            capacity: 100,
            bookings_count: 40,
            approval_status: status,
            rejection_reason: None,
            is_active: active,
            featured: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_public_visibility_requires_approved_and_active() {
        assert!(sample_event(ApprovalStatus::Approved, true).is_publicly_visible());
        assert!(!sample_event(ApprovalStatus::Approved, false).is_publicly_visible());
        assert!(!sample_event(ApprovalStatus::Pending, true).is_publicly_visible());
        assert!(!sample_event(ApprovalStatus::Rejected, true).is_publicly_visible());
    }

    #[test]
    fn test_remaining_capacity_floors_at_zero() {
        let mut event = sample_event(ApprovalStatus::Approved, true);
        assert_eq!(event.remaining_capacity(), 60);
        event.bookings_count = 120;
        assert_eq!(event.remaining_capacity(), 0);
    }
}
