//! Venue entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::moderation::{ApprovalStatus, Moderable};

/// A "hidden gem" venue listed on the marketplace.
///
/// Shares the moderation envelope with [`crate::event::Event`]: created by
/// a venue host in `pending` state, publicly visible only once approved and
/// active.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Venue {
    /// Unique venue identifier.
    pub id: Uuid,
    /// The host who created and owns this venue.
    pub host_id: Uuid,
    /// Venue name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Category tag (cafe, viewpoint, gallery, ...).
    pub category: String,
    /// City.
    pub city: String,
    /// Street address.
    pub address: String,
    /// Indicative price range label ("budget", "moderate", "premium").
    pub price_range: String,
    /// Moderation state.
    pub approval_status: ApprovalStatus,
    /// Reason recorded on rejection; cleared on approval.
    pub rejection_reason: Option<String>,
    /// Owner/admin visibility toggle.
    pub is_active: bool,
    /// Admin-only promotional flag.
    pub featured: bool,
    /// When the venue was created.
    pub created_at: DateTime<Utc>,
    /// When the venue was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Moderable for Venue {
    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Uuid {
        self.host_id
    }

    fn approval_status(&self) -> ApprovalStatus {
        self.approval_status
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn display_label(&self) -> &str {
        &self.name
    }
}

/// Data required to create a new venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVenue {
    /// Owning host.
    pub host_id: Uuid,
    /// Venue name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Category tag.
    pub category: String,
    /// City.
    pub city: String,
    /// Street address.
    pub address: String,
    /// Indicative price range label.
    pub price_range: String,
}

/// Owner-editable venue metadata; approval state is never touched here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVenue {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New price range label.
    pub price_range: Option<String>,
}
