//! Moderation envelope shared by Events and Venues.

pub mod status;

pub use status::ApprovalStatus;

use uuid::Uuid;

/// A resource subject to admin approval before public visibility.
///
/// Implemented by [`crate::event::Event`] and [`crate::venue::Venue`] so the
/// moderation workflow and the authorization rules can treat both uniformly.
pub trait Moderable {
    /// The resource's unique id.
    fn id(&self) -> Uuid;

    /// The actor that created and owns the resource.
    fn owner_id(&self) -> Uuid;

    /// Current moderation state.
    fn approval_status(&self) -> ApprovalStatus;

    /// Owner/admin activity toggle, independent of moderation state.
    fn is_active(&self) -> bool;

    /// Short human-readable label used in notifications and logs.
    fn display_label(&self) -> &str;

    /// Whether the resource appears in public, unauthenticated listings.
    ///
    /// Holds exactly when the resource is approved **and** active.
    fn is_publicly_visible(&self) -> bool {
        self.approval_status() == ApprovalStatus::Approved && self.is_active()
    }
}
