//! Store operations shared by moderable resources.

use async_trait::async_trait;
use uuid::Uuid;

use tourhub_core::result::AppResult;
use tourhub_entity::moderation::{ApprovalStatus, Moderable};

/// Store access required by the moderation workflow.
///
/// Implemented by [`super::event::EventRepository`] and
/// [`super::venue::VenueRepository`], allowing one moderation service to
/// drive both resource types.
#[async_trait]
pub trait ModerableRepository: Send + Sync + 'static {
    /// The concrete resource row type.
    type Resource: Moderable + Clone + serde::Serialize + Send + Sync + 'static;

    /// Noun used in error and notification messages ("event", "venue").
    fn resource_name(&self) -> &'static str;

    /// Fetch a resource by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Self::Resource>>;

    /// Apply a moderation decision with a compare-and-swap on the pending
    /// state: the row is updated only if its status is still `pending`.
    ///
    /// Returns `None` when no pending row with this id exists — either the
    /// id is unknown or another moderator already decided it; the caller
    /// re-fetches to tell the two apart.
    async fn apply_decision(
        &self,
        id: Uuid,
        decision: ApprovalStatus,
        rejection_reason: Option<&str>,
    ) -> AppResult<Option<Self::Resource>>;

    /// Toggle the activity flag. Returns `None` for an unknown id.
    async fn set_active(&self, id: Uuid, is_active: bool) -> AppResult<Option<Self::Resource>>;

    /// Toggle the promotional flag. Returns `None` for an unknown id.
    async fn set_featured(&self, id: Uuid, featured: bool) -> AppResult<Option<Self::Resource>>;
}
