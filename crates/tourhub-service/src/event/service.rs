//! Event CRUD and role-scoped listing.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use tourhub_auth::access::{
    self, AccessTarget, ListingVisibility, Operation, ResourceKind, listing_visibility,
};
use tourhub_cache::keys;
use tourhub_core::error::AppError;
use tourhub_core::result::AppResult;
use tourhub_core::traits::CacheProvider;
use tourhub_core::types::pagination::{PageRequest, PageResponse};
use tourhub_core::types::scope::ScopeFilter;
use tourhub_database::repositories::event::EventRepository;
use tourhub_database::repositories::moderable::ModerableRepository;
use tourhub_entity::event::{CreateEvent, Event, UpdateEvent};

use crate::context::RequestContext;

/// TTL for cached public listing pages.
const LISTING_CACHE_TTL: Duration = Duration::from_secs(60);

/// Organizer-facing payload for creating an event.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateEventRequest {
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

/// Event catalog operations: public browsing, owner CRUD, and the
/// moderation-aware listing behind organizer and admin dashboards.
#[derive(Clone)]
pub struct EventService {
    /// Event store.
    event_repo: Arc<EventRepository>,
    /// Listing cache.
    cache: Arc<dyn CacheProvider>,
}

impl EventService {
    /// Create a new event service.
    pub fn new(event_repo: Arc<EventRepository>, cache: Arc<dyn CacheProvider>) -> Self {
        Self { event_repo, cache }
    }

    /// List publicly visible events, cached per scope and page.
    ///
    /// Cached pages are dropped after any event mutation, so a stale page
    /// can outlive a change by at most the cache TTL.
    pub async fn list_public(
        &self,
        scope: &ScopeFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Event>> {
        let key = keys::public_listing("events", &scope_fingerprint(scope), page.page);

        if let Ok(Some(cached)) = self.cache.get(&key).await {
            if let Ok(response) = serde_json::from_str::<PageResponse<Event>>(&cached) {
                return Ok(response);
            }
        }

        let response = self.event_repo.list_public(scope, page).await?;

        if let Ok(serialized) = serde_json::to_string(&response) {
            let _ = self.cache.set(&key, &serialized, LISTING_CACHE_TTL).await;
        }

        Ok(response)
    }

    /// List events as wide as the caller is allowed to see: admins get
    /// everything, organizers their own events in any state, everyone
    /// else the public subset. The scope filter only narrows further.
    pub async fn list_moderable(
        &self,
        ctx: &RequestContext,
        scope: &ScopeFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Event>> {
        access::authorize(&ctx.actor, Operation::List, ResourceKind::Event, None)?;

        match listing_visibility(&ctx.actor, ResourceKind::Event) {
            ListingVisibility::All => self.event_repo.list_all(scope, page).await,
            ListingVisibility::Own(owner) => {
                // A scope naming someone else intersects to nothing.
                if scope.owner_id.is_some_and(|requested| requested != owner) {
                    return Ok(PageResponse::new(Vec::new(), page.page, page.page_size, 0));
                }
                let scoped = ScopeFilter {
                    owner_id: Some(owner),
                    ..scope.clone()
                };
                self.event_repo.list_all(&scoped, page).await
            }
            ListingVisibility::Public => self.event_repo.list_public(scope, page).await,
        }
    }

    /// Fetch a single event under the visibility rules. A resource the
    /// caller may not see reports the same error as a missing id.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Event> {
        let event = self
            .event_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        let target = AccessTarget::moderable(&event);
        if access::authorize(&ctx.actor, Operation::Read, ResourceKind::Event, Some(&target))
            .is_err()
        {
            return Err(AppError::not_found("Event not found"));
        }

        Ok(event)
    }

    /// Create a new event owned by the calling organizer. Always lands in
    /// pending state.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateEventRequest,
    ) -> AppResult<Event> {
        access::authorize(&ctx.actor, Operation::Create, ResourceKind::Event, None)?;
        let organizer_id = ctx.require_account()?;

        if req.title.trim().is_empty() {
            return Err(AppError::validation("Event title is required"));
        }
        if req.end_at <= req.start_at {
            return Err(AppError::validation("Event must end after it starts"));
        }
        if req.capacity <= 0 {
            return Err(AppError::validation("Capacity must be positive"));
        }
        if req.price_cents < 0 {
            return Err(AppError::validation("Price cannot be negative"));
        }

        let event = self
            .event_repo
            .create(&CreateEvent {
                organizer_id,
                title: req.title,
                description: req.description,
                category: req.category,
                city: req.city,
                venue_name: req.venue_name,
                start_at: req.start_at,
                end_at: req.end_at,
                price_cents: req.price_cents,
                capacity: req.capacity,
            })
            .await?;

        self.invalidate_listings().await;
        info!(organizer_id = %organizer_id, event_id = %event.id, "Event created");

        Ok(event)
    }

    /// Patch an event's payload as its owner. The approval state is not
    /// touched: an approved event stays approved after an edit.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        patch: UpdateEvent,
    ) -> AppResult<Event> {
        let existing = self.get(ctx, id).await?;
        let target = AccessTarget::moderable(&existing);
        access::authorize(&ctx.actor, Operation::Update, ResourceKind::Event, Some(&target))?;

        let event = self
            .event_repo
            .update(id, &patch)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        self.invalidate_listings().await;
        info!(event_id = %id, "Event updated");

        Ok(event)
    }

    /// Hard-delete an event as its owner.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let existing = self.get(ctx, id).await?;
        let target = AccessTarget::moderable(&existing);
        access::authorize(&ctx.actor, Operation::Delete, ResourceKind::Event, Some(&target))?;

        if !self.event_repo.delete(id).await? {
            return Err(AppError::not_found("Event not found"));
        }

        self.invalidate_listings().await;
        info!(event_id = %id, "Event deleted");

        Ok(())
    }

    /// Drop every cached event listing page.
    async fn invalidate_listings(&self) {
        let _ = self
            .cache
            .delete_pattern(&keys::listing_pattern("events"))
            .await;
    }
}

/// Fold the scope filter into a cache-key fragment.
fn scope_fingerprint(scope: &ScopeFilter) -> String {
    format!(
        "{}:{}:{}",
        scope
            .owner_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string()),
        scope.city.as_deref().unwrap_or("-").to_lowercase(),
        scope.category.as_deref().unwrap_or("-").to_lowercase(),
    )
}
