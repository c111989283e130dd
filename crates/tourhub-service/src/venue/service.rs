//! Venue CRUD and role-scoped listing.

use std::sync::Arc;
use std::time::Duration;

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
use tourhub_database::repositories::moderable::ModerableRepository;
use tourhub_database::repositories::venue::VenueRepository;
use tourhub_entity::venue::{CreateVenue, UpdateVenue, Venue};

use crate::context::RequestContext;

/// TTL for cached public listing pages.
const LISTING_CACHE_TTL: Duration = Duration::from_secs(60);

/// Host-facing payload for creating a venue.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateVenueRequest {
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

/// Venue catalog operations, mirroring the event surface for the
/// "hidden gem" side of the marketplace.
#[derive(Clone)]
pub struct VenueService {
    /// Venue store.
    venue_repo: Arc<VenueRepository>,
    /// Listing cache.
    cache: Arc<dyn CacheProvider>,
}

impl VenueService {
    /// Create a new venue service.
    pub fn new(venue_repo: Arc<VenueRepository>, cache: Arc<dyn CacheProvider>) -> Self {
        Self { venue_repo, cache }
    }

    /// List publicly visible venues, cached per scope and page.
    pub async fn list_public(
        &self,
        scope: &ScopeFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Venue>> {
        let key = keys::public_listing("venues", &scope_fingerprint(scope), page.page);

        if let Ok(Some(cached)) = self.cache.get(&key).await {
            if let Ok(response) = serde_json::from_str::<PageResponse<Venue>>(&cached) {
                return Ok(response);
            }
        }

        let response = self.venue_repo.list_public(scope, page).await?;

        if let Ok(serialized) = serde_json::to_string(&response) {
            let _ = self.cache.set(&key, &serialized, LISTING_CACHE_TTL).await;
        }

        Ok(response)
    }

    /// List venues as wide as the caller is allowed to see.
    pub async fn list_moderable(
        &self,
        ctx: &RequestContext,
        scope: &ScopeFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Venue>> {
        access::authorize(&ctx.actor, Operation::List, ResourceKind::Venue, None)?;

        match listing_visibility(&ctx.actor, ResourceKind::Venue) {
            ListingVisibility::All => self.venue_repo.list_all(scope, page).await,
            ListingVisibility::Own(owner) => {
                if scope.owner_id.is_some_and(|requested| requested != owner) {
                    return Ok(PageResponse::new(Vec::new(), page.page, page.page_size, 0));
                }
                let scoped = ScopeFilter {
                    owner_id: Some(owner),
                    ..scope.clone()
                };
                self.venue_repo.list_all(&scoped, page).await
            }
            ListingVisibility::Public => self.venue_repo.list_public(scope, page).await,
        }
    }

    /// Fetch a single venue under the visibility rules; invisible rows
    /// report the same error as a missing id.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Venue> {
        let venue = self
            .venue_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Venue not found"))?;

        let target = AccessTarget::moderable(&venue);
        if access::authorize(&ctx.actor, Operation::Read, ResourceKind::Venue, Some(&target))
            .is_err()
        {
            return Err(AppError::not_found("Venue not found"));
        }

        Ok(venue)
    }

    /// Create a new venue owned by the calling host; lands in pending
    /// state.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateVenueRequest,
    ) -> AppResult<Venue> {
        access::authorize(&ctx.actor, Operation::Create, ResourceKind::Venue, None)?;
        let host_id = ctx.require_account()?;

        if req.name.trim().is_empty() {
            return Err(AppError::validation("Venue name is required"));
        }

        let venue = self
            .venue_repo
            .create(&CreateVenue {
                host_id,
                name: req.name,
                description: req.description,
                category: req.category,
                city: req.city,
                address: req.address,
                price_range: req.price_range,
            })
            .await?;

        self.invalidate_listings().await;
        info!(host_id = %host_id, venue_id = %venue.id, "Venue created");

        Ok(venue)
    }

    /// Patch a venue's payload as its owner; approval state untouched.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        patch: UpdateVenue,
    ) -> AppResult<Venue> {
        let existing = self.get(ctx, id).await?;
        let target = AccessTarget::moderable(&existing);
        access::authorize(&ctx.actor, Operation::Update, ResourceKind::Venue, Some(&target))?;

        let venue = self
            .venue_repo
            .update(id, &patch)
            .await?
            .ok_or_else(|| AppError::not_found("Venue not found"))?;

        self.invalidate_listings().await;
        info!(venue_id = %id, "Venue updated");

        Ok(venue)
    }

    /// Hard-delete a venue as its owner.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let existing = self.get(ctx, id).await?;
        let target = AccessTarget::moderable(&existing);
        access::authorize(&ctx.actor, Operation::Delete, ResourceKind::Venue, Some(&target))?;

        if !self.venue_repo.delete(id).await? {
            return Err(AppError::not_found("Venue not found"));
        }

        self.invalidate_listings().await;
        info!(venue_id = %id, "Venue deleted");

        Ok(())
    }

    /// Drop every cached venue listing page.
    async fn invalidate_listings(&self) {
        let _ = self
            .cache
            .delete_pattern(&keys::listing_pattern("venues"))
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
