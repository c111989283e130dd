//! Booking lifecycle: reserve tickets, list, cancel.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use tourhub_auth::access::{self, AccessTarget, Operation, ResourceKind};
use tourhub_cache::keys;
use tourhub_core::error::AppError;
use tourhub_core::result::AppResult;
use tourhub_core::traits::{CacheProvider, Notifier};
use tourhub_core::types::pagination::{PageRequest, PageResponse};
use tourhub_database::repositories::booking::BookingRepository;
use tourhub_database::repositories::event::EventRepository;
use tourhub_database::repositories::moderable::ModerableRepository;
use tourhub_entity::booking::{Booking, CreateBooking};
use tourhub_entity::moderation::Moderable;
use tourhub_entity::user::AdminPermission;

use crate::context::RequestContext;

/// Booking operations for travelers, plus the admin-wide view.
#[derive(Clone)]
pub struct BookingService {
    /// Booking store.
    booking_repo: Arc<BookingRepository>,
    /// Event store, for visibility and capacity.
    event_repo: Arc<EventRepository>,
    /// Listing cache (event pages carry booking counts).
    cache: Arc<dyn CacheProvider>,
    /// Best-effort notification sink.
    notifier: Arc<dyn Notifier>,
}

impl BookingService {
    /// Create a new booking service.
    pub fn new(
        booking_repo: Arc<BookingRepository>,
        event_repo: Arc<EventRepository>,
        cache: Arc<dyn CacheProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            booking_repo,
            event_repo,
            cache,
            notifier,
        }
    }

    /// Book tickets for a publicly visible event.
    ///
    /// Capacity is enforced by an atomic reservation against the event
    /// row; two racing bookings cannot oversell.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        event_id: Uuid,
        quantity: i32,
    ) -> AppResult<Booking> {
        access::authorize(&ctx.actor, Operation::Create, ResourceKind::Booking, None)?;
        let user_id = ctx.require_account()?;

        if quantity <= 0 {
            return Err(AppError::validation("Quantity must be positive"));
        }

        let event = self
            .event_repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        // A traveler can only book what the public catalog shows.
        if !event.is_publicly_visible() {
            return Err(AppError::not_found("Event not found"));
        }

        if self
            .event_repo
            .reserve_tickets(event_id, quantity)
            .await?
            .is_none()
        {
            return Err(AppError::invalid_state("Not enough tickets remaining"));
        }

        let booking = match self
            .booking_repo
            .create(&CreateBooking {
                user_id,
                event_id,
                quantity,
                unit_price_cents: event.price_cents,
            })
            .await
        {
            Ok(booking) => booking,
            Err(e) => {
                // Hand the reserved tickets back before reporting.
                if let Err(release_err) =
                    self.event_repo.release_tickets(event_id, quantity).await
                {
                    warn!(event_id = %event_id, error = %release_err, "Failed to release tickets");
                }
                return Err(e);
            }
        };

        self.invalidate_event_listings().await;
        info!(
            user_id = %user_id,
            event_id = %event_id,
            booking_id = %booking.id,
            quantity,
            "Booking created"
        );
        self.notifier
            .success(&format!("Booked {} ticket(s) for '{}'", quantity, event.title));

        Ok(booking)
    }

    /// List the calling traveler's own bookings.
    pub async fn list_own(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Booking>> {
        access::authorize(&ctx.actor, Operation::List, ResourceKind::Booking, None)?;
        let user_id = ctx.require_account()?;
        self.booking_repo.list_by_user(user_id, page).await
    }

    /// Fetch one booking; only the owner and permitted admins see it.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Booking> {
        let booking = self
            .booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;

        let target = AccessTarget::owned(booking.user_id);
        if access::authorize(&ctx.actor, Operation::Read, ResourceKind::Booking, Some(&target))
            .is_err()
        {
            return Err(AppError::not_found("Booking not found"));
        }

        Ok(booking)
    }

    /// Cancel a confirmed booking and release its tickets.
    pub async fn cancel(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Booking> {
        let booking = self.get(ctx, id).await?;
        let target = AccessTarget::owned(booking.user_id);
        access::authorize(&ctx.actor, Operation::Update, ResourceKind::Booking, Some(&target))?;

        let cancelled = self
            .booking_repo
            .cancel(id)
            .await?
            .ok_or_else(|| AppError::invalid_state("Booking is already cancelled"))?;

        if let Err(e) = self
            .event_repo
            .release_tickets(cancelled.event_id, cancelled.quantity)
            .await
        {
            warn!(booking_id = %id, error = %e, "Failed to release tickets after cancellation");
        }

        self.invalidate_event_listings().await;
        info!(booking_id = %id, "Booking cancelled");

        Ok(cancelled)
    }

    /// List every booking on the platform (admin surface).
    pub async fn list_all(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Booking>> {
        access::require_permission(&ctx.actor, AdminPermission::ManageBookings)?;
        self.booking_repo.list_all(page).await
    }

    /// Booking counts change event ordering, so event pages are dropped.
    async fn invalidate_event_listings(&self) {
        let _ = self
            .cache
            .delete_pattern(&keys::listing_pattern("events"))
            .await;
    }
}
