//! Revenue and moderation-queue reporting.

use std::sync::Arc;

use tourhub_auth::access;
use tourhub_core::result::AppResult;
use tourhub_database::repositories::booking::BookingRepository;
use tourhub_database::repositories::event::EventRepository;
use tourhub_database::repositories::user::UserRepository;
use tourhub_database::repositories::venue::VenueRepository;
use tourhub_entity::moderation::ApprovalStatus;
use tourhub_entity::user::{AdminPermission, Role};

use crate::context::RequestContext;

/// Snapshot of platform activity for the admin dashboard.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PlatformOverview {
    /// Confirmed booking revenue in cents.
    pub total_revenue_cents: i64,
    /// Number of confirmed bookings.
    pub confirmed_bookings: u64,
    /// Events awaiting review.
    pub pending_events: u64,
    /// Venues awaiting review.
    pub pending_venues: u64,
    /// Registered travelers.
    pub travelers: u64,
    /// Registered organizers.
    pub organizers: u64,
    /// Registered venue hosts.
    pub venue_hosts: u64,
    /// Registered doctors.
    pub doctors: u64,
}

/// Builds platform reports; financial numbers are gated separately from
/// the moderation permissions.
#[derive(Clone)]
pub struct ReportService {
    booking_repo: Arc<BookingRepository>,
    event_repo: Arc<EventRepository>,
    venue_repo: Arc<VenueRepository>,
    user_repo: Arc<UserRepository>,
}

impl ReportService {
    /// Create a new report service.
    pub fn new(
        booking_repo: Arc<BookingRepository>,
        event_repo: Arc<EventRepository>,
        venue_repo: Arc<VenueRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            booking_repo,
            event_repo,
            venue_repo,
            user_repo,
        }
    }

    /// Full platform overview, including revenue.
    pub async fn overview(&self, ctx: &RequestContext) -> AppResult<PlatformOverview> {
        access::require_permission(&ctx.actor, AdminPermission::FinancialAccess)?;

        Ok(PlatformOverview {
            total_revenue_cents: self.booking_repo.total_revenue_cents().await?,
            confirmed_bookings: self.booking_repo.count_confirmed().await?,
            pending_events: self
                .event_repo
                .count_by_status(ApprovalStatus::Pending)
                .await?,
            pending_venues: self
                .venue_repo
                .count_by_status(ApprovalStatus::Pending)
                .await?,
            travelers: self.user_repo.count_by_role(Role::User).await?,
            organizers: self.user_repo.count_by_role(Role::Organizer).await?,
            venue_hosts: self.user_repo.count_by_role(Role::VenueHost).await?,
            doctors: self.user_repo.count_by_role(Role::Doctor).await?,
        })
    }
}
