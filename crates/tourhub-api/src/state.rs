//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use tourhub_auth::jwt::decoder::JwtDecoder;
use tourhub_auth::session::manager::SessionManager;
use tourhub_core::config::AppConfig;
use tourhub_database::repositories::event::EventRepository;
use tourhub_database::repositories::venue::VenueRepository;
use tourhub_service::appointment::AppointmentService;
use tourhub_service::auth::AuthService;
use tourhub_service::booking::BookingService;
use tourhub_service::event::EventService;
use tourhub_service::moderation::ModerationService;
use tourhub_service::report::ReportService;
use tourhub_service::user::AdminUserService;
use tourhub_service::venue::VenueService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Session lifecycle manager
    pub session_manager: Arc<SessionManager>,

    // ── Services ─────────────────────────────────────────────
    /// Authentication flows
    pub auth_service: Arc<AuthService>,
    /// Event catalog
    pub event_service: Arc<EventService>,
    /// Venue catalog
    pub venue_service: Arc<VenueService>,
    /// Event moderation workflow
    pub event_moderation: Arc<ModerationService<EventRepository>>,
    /// Venue moderation workflow
    pub venue_moderation: Arc<ModerationService<VenueRepository>>,
    /// Ticket bookings
    pub booking_service: Arc<BookingService>,
    /// Medical appointments
    pub appointment_service: Arc<AppointmentService>,
    /// Admin account management
    pub admin_user_service: Arc<AdminUserService>,
    /// Platform reporting
    pub report_service: Arc<ReportService>,
}
