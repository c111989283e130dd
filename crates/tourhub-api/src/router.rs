//! Route definitions for the TourHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(event_routes())
        .merge(venue_routes())
        .merge(booking_routes())
        .merge(appointment_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, refresh, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// User self-service endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", put(handlers::user::update_profile))
        .route("/users/me/password", put(handlers::user::change_password))
}

/// Public catalog + organizer CRUD for events
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(handlers::event::list_events))
        .route("/events", post(handlers::event::create_event))
        .route("/events/mine", get(handlers::event::list_my_events))
        .route("/events/{id}", get(handlers::event::get_event))
        .route("/events/{id}", put(handlers::event::update_event))
        .route("/events/{id}", delete(handlers::event::delete_event))
        .route("/events/{id}/active", put(handlers::event::set_event_active))
}

/// Public catalog + host CRUD for venues
fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(handlers::venue::list_venues))
        .route("/venues", post(handlers::venue::create_venue))
        .route("/venues/mine", get(handlers::venue::list_my_venues))
        .route("/venues/{id}", get(handlers::venue::get_venue))
        .route("/venues/{id}", put(handlers::venue::update_venue))
        .route("/venues/{id}", delete(handlers::venue::delete_venue))
        .route("/venues/{id}/active", put(handlers::venue::set_venue_active))
}

/// Traveler booking endpoints
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(handlers::booking::create_booking))
        .route("/bookings", get(handlers::booking::list_bookings))
        .route("/bookings/{id}", get(handlers::booking::get_booking))
        .route(
            "/bookings/{id}/cancel",
            put(handlers::booking::cancel_booking),
        )
}

/// Traveler/doctor appointment endpoints
fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/appointments",
            post(handlers::appointment::create_appointment),
        )
        .route(
            "/appointments",
            get(handlers::appointment::list_appointments),
        )
        .route(
            "/appointments/{id}",
            get(handlers::appointment::get_appointment),
        )
        .route(
            "/appointments/{id}/status",
            put(handlers::appointment::update_appointment_status),
        )
}

/// Admin-only endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        // Event moderation
        .route("/admin/events", get(handlers::admin::events::list_events))
        .route(
            "/admin/events/{id}/approve",
            put(handlers::admin::events::approve_event),
        )
        .route(
            "/admin/events/{id}/reject",
            put(handlers::admin::events::reject_event),
        )
        .route(
            "/admin/events/{id}/feature",
            put(handlers::admin::events::feature_event),
        )
        .route(
            "/admin/events/{id}/active",
            put(handlers::admin::events::set_event_active),
        )
        // Venue moderation
        .route("/admin/venues", get(handlers::admin::venues::list_venues))
        .route(
            "/admin/venues/{id}/approve",
            put(handlers::admin::venues::approve_venue),
        )
        .route(
            "/admin/venues/{id}/reject",
            put(handlers::admin::venues::reject_venue),
        )
        .route(
            "/admin/venues/{id}/feature",
            put(handlers::admin::venues::feature_venue),
        )
        .route(
            "/admin/venues/{id}/active",
            put(handlers::admin::venues::set_venue_active),
        )
        // Account management
        .route("/admin/users", get(handlers::admin::users::list_users))
        .route("/admin/users/{id}", get(handlers::admin::users::get_user))
        .route(
            "/admin/users/{id}/status",
            put(handlers::admin::users::change_status),
        )
        .route("/admin/admins", post(handlers::admin::users::create_admin))
        .route(
            "/admin/admins/{id}/permissions",
            put(handlers::admin::users::update_permissions),
        )
        // Booking oversight
        .route(
            "/admin/bookings",
            get(handlers::admin::bookings::list_bookings),
        )
        // Reports
        .route(
            "/admin/reports/overview",
            get(handlers::admin::reports::overview),
        )
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/detailed", get(handlers::health::detailed_health))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new().allow_headers(Any);

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    cors.max_age(std::time::Duration::from_secs(
        cors_config.max_age_seconds,
    ))
}
