//! # tourhub-service
//!
//! Business logic services for TourHub. Each service orchestrates
//! repositories, the cache, the access policy, and the notifier; the HTTP
//! layer stays thin. The `moderation` module carries the approval workflow
//! shared by events and venues, and `listing::refine` the pure filter/sort
//! contract used by the admin dashboards.

pub mod appointment;
pub mod auth;
pub mod booking;
pub mod context;
pub mod event;
pub mod listing;
pub mod moderation;
pub mod notify;
pub mod report;
pub mod user;
pub mod venue;
