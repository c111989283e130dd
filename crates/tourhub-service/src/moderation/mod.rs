//! The admin approval workflow for events and venues.

pub mod service;

pub use service::ModerationService;
