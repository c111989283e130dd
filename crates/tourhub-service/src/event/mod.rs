//! Event catalog services.

pub mod service;

pub use service::{CreateEventRequest, EventService};
