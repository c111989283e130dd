//! # tourhub-entity
//!
//! Domain entity models for TourHub. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod appointment;
pub mod booking;
pub mod event;
pub mod moderation;
pub mod session;
pub mod user;
pub mod venue;
