//! # tourhub-database
//!
//! PostgreSQL connection management, migrations, and repository
//! implementations for TourHub. Repositories are thin: one struct per
//! table, returning entity types from `tourhub-entity` and mapping
//! database errors into [`tourhub_core::AppError`].

pub mod connection;
pub mod migration;
pub mod repositories;
