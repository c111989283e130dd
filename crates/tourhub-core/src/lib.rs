//! # tourhub-core
//!
//! Core crate for TourHub. Contains configuration schemas, shared
//! pagination/sorting/scope types, the cache and notifier traits, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other TourHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
