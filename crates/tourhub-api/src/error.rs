//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse` implementation lives in `tourhub-core` alongside the
//! `AppError` type it is implemented for (Rust's orphan rule requires the
//! impl to reside in the crate that defines the type). It is re-exported
//! here so the HTTP error surface remains addressable from the API layer.

pub use tourhub_core::error::ApiErrorResponse;
