//! # tourhub-api
//!
//! HTTP layer for TourHub: Axum router, extractors, middleware, request
//! DTOs, and handlers. Handlers stay thin — they translate HTTP into
//! service calls and service results into JSON.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
