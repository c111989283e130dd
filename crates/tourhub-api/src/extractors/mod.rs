//! Request extractors.

pub mod auth;
pub mod pagination;

pub use auth::{AuthUser, MaybeAuthUser};
pub use pagination::{ListParams, PaginationParams};
