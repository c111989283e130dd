//! Account administration services.

pub mod admin;

pub use admin::{AdminUserService, CreateAdminRequest, CustomerSummary};
