//! Platform reporting for the admin dashboard.

pub mod service;

pub use service::{PlatformOverview, ReportService};
