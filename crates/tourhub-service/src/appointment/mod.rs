//! Medical appointment services.

pub mod service;

pub use service::AppointmentService;
