//! Medical appointment entities.

pub mod model;
pub mod status;

pub use model::{Appointment, CreateAppointment};
pub use status::AppointmentStatus;
