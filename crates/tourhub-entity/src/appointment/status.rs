//! Appointment status enumeration and transition rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a medical appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "appointment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Requested by the traveler, awaiting the doctor.
    Pending,
    /// Accepted by the doctor.
    Confirmed,
    /// Visit took place.
    Completed,
    /// Cancelled by either side before completion.
    Cancelled,
}

impl AppointmentStatus {
    /// Whether the doctor may move the appointment into `next`.
    ///
    /// Pending can be confirmed or cancelled; confirmed can be completed
    /// or cancelled; completed and cancelled are final.
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed)
                | (Self::Pending, Self::Cancelled)
                | (Self::Confirmed, Self::Completed)
                | (Self::Confirmed, Self::Cancelled)
        )
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!AppointmentStatus::Completed.can_transition_to(AppointmentStatus::Cancelled));
        assert!(!AppointmentStatus::Cancelled.can_transition_to(AppointmentStatus::Pending));
    }

    #[test]
    fn test_happy_path() {
        assert!(AppointmentStatus::Pending.can_transition_to(AppointmentStatus::Confirmed));
        assert!(AppointmentStatus::Confirmed.can_transition_to(AppointmentStatus::Completed));
    }
}
