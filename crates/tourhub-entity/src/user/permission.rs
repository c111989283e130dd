//! Fine-grained admin permissions.

use serde::{Deserialize, Serialize};

/// A capability held by an Admin account.
///
/// An operation gated on one of these must reject an admin whose set lacks
/// it, even though the account authenticates with the admin role. Non-admin
/// roles never carry permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminPermission {
    /// Manage traveler, doctor, organizer, and host accounts.
    ManageUsers,
    /// Create admin accounts and edit admin permission sets.
    ManageAdmins,
    /// Moderate events (approve, reject, feature, deactivate).
    ManageEvents,
    /// Moderate venues (approve, reject, feature, deactivate).
    ManageVenues,
    /// View and manage all bookings.
    ManageBookings,
    /// View and manage all appointments.
    ManageAppointments,
    /// Access revenue and financial reporting.
    FinancialAccess,
}

impl AdminPermission {
    /// Return the permission as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageUsers => "manage_users",
            Self::ManageAdmins => "manage_admins",
            Self::ManageEvents => "manage_events",
            Self::ManageVenues => "manage_venues",
            Self::ManageBookings => "manage_bookings",
            Self::ManageAppointments => "manage_appointments",
            Self::FinancialAccess => "financial_access",
        }
    }
}

impl std::fmt::Display for AdminPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
