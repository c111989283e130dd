//! Operations and resource kinds evaluated by the authorization rules.

use tourhub_entity::user::AdminPermission;

/// What the caller is trying to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Enumerate resources.
    List,
    /// Fetch a single resource.
    Read,
    /// Create a resource the caller will own.
    Create,
    /// Mutate a resource's payload.
    Update,
    /// Remove a resource.
    Delete,
    /// Apply a moderation action (approve, reject, feature, deactivate).
    Moderate,
}

impl Operation {
    /// Whether this operation only reads state.
    pub fn is_read(&self) -> bool {
        matches!(self, Self::List | Self::Read)
    }
}

/// The kind of resource being targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Ticketed events.
    Event,
    /// "Hidden gem" venues.
    Venue,
    /// Ticket bookings.
    Booking,
    /// Medical appointments.
    Appointment,
    /// User accounts.
    User,
}

impl ResourceKind {
    /// Noun used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Venue => "venue",
            Self::Booking => "booking",
            Self::Appointment => "appointment",
            Self::User => "user",
        }
    }
}

/// The fine-grained permission an admin needs for an operation, if any.
///
/// Reads of the moderation catalog (events, venues) are ungated: every
/// admin may inspect pending and rejected items. Reads of people's private
/// records and every mutation are gated per resource type.
pub fn required_admin_permission(
    kind: ResourceKind,
    op: Operation,
) -> Option<AdminPermission> {
    if op.is_read() && matches!(kind, ResourceKind::Event | ResourceKind::Venue) {
        return None;
    }
    match kind {
        ResourceKind::Event => Some(AdminPermission::ManageEvents),
        ResourceKind::Venue => Some(AdminPermission::ManageVenues),
        ResourceKind::Booking => Some(AdminPermission::ManageBookings),
        ResourceKind::Appointment => Some(AdminPermission::ManageAppointments),
        ResourceKind::User => Some(AdminPermission::ManageUsers),
    }
}
