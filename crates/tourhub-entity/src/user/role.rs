//! Account role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the marketplace.
///
/// Travelers book events and appointments; doctors take appointments;
/// organizers own events; venue hosts own venues; admins moderate. Fine-
/// grained admin capabilities live in
/// [`crate::user::AdminPermission`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A traveler who browses, books events, and requests appointments.
    User,
    /// A medical professional taking appointments.
    Doctor,
    /// An event organizer; owns the events it creates.
    Organizer,
    /// A "hidden gem" venue host; owns the venues it creates.
    VenueHost,
    /// A platform administrator; capabilities scoped by permission set.
    Admin,
}

impl Role {
    /// Check if this role is admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Doctor => "doctor",
            Self::Organizer => "organizer",
            Self::VenueHost => "venue_host",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = tourhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "doctor" => Ok(Self::Doctor),
            "organizer" => Ok(Self::Organizer),
            "venue_host" => Ok(Self::VenueHost),
            "admin" => Ok(Self::Admin),
            _ => Err(tourhub_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: user, doctor, organizer, venue_host, admin"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("venue_host".parse::<Role>().unwrap(), Role::VenueHost);
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert!("superuser".parse::<Role>().is_err());
    }
}
