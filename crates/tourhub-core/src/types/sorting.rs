//! Sort keys accepted by list endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Sort order for refined listings.
///
/// All orderings are stable: items that compare equal keep their previous
/// relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Designated date field, newest first.
    #[default]
    Recent,
    /// Designated date field, oldest first.
    Oldest,
    /// Display name, ascending (case-insensitive).
    NameAsc,
    /// Display name, descending (case-insensitive).
    NameDesc,
    /// Booking count, highest first.
    BookingsDesc,
}

impl SortKey {
    /// Return the key as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Oldest => "oldest",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::BookingsDesc => "bookings-desc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" => Ok(Self::Recent),
            "oldest" => Ok(Self::Oldest),
            "name-asc" => Ok(Self::NameAsc),
            "name-desc" => Ok(Self::NameDesc),
            "bookings-desc" => Ok(Self::BookingsDesc),
            _ => Err(AppError::validation(format!(
                "Invalid sort key: '{s}'. Expected one of: recent, oldest, name-asc, name-desc, bookings-desc"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trip() {
        for key in [
            SortKey::Recent,
            SortKey::Oldest,
            SortKey::NameAsc,
            SortKey::NameDesc,
            SortKey::BookingsDesc,
        ] {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert!("random".parse::<SortKey>().is_err());
    }
}
