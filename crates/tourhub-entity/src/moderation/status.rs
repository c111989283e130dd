//! Approval status enumeration and transition rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Moderation state of an Event or Venue.
///
/// Every resource starts `Pending`. Only admins move it to `Approved` or
/// `Rejected`, and neither of those states transitions back: a decided
/// resource stays decided, and owner edits never change the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "approval_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    /// Awaiting admin review; hidden from public listings.
    Pending,
    /// Cleared for public listing (subject to the active toggle).
    Approved,
    /// Declined with a mandatory reason; hidden from public listings.
    Rejected,
}

impl ApprovalStatus {
    /// Whether a moderation decision may be applied from this state.
    ///
    /// Decisions only apply to `Pending`; approving or rejecting an
    /// already-decided resource must fail rather than overwrite.
    pub fn can_transition_to(&self, next: ApprovalStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved) | (Self::Pending, Self::Rejected)
        )
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApprovalStatus {
    type Err = tourhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(tourhub_core::AppError::validation(format!(
                "Invalid approval status: '{s}'. Expected one of: pending, approved, rejected"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pending_transitions() {
        assert!(ApprovalStatus::Pending.can_transition_to(ApprovalStatus::Approved));
        assert!(ApprovalStatus::Pending.can_transition_to(ApprovalStatus::Rejected));
        assert!(!ApprovalStatus::Approved.can_transition_to(ApprovalStatus::Rejected));
        assert!(!ApprovalStatus::Approved.can_transition_to(ApprovalStatus::Pending));
        assert!(!ApprovalStatus::Rejected.can_transition_to(ApprovalStatus::Approved));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "approved".parse::<ApprovalStatus>().unwrap(),
            ApprovalStatus::Approved
        );
        assert!("deleted".parse::<ApprovalStatus>().is_err());
    }
}
