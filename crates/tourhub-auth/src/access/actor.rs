//! The caller identity evaluated by the authorization rules.

use std::collections::HashSet;

use uuid::Uuid;

use tourhub_entity::user::{AdminPermission, Role};

use crate::jwt::Claims;

/// Any caller of the system, authenticated or not.
///
/// Modeled as a tagged union so permission checks only apply to the
/// `Admin` variant: there is no way to ask a traveler for its permission
/// set, and no string comparison anywhere in an authorization decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    /// An unauthenticated caller.
    Anonymous,
    /// A traveler.
    User {
        /// Account id.
        id: Uuid,
    },
    /// A doctor taking appointments.
    Doctor {
        /// Account id.
        id: Uuid,
    },
    /// An event organizer.
    Organizer {
        /// Account id.
        id: Uuid,
    },
    /// A venue host.
    VenueHost {
        /// Account id.
        id: Uuid,
    },
    /// A platform administrator with a fine-grained permission set.
    Admin {
        /// Account id.
        id: Uuid,
        /// Granted capabilities.
        permissions: HashSet<AdminPermission>,
    },
}

impl Actor {
    /// Build an actor from validated JWT claims.
    pub fn from_claims(claims: &Claims) -> Self {
        Self::from_parts(claims.role, claims.sub, claims.permissions.iter().copied())
    }

    fn from_parts(
        role: Role,
        id: Uuid,
        permissions: impl IntoIterator<Item = AdminPermission>,
    ) -> Self {
        match role {
            Role::User => Self::User { id },
            Role::Doctor => Self::Doctor { id },
            Role::Organizer => Self::Organizer { id },
            Role::VenueHost => Self::VenueHost { id },
            Role::Admin => Self::Admin {
                id,
                permissions: permissions.into_iter().collect(),
            },
        }
    }

    /// The account id, if the actor is authenticated.
    pub fn id(&self) -> Option<Uuid> {
        match self {
            Self::Anonymous => None,
            Self::User { id }
            | Self::Doctor { id }
            | Self::Organizer { id }
            | Self::VenueHost { id }
            | Self::Admin { id, .. } => Some(*id),
        }
    }

    /// Whether the actor is an administrator.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin { .. })
    }

    /// Whether the actor is an administrator holding the permission.
    /// Always `false` for every other variant.
    pub fn has_permission(&self, permission: AdminPermission) -> bool {
        match self {
            Self::Admin { permissions, .. } => permissions.contains(&permission),
            _ => false,
        }
    }

    /// Whether the actor is the owner of the given account id.
    pub fn is_actor(&self, account_id: Uuid) -> bool {
        self.id() == Some(account_id)
    }

    /// The role tag, if authenticated.
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Anonymous => None,
            Self::User { .. } => Some(Role::User),
            Self::Doctor { .. } => Some(Role::Doctor),
            Self::Organizer { .. } => Some(Role::Organizer),
            Self::VenueHost { .. } => Some(Role::VenueHost),
            Self::Admin { .. } => Some(Role::Admin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_check_only_applies_to_admins() {
        let id = Uuid::new_v4();
        let organizer = Actor::Organizer { id };
        assert!(!organizer.has_permission(AdminPermission::ManageEvents));

        let admin = Actor::Admin {
            id,
            permissions: [AdminPermission::ManageEvents].into_iter().collect(),
        };
        assert!(admin.has_permission(AdminPermission::ManageEvents));
        assert!(!admin.has_permission(AdminPermission::ManageVenues));
    }

    #[test]
    fn test_anonymous_has_no_identity() {
        assert_eq!(Actor::Anonymous.id(), None);
        assert_eq!(Actor::Anonymous.role(), None);
    }
}
