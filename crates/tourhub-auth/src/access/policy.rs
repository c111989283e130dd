//! The ordered authorization rules.
//!
//! [`authorize`] evaluates rules top to bottom, first match wins:
//!
//! 1. An admin is gated by its fine-grained permission set: a gated
//!    operation without the permission is rejected, everything else on the
//!    admin surface (including reads of pending/rejected items) is allowed.
//! 2. Moderation by a non-admin is rejected.
//! 3. Create requires the resource kind's owning role; update/delete
//!    require ownership of the target (the counterparty of a shared
//!    record may update it — a doctor moving an appointment's status).
//! 4. Reads are allowed for anyone when the target is publicly visible,
//!    and for the target's owner or counterparty otherwise.
//! 5. Everything else is rejected.
//!
//! A scope filter applied to a listing only narrows the set these rules
//! produce; it never widens it.

use uuid::Uuid;

use tourhub_core::error::AppError;
use tourhub_core::result::AppResult;
use tourhub_entity::moderation::{ApprovalStatus, Moderable};
use tourhub_entity::user::Role;

use super::actor::Actor;
use super::operation::{Operation, ResourceKind, required_admin_permission};

/// The slice of a target resource the rules need to see.
#[derive(Debug, Clone, Default)]
pub struct AccessTarget {
    /// The owning actor, when the resource has one.
    pub owner_id: Option<Uuid>,
    /// The second party of a shared record (the doctor on an appointment).
    pub counterparty_id: Option<Uuid>,
    /// Moderation state, for moderable resources.
    pub approval_status: Option<ApprovalStatus>,
    /// Activity toggle, for moderable resources.
    pub is_active: Option<bool>,
}

impl AccessTarget {
    /// Target view of a moderable resource.
    pub fn moderable(resource: &impl Moderable) -> Self {
        Self {
            owner_id: Some(resource.owner_id()),
            counterparty_id: None,
            approval_status: Some(resource.approval_status()),
            is_active: Some(resource.is_active()),
        }
    }

    /// Target view of a privately owned record (booking, profile).
    pub fn owned(owner_id: Uuid) -> Self {
        Self {
            owner_id: Some(owner_id),
            ..Self::default()
        }
    }

    /// Target view of a two-party record (appointment).
    pub fn shared(owner_id: Uuid, counterparty_id: Uuid) -> Self {
        Self {
            owner_id: Some(owner_id),
            counterparty_id: Some(counterparty_id),
            ..Self::default()
        }
    }

    /// The public-visibility invariant: approved **and** active.
    ///
    /// Records without a moderation envelope are never publicly visible.
    pub fn is_publicly_visible(&self) -> bool {
        self.approval_status == Some(ApprovalStatus::Approved) && self.is_active == Some(true)
    }

    fn is_owned_by(&self, actor: &Actor) -> bool {
        matches!(self.owner_id, Some(owner) if actor.is_actor(owner))
    }

    fn is_counterparty(&self, actor: &Actor) -> bool {
        matches!(self.counterparty_id, Some(party) if actor.is_actor(party))
    }
}

/// The role that owns newly created resources of a kind, where creation
/// is authenticated at all (account registration is open).
fn owning_role(kind: ResourceKind) -> Option<Role> {
    match kind {
        ResourceKind::Event => Some(Role::Organizer),
        ResourceKind::Venue => Some(Role::VenueHost),
        ResourceKind::Booking | ResourceKind::Appointment => Some(Role::User),
        ResourceKind::User => None,
    }
}

/// Evaluate the rule list for one operation. `target` is absent for
/// creations and listings; reads and mutations of a specific resource
/// must pass the target's access view.
pub fn authorize(
    actor: &Actor,
    op: Operation,
    kind: ResourceKind,
    target: Option<&AccessTarget>,
) -> AppResult<()> {
    // Rule 1: admins are gated by their permission set, nothing else.
    if actor.is_admin() {
        return match required_admin_permission(kind, op) {
            Some(permission) if !actor.has_permission(permission) => {
                Err(AppError::forbidden(format!(
                    "Admin permission '{permission}' required"
                )))
            }
            _ => Ok(()),
        };
    }

    // Rule 2: moderation is admin-only.
    if op == Operation::Moderate {
        return Err(AppError::forbidden("Moderation requires an admin account"));
    }

    match op {
        Operation::Create => {
            let required = owning_role(kind);
            if required.is_some() && actor.role() == required {
                Ok(())
            } else {
                Err(AppError::forbidden(format!(
                    "Creating a {} requires a different account type",
                    kind.as_str()
                )))
            }
        }
        Operation::Update | Operation::Delete => {
            let Some(target) = target else {
                return Err(AppError::forbidden("Ownership cannot be established"));
            };
            if target.is_owned_by(actor) {
                return Ok(());
            }
            // The second party of a shared record may update it, but
            // never delete it.
            if op == Operation::Update && target.is_counterparty(actor) {
                return Ok(());
            }
            Err(AppError::forbidden(format!(
                "Only the owner may modify this {}",
                kind.as_str()
            )))
        }
        Operation::List => Ok(()),
        Operation::Read => {
            let Some(target) = target else {
                return Ok(());
            };
            if target.is_publicly_visible()
                || target.is_owned_by(actor)
                || target.is_counterparty(actor)
            {
                Ok(())
            } else {
                Err(AppError::forbidden(format!(
                    "This {} is not visible to you",
                    kind.as_str()
                )))
            }
        }
        Operation::Moderate => unreachable!("handled above"),
    }
}

/// Require a specific admin permission outright.
///
/// Used for cross-cutting admin capabilities that are not tied to one
/// resource kind, such as financial reporting. Non-admins always fail.
pub fn require_permission(
    actor: &Actor,
    permission: tourhub_entity::user::AdminPermission,
) -> AppResult<()> {
    if actor.has_permission(permission) {
        Ok(())
    } else {
        Err(AppError::forbidden(format!(
            "Admin permission '{permission}' required"
        )))
    }
}

/// How wide a moderation-aware listing may be for this caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingVisibility {
    /// Only approved, active resources.
    Public,
    /// Every resource owned by this actor, any moderation state.
    Own(Uuid),
    /// Everything, any moderation state.
    All,
}

/// Determine listing visibility: admins see everything, owners see their
/// own resources in any state, everyone else sees the public subset.
pub fn listing_visibility(actor: &Actor, kind: ResourceKind) -> ListingVisibility {
    match (actor, kind) {
        (Actor::Admin { .. }, _) => ListingVisibility::All,
        (Actor::Organizer { id }, ResourceKind::Event) => ListingVisibility::Own(*id),
        (Actor::VenueHost { id }, ResourceKind::Venue) => ListingVisibility::Own(*id),
        _ => ListingVisibility::Public,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use tourhub_entity::user::AdminPermission;

    use super::*;

    fn admin_with(perms: &[AdminPermission]) -> Actor {
        Actor::Admin {
            id: Uuid::new_v4(),
            permissions: perms.iter().copied().collect(),
        }
    }

    fn moderable_target(status: ApprovalStatus, active: bool, owner: Uuid) -> AccessTarget {
        AccessTarget {
            owner_id: Some(owner),
            counterparty_id: None,
            approval_status: Some(status),
            is_active: Some(active),
        }
    }

    #[test]
    fn test_public_visibility_invariant() {
        let owner = Uuid::new_v4();
        assert!(moderable_target(ApprovalStatus::Approved, true, owner).is_publicly_visible());
        assert!(!moderable_target(ApprovalStatus::Approved, false, owner).is_publicly_visible());
        assert!(!moderable_target(ApprovalStatus::Pending, true, owner).is_publicly_visible());
        assert!(!moderable_target(ApprovalStatus::Rejected, true, owner).is_publicly_visible());
    }

    #[test]
    fn test_non_admin_cannot_moderate_regardless_of_state() {
        let owner = Uuid::new_v4();
        let target = moderable_target(ApprovalStatus::Pending, true, owner);
        for actor in [
            Actor::Anonymous,
            Actor::User { id: owner },
            Actor::Organizer { id: owner },
            Actor::VenueHost { id: owner },
            Actor::Doctor { id: owner },
        ] {
            let err = authorize(&actor, Operation::Moderate, ResourceKind::Event, Some(&target))
                .unwrap_err();
            assert_eq!(err.kind, tourhub_core::error::ErrorKind::Forbidden);
        }
    }

    #[test]
    fn test_admin_moderation_gated_by_permission() {
        let target = moderable_target(ApprovalStatus::Pending, true, Uuid::new_v4());

        let unpermitted = admin_with(&[AdminPermission::ManageVenues]);
        assert!(
            authorize(
                &unpermitted,
                Operation::Moderate,
                ResourceKind::Event,
                Some(&target)
            )
            .is_err()
        );

        let permitted = admin_with(&[AdminPermission::ManageEvents]);
        assert!(
            authorize(
                &permitted,
                Operation::Moderate,
                ResourceKind::Event,
                Some(&target)
            )
            .is_ok()
        );
    }

    #[test]
    fn test_admin_reads_are_ungated() {
        let no_perms = Actor::Admin {
            id: Uuid::new_v4(),
            permissions: HashSet::new(),
        };
        let pending = moderable_target(ApprovalStatus::Pending, true, Uuid::new_v4());
        assert!(
            authorize(&no_perms, Operation::Read, ResourceKind::Event, Some(&pending)).is_ok()
        );
        assert!(authorize(&no_perms, Operation::List, ResourceKind::Venue, None).is_ok());
    }

    #[test]
    fn test_anonymous_reads_only_public_resources() {
        let owner = Uuid::new_v4();
        let public = moderable_target(ApprovalStatus::Approved, true, owner);
        let pending = moderable_target(ApprovalStatus::Pending, true, owner);

        assert!(
            authorize(
                &Actor::Anonymous,
                Operation::Read,
                ResourceKind::Event,
                Some(&public)
            )
            .is_ok()
        );
        assert!(
            authorize(
                &Actor::Anonymous,
                Operation::Read,
                ResourceKind::Event,
                Some(&pending)
            )
            .is_err()
        );
    }

    #[test]
    fn test_owner_reads_own_pending_resource() {
        let owner = Uuid::new_v4();
        let pending = moderable_target(ApprovalStatus::Pending, true, owner);
        let organizer = Actor::Organizer { id: owner };
        let stranger = Actor::Organizer { id: Uuid::new_v4() };

        assert!(
            authorize(&organizer, Operation::Read, ResourceKind::Event, Some(&pending)).is_ok()
        );
        assert!(
            authorize(&stranger, Operation::Read, ResourceKind::Event, Some(&pending)).is_err()
        );
    }

    #[test]
    fn test_create_requires_owning_role() {
        let id = Uuid::new_v4();
        assert!(
            authorize(
                &Actor::Organizer { id },
                Operation::Create,
                ResourceKind::Event,
                None
            )
            .is_ok()
        );
        assert!(
            authorize(
                &Actor::User { id },
                Operation::Create,
                ResourceKind::Event,
                None
            )
            .is_err()
        );
        assert!(
            authorize(
                &Actor::User { id },
                Operation::Create,
                ResourceKind::Booking,
                None
            )
            .is_ok()
        );
        assert!(
            authorize(
                &Actor::Anonymous,
                Operation::Create,
                ResourceKind::Booking,
                None
            )
            .is_err()
        );
    }

    #[test]
    fn test_update_requires_ownership() {
        let owner = Uuid::new_v4();
        let target = moderable_target(ApprovalStatus::Approved, true, owner);

        assert!(
            authorize(
                &Actor::Organizer { id: owner },
                Operation::Update,
                ResourceKind::Event,
                Some(&target)
            )
            .is_ok()
        );
        assert!(
            authorize(
                &Actor::Organizer { id: Uuid::new_v4() },
                Operation::Update,
                ResourceKind::Event,
                Some(&target)
            )
            .is_err()
        );
    }

    #[test]
    fn test_counterparty_may_update_but_not_delete() {
        let patient = Uuid::new_v4();
        let doctor = Uuid::new_v4();
        let target = AccessTarget::shared(patient, doctor);
        let doctor_actor = Actor::Doctor { id: doctor };

        assert!(
            authorize(
                &doctor_actor,
                Operation::Update,
                ResourceKind::Appointment,
                Some(&target)
            )
            .is_ok()
        );
        assert!(
            authorize(
                &doctor_actor,
                Operation::Delete,
                ResourceKind::Appointment,
                Some(&target)
            )
            .is_err()
        );
    }

    #[test]
    fn test_listing_visibility_widths() {
        let id = Uuid::new_v4();
        assert_eq!(
            listing_visibility(&admin_with(&[]), ResourceKind::Event),
            ListingVisibility::All
        );
        assert_eq!(
            listing_visibility(&Actor::Organizer { id }, ResourceKind::Event),
            ListingVisibility::Own(id)
        );
        // An organizer has no owner view over venues.
        assert_eq!(
            listing_visibility(&Actor::Organizer { id }, ResourceKind::Venue),
            ListingVisibility::Public
        );
        assert_eq!(
            listing_visibility(&Actor::Anonymous, ResourceKind::Event),
            ListingVisibility::Public
        );
    }
}
