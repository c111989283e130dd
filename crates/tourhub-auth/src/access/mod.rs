//! Role-scoped authorization.
//!
//! Every request is authorized by evaluating an ordered rule list over a
//! typed [`Actor`], an [`Operation`], and an optional target resource.
//! The rules live in [`policy`]; the surrounding modules define the
//! vocabulary.

pub mod actor;
pub mod operation;
pub mod policy;

pub use actor::Actor;
pub use operation::{Operation, ResourceKind};
pub use policy::{
    AccessTarget, ListingVisibility, authorize, listing_visibility, require_permission,
};
