//! Scope filters for list endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A narrowing predicate applied on top of the authorization rules.
///
/// A scope filter only ever shrinks the result set a caller is already
/// authorized to see; it never grants access to additional records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScopeFilter {
    /// Restrict to resources owned by this actor (organizer, host, doctor).
    pub owner_id: Option<Uuid>,
    /// Restrict to a city.
    pub city: Option<String>,
    /// Restrict to a category.
    pub category: Option<String>,
}

