//! Cache key builders for all TourHub cache entries.
//!
//! Centralising key construction prevents typos and makes it easy to find
//! every key the application uses.

use uuid::Uuid;

/// Prefix applied to all TourHub cache keys.
const PREFIX: &str = "tourhub";

// ── Listing keys ───────────────────────────────────────────

/// Cache key for one page of a public listing of a resource type.
///
/// The scope fingerprint folds the owner/city/category filter into the key
/// so differently scoped queries never collide.
pub fn public_listing(resource: &str, scope_fingerprint: &str, page: u64) -> String {
    format!("{PREFIX}:{resource}:public:{scope_fingerprint}:p{page}")
}

/// Pattern that invalidates every cached listing of a resource type.
pub fn listing_pattern(resource: &str) -> String {
    format!("{PREFIX}:{resource}:*")
}

// ── Token keys ─────────────────────────────────────────────

/// Cache key for a blocklisted JWT ID (revoked token).
pub fn jwt_blocklist(jti: Uuid) -> String {
    format!("{PREFIX}:jwt:blocked:{jti}")
}
