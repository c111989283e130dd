//! Query-string parameters for list endpoints.

use serde::Deserialize;
use uuid::Uuid;

use tourhub_core::types::pagination::PageRequest;
use tourhub_core::types::scope::ScopeFilter;
use tourhub_core::types::sorting::SortKey;

/// Bare pagination parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
}

impl PaginationParams {
    /// Convert into a clamped page request.
    pub fn into_page_request(self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest::new(
            self.page.unwrap_or(defaults.page),
            self.page_size.unwrap_or(defaults.page_size),
        )
    }
}

/// Pagination plus scope narrowing and dashboard refinement parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct ListParams {
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
    /// Narrow to one owner.
    pub owner_id: Option<Uuid>,
    /// Narrow to a city.
    pub city: Option<String>,
    /// Narrow to a category.
    pub category: Option<String>,
    /// Free-text search term.
    pub search: Option<String>,
    /// Sort key for refined listings.
    pub sort: Option<SortKey>,
}

impl ListParams {
    /// The pagination part.
    pub fn page_request(&self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest::new(
            self.page.unwrap_or(defaults.page),
            self.page_size.unwrap_or(defaults.page_size),
        )
    }

    /// The scope-narrowing part.
    pub fn scope(&self) -> ScopeFilter {
        ScopeFilter {
            owner_id: self.owner_id,
            city: self.city.clone(),
            category: self.category.clone(),
        }
    }

    /// The search term, defaulting to empty.
    pub fn search_term(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }

    /// The sort key, defaulting to `recent`.
    pub fn sort_key(&self) -> SortKey {
        self.sort.unwrap_or_default()
    }
}
