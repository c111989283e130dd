//! Pure list refinement (search + sort) for dashboard views.

pub mod refine;

pub use refine::{ListEntry, filter_and_sort};
