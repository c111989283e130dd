//! Cross-crate trait definitions.

pub mod cache;
pub mod notifier;

pub use cache::CacheProvider;
pub use notifier::Notifier;
