//! Notifier implementations.

use tracing::{error, info};

use tourhub_core::traits::Notifier;

/// Notifier that emits structured log lines.
///
/// Stands in for the user-facing toast channel; delivery is best-effort
/// and can never fail the operation that triggered it.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl LogNotifier {
    /// Create a new log notifier.
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    fn info(&self, message: &str) {
        info!(notification = message, level = "info", "Notification");
    }

    fn success(&self, message: &str) {
        info!(notification = message, level = "success", "Notification");
    }

    fn error(&self, message: &str) {
        error!(notification = message, level = "error", "Notification");
    }
}

/// Notifier that drops everything; used in tests.
#[derive(Debug, Clone, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn info(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
