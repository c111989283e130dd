//! Fire-and-forget notification sink.

/// Delivery sink for user-facing one-line notifications.
///
/// Notifications are best-effort: implementations must not fail the
/// calling operation, so the methods are infallible by contract.
pub trait Notifier: Send + Sync + 'static {
    /// Informational message.
    fn info(&self, message: &str);

    /// Success message after a completed operation.
    fn success(&self, message: &str);

    /// Error message after a failed operation.
    fn error(&self, message: &str);
}
