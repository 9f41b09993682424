/// Transient, user-visible progress and error notifications. The
/// services emit them on non-fatal paths; the production implementation
/// logs through tracing, tests record them.
pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Drops every notification. Useful where a caller has no surface to
/// show them on.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn info(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
