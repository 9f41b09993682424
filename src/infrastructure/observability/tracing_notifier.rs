use crate::application::ports::Notifier;

/// Production notifier: transient user-facing messages go to the log
/// stream. The services stay free of any logging concern beyond the
/// port call.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn info(&self, message: &str) {
        tracing::info!(notification = message, "notify");
    }

    fn error(&self, message: &str) {
        tracing::error!(notification = message, "notify");
    }
}
