//! User-Facing Messages
//!
//! Notification collaborator for mutation outcomes. The task list only
//! reports through this seam; how messages reach the user is up to the
//! implementation.

/// Sink for user-visible success/failure messages.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Browser-console notifier used by the app shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        web_sys::console::log_1(&message.into());
    }

    fn error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
    }
}
