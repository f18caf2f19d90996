//! Notifications on the terminal.

use projdesk_app::{Notification, Notifier};

/// Prints each notification to stderr as it arrives.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{notification}");
    }
}
