//! Transient user notifications ("toasts").

use std::fmt;
use std::sync::{Mutex, MutexGuard};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// The operation succeeded.
    Success,
    /// The operation failed or the input was rejected.
    Error,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity
    pub level: Level,
    /// Text shown to the user
    pub message: String,
}

impl Notification {
    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            Level::Success => write!(f, "✔ {}", self.message),
            Level::Error => write!(f, "✘ {}", self.message),
        }
    }
}

/// Delivers notifications to the user.
pub trait Notifier: Send + Sync {
    /// Shows a notification.
    fn notify(&self, notification: Notification);
}

/// A notifier that keeps every notification in memory.
///
/// Useful for tests and for front ends that drain toasts after each action.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.notifications
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns all notifications recorded so far.
    pub fn all(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// Returns and clears the recorded notifications.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.lock())
    }

    /// Returns the recorded messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|n| n.message.clone()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.lock().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notification::success("saved"));
        notifier.notify(Notification::error("failed"));

        assert_eq!(notifier.messages(), vec!["saved", "failed"]);
        let taken = notifier.take();
        assert_eq!(taken.len(), 2);
        assert_eq!(taken[1].level, Level::Error);
        assert!(notifier.all().is_empty());
    }

    #[test]
    fn test_notification_display() {
        assert_eq!(Notification::success("ok").to_string(), "✔ ok");
        assert_eq!(Notification::error("no").to_string(), "✘ no");
    }
}
