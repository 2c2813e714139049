//! User notifications
//!
//! Outcomes of user actions are reported as [`Notification`]s rather than
//! errors. The shell prints them; tests read them back from a
//! [`NotificationLog`].

use std::fmt;

use parking_lot::Mutex;
use serde::Serialize;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Info,
    Error,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            Level::Success => "ok",
            Level::Info => "info",
            Level::Error => "error",
        };
        write!(f, "[{tag}] {}", self.message)
    }
}

/// Sink for notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// In-memory notifier that keeps everything until drained.
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: Mutex<Vec<Notification>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every notification recorded so far.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.lock())
    }

    /// Most recent notification.
    pub fn last(&self) -> Option<Notification> {
        self.entries.lock().last().cloned()
    }

    /// Messages recorded so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        tracing::debug!(level = ?notification.level, message = %notification.message, "notification");
        self.entries.lock().push(notification);
    }
}
