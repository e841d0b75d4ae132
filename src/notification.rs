//! Read diagnostics.
//!
//! Non-fatal issues met while pulling entities out of a DXF stream are kept as
//! [`Notification`] items instead of being dropped: group codes no handler
//! consumed, entity kinds this crate does not build, and (in failsafe mode)
//! entities that failed to decode and were skipped.

use std::fmt;

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// Entity kind is not built by this reader.
    NotImplemented,
    /// Group code inside an entity that no handler consumed.
    Warning,
    /// Entity decode error that was recovered from by skipping the entity.
    Error,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotImplemented => write!(f, "NotImplemented"),
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A single diagnostic produced while reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub notification_type: NotificationType,
    pub message: String,
    /// Line of the group code that triggered the notification, when known.
    pub line: Option<usize>,
}

impl Notification {
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
            line: None,
        }
    }

    /// Attach the source line number.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "[{}] line {}: {}", self.notification_type, line, self.message),
            None => write!(f, "[{}] {}", self.notification_type, self.message),
        }
    }
}

/// Notifications gathered over one read.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    /// Record a notification without line information.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.push(Notification::new(notification_type, message));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Get all notifications of a specific type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
