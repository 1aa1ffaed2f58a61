// src/ui/mod.rs - UI module tree and shared notification types

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub mod admin;
pub mod app;
pub mod hooks;
pub mod layout;
pub mod router;
pub mod state;
pub mod storefront;

pub use app::App;
pub use router::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    /// Toast accent classes per kind.
    pub fn classes(&self) -> &'static str {
        match self {
            Self::Success => "bg-green-50 border-green-200 text-green-800",
            Self::Error => "bg-red-50 border-red-200 text-red-800",
            Self::Info => "bg-blue-50 border-blue-200 text-blue-800",
        }
    }
}

/// Transient toast shown after admin mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            message: message.into(),
            kind,
            timestamp: Utc::now(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_constructors() {
        let toast = Notification::success("Saved", "Product updated successfully");
        assert_eq!(toast.kind, NotificationKind::Success);
        assert_eq!(toast.title, "Saved");

        let failure = Notification::error("Error", "Failed to save product");
        assert_eq!(failure.kind, NotificationKind::Error);
        assert_ne!(toast.id, failure.id);
    }

    #[test]
    fn test_kind_classes_differ() {
        assert_ne!(
            NotificationKind::Success.classes(),
            NotificationKind::Error.classes()
        );
    }
}
