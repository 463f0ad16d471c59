// ABOUTME: Footer message for the reorder editor, reporting refresh results until it times out

use std::time::{Duration, Instant};

/// How long a footer message stays up.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// A refresh from tmux was applied.
    Success,
    /// tmux could not be queried; the list was left alone.
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    shown_at: Instant,
    ttl: Duration,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::with_ttl(message, NotificationKind::Success, NOTIFICATION_TTL)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_ttl(message, NotificationKind::Error, NOTIFICATION_TTL)
    }

    pub fn with_ttl(message: impl Into<String>, kind: NotificationKind, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
            ttl,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.ttl
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}
