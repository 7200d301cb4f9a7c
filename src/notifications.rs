//! Transient toasts for failures the user should see.

use crate::consts::cli_consts::notifications::{MAX_TOASTS, toast_ttl};
use crate::error_classifier::LogLevel;
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub level: LogLevel,
    pub created_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= toast_ttl()
    }
}

/// Bounded queue of toasts, newest last.
#[derive(Debug, Default)]
pub struct Notifications {
    toasts: VecDeque<Toast>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a toast, evicting the oldest once the queue is full.
    pub fn push(&mut self, message: impl Into<String>, level: LogLevel, now: Instant) {
        let message = message.into();
        // Repeated failures of the same poller restart the existing toast.
        self.toasts.retain(|toast| toast.message != message);
        while self.toasts.len() >= MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            message,
            level,
            created_at: now,
        });
    }

    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| !toast.is_expired(now));
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn toasts_expire_after_ttl() {
        let start = Instant::now();
        let mut notifications = Notifications::new();
        notifications.push("overview: timeout", LogLevel::Warn, start);

        notifications.prune(start + Duration::from_secs(4));
        assert_eq!(notifications.len(), 1);

        notifications.prune(start + Duration::from_secs(5));
        assert!(notifications.is_empty());
    }

    #[test]
    fn queue_is_bounded_and_keeps_newest() {
        let now = Instant::now();
        let mut notifications = Notifications::new();
        for i in 0..5 {
            notifications.push(format!("failure {}", i), LogLevel::Warn, now);
        }

        let messages: Vec<_> = notifications.visible().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["failure 2", "failure 3", "failure 4"]);
    }

    #[test]
    fn duplicate_message_is_refreshed_not_stacked() {
        let start = Instant::now();
        let mut notifications = Notifications::new();
        notifications.push("network: 503", LogLevel::Warn, start);
        notifications.push("network: 503", LogLevel::Warn, start + Duration::from_secs(3));

        assert_eq!(notifications.len(), 1);
        notifications.prune(start + Duration::from_secs(6));
        assert_eq!(notifications.len(), 1);
    }
}
