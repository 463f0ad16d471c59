// ABOUTME: Presentation-only editor state: help overlay visibility and the footer notification
// Kept out of EditorState so the reducer only ever sees list, cursor and mode

use crate::app::notification::Notification;

#[derive(Debug, Default)]
pub struct ViewState {
    pub help_visible: bool,
    pub notification: Option<Notification>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Drops the notification once its display time is up.
    pub fn expire_notification(&mut self) {
        if self.notification.as_ref().is_some_and(Notification::is_expired) {
            self.notification = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::notification::NotificationKind;
    use std::time::Duration;

    #[test]
    fn test_help_toggle() {
        let mut view = ViewState::new();
        view.toggle_help();
        assert!(view.help_visible);
        view.toggle_help();
        assert!(!view.help_visible);
    }

    #[test]
    fn test_live_notification_is_kept() {
        let mut view = ViewState::new();
        view.notify(Notification::success("saved"));
        view.expire_notification();
        assert!(view.notification.is_some());
    }

    #[test]
    fn test_expired_notification_is_dropped() {
        let mut view = ViewState::new();
        view.notify(Notification::with_ttl("gone", NotificationKind::Error, Duration::ZERO));

        view.expire_notification();
        assert!(view.notification.is_none());
    }
}
