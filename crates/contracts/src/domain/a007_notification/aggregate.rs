use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Approved,
    Rejected,
    Completed,
    Info,
}

impl NotificationKind {
    /// Icon name for the header dropdown, resolved by the shared icon set.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Approved => "check-circle",
            NotificationKind::Rejected => "x-circle",
            NotificationKind::Completed => "check-circle",
            NotificationKind::Info => "info",
        }
    }
}

/// Header-bell entry. `time` is a relative display string, not a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub message: String,
    pub time: String,
    pub read: bool,
}

/// Count feeding the red dot on the bell icon.
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

/// Flip every notification to read, as the "모두 읽음" action does.
pub fn mark_all_read(notifications: &mut [Notification]) {
    for n in notifications.iter_mut() {
        n.read = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_count_matches_seed() {
        let notifications = crate::seed::notifications();
        assert_eq!(notifications.len(), 5);
        assert_eq!(unread_count(&notifications), 2);
    }

    #[test]
    fn mark_all_read_clears_the_counter() {
        let mut notifications = crate::seed::notifications();
        mark_all_read(&mut notifications);
        assert_eq!(unread_count(&notifications), 0);
        // Idempotent.
        mark_all_read(&mut notifications);
        assert_eq!(unread_count(&notifications), 0);
    }
}
