pub mod aggregate;

pub use aggregate::{mark_all_read, unread_count, Notification, NotificationKind};
