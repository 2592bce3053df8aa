use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How long a notification stays visible
pub const NOTIFICATION_TTL_MS: i64 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient, non-blocking message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at >= Duration::milliseconds(NOTIFICATION_TTL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let notification = Notification::success("done");
        assert!(!notification.is_expired(notification.created_at));
        assert!(notification.is_expired(notification.created_at + Duration::seconds(5)));
    }

    #[test]
    fn test_kinds_are_success_or_error() {
        assert_eq!(serde_json::to_value(NotificationKind::Success).unwrap(), "success");
        assert_eq!(serde_json::to_value(NotificationKind::Error).unwrap(), "error");
        assert!(serde_json::from_str::<NotificationKind>("\"info\"").is_err());
    }
}
