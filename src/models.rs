//! Frontend Models
//!
//! Data structures matching backend entities. Field names are camelCase on
//! the wire to match Tauri IPC.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque reminder identifier assigned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderId(pub String);

impl ReminderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReminderId {
    fn from(s: &str) -> Self {
        ReminderId(s.to_string())
    }
}

/// Reminder status (matches backend). Cycles
/// `Pending -> InProgress -> Completed -> Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReminderStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl ReminderStatus {
    /// The only transition a card offers
    pub fn next(self) -> Self {
        match self {
            ReminderStatus::Pending => ReminderStatus::InProgress,
            ReminderStatus::InProgress => ReminderStatus::Completed,
            ReminderStatus::Completed => ReminderStatus::Pending,
        }
    }

    /// Human-readable label shown on cards
    pub fn label(self) -> &'static str {
        match self {
            ReminderStatus::Pending => "Pending",
            ReminderStatus::InProgress => "In progress",
            ReminderStatus::Completed => "Completed",
        }
    }

    /// Wire form, also used as the card CSS modifier
    pub fn as_str(self) -> &'static str {
        match self {
            ReminderStatus::Pending => "pending",
            ReminderStatus::InProgress => "in-progress",
            ReminderStatus::Completed => "completed",
        }
    }
}

/// Reminder data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: ReminderId,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub status: ReminderStatus,
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// Record submitted on create; the backend assigns the ID
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub status: ReminderStatus,
}

impl NewReminder {
    /// New reminders always start pending
    pub fn pending(owner_id: String, draft: ReminderDraft) -> Self {
        Self {
            owner_id,
            title: draft.title,
            description: draft.description,
            status: ReminderStatus::Pending,
        }
    }
}

/// Partial update. Only status is patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReminderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReminderStatus>,
}

/// What the reminder form emits on submit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderDraft {
    pub title: String,
    pub description: String,
}

/// Signed-in account (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&ReminderStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let parsed: ReminderStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, ReminderStatus::Completed);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ReminderStatus::Pending.label(), "Pending");
        assert_eq!(ReminderStatus::InProgress.label(), "In progress");
        assert_eq!(ReminderStatus::Completed.label(), "Completed");
    }

    #[test]
    fn test_reminder_from_backend_json() {
        let json = r#"{"id":"abc","ownerId":"u1","title":"Buy milk","description":"2%","status":"pending"}"#;
        let reminder: Reminder = serde_json::from_str(json).unwrap();
        assert_eq!(reminder.id, ReminderId::from("abc"));
        assert_eq!(reminder.owner_id, "u1");
        assert_eq!(reminder.created_at, None);
    }

    #[test]
    fn test_empty_patch_serializes_empty() {
        assert_eq!(serde_json::to_string(&ReminderPatch::default()).unwrap(), "{}");
        let patch = ReminderPatch { status: Some(ReminderStatus::Completed) };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"status":"completed"}"#);
    }
}
