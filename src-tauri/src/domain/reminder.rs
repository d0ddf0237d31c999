//! Reminder Entity
//!
//! A user-owned record with a title, description and a cyclic status.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Title used when a stored reminder has none
pub const UNTITLED: &str = "Untitled";

/// Lifecycle status of a reminder
///
/// Status only moves forward through the cycle
/// `Pending -> InProgress -> Completed -> Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReminderStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl ReminderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderStatus::Pending => "pending",
            ReminderStatus::InProgress => "in-progress",
            ReminderStatus::Completed => "completed",
        }
    }

    /// Unknown values fall back to the start of the cycle
    pub fn from_stored(s: &str) -> Self {
        match s {
            "in-progress" => ReminderStatus::InProgress,
            "completed" => ReminderStatus::Completed,
            _ => ReminderStatus::Pending,
        }
    }

    pub fn next(self) -> Self {
        match self {
            ReminderStatus::Pending => ReminderStatus::InProgress,
            ReminderStatus::InProgress => ReminderStatus::Completed,
            ReminderStatus::Completed => ReminderStatus::Pending,
        }
    }
}

/// A reminder owned by a single user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Opaque identifier, assigned on create
    pub id: String,
    /// Owning user; never changes after creation
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub status: ReminderStatus,
    /// Unix milliseconds
    pub created_at: Option<i64>,
}

impl Reminder {
    /// Create a new pending reminder. The ID is assigned by the repository.
    pub fn new(owner_id: String, title: String, description: String) -> Self {
        Self {
            id: String::new(),
            owner_id,
            title,
            description,
            status: ReminderStatus::Pending,
            created_at: None,
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }
}

impl Entity for Reminder {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_creation() {
        let reminder = Reminder::new("u1".into(), "Buy milk".into(), "2%".into());
        assert_eq!(reminder.status, ReminderStatus::Pending);
        assert!(reminder.is_owned_by("u1"));
        assert!(!reminder.is_owned_by("u2"));
    }

    #[test]
    fn test_status_cycle() {
        let mut status = ReminderStatus::Pending;
        let mut seen = Vec::new();
        for _ in 0..6 {
            status = status.next();
            seen.push(status);
        }
        assert_eq!(
            seen,
            vec![
                ReminderStatus::InProgress,
                ReminderStatus::Completed,
                ReminderStatus::Pending,
                ReminderStatus::InProgress,
                ReminderStatus::Completed,
                ReminderStatus::Pending,
            ]
        );
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(ReminderStatus::InProgress.as_str(), "in-progress");
        assert_eq!(ReminderStatus::from_stored("completed"), ReminderStatus::Completed);
        assert_eq!(ReminderStatus::from_stored("todo"), ReminderStatus::Pending);
        assert_eq!(serde_json::to_string(&ReminderStatus::InProgress).unwrap(), "\"in-progress\"");
    }

    #[test]
    fn test_wire_field_names() {
        let reminder = Reminder::new("u1".into(), "t".into(), "d".into());
        let json = serde_json::to_value(&reminder).unwrap();
        assert_eq!(json["ownerId"], "u1");
        assert_eq!(json["status"], "pending");
    }
}
