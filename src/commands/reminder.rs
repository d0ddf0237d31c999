//! Reminder Commands
//!
//! Frontend bindings for the reminder gateway commands.

use serde::Serialize;

use crate::models::{NewReminder, Reminder, ReminderId, ReminderPatch, ReminderStatus};
use super::{call, call_unit, to_args};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OwnerArgs<'a> {
    owner_id: &'a str,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct UpdateReminderArgs<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<ReminderStatus>,
}

// ========================
// Commands
// ========================

pub async fn list_reminders(owner_id: &str) -> Result<Vec<Reminder>, String> {
    call("list_reminders", to_args(&OwnerArgs { owner_id })?).await
}

/// `NewReminder` already has the command's argument shape
pub async fn create_reminder(record: &NewReminder) -> Result<ReminderId, String> {
    call("create_reminder", to_args(record)?).await
}

pub async fn update_reminder(id: &ReminderId, patch: &ReminderPatch) -> Result<(), String> {
    let args = UpdateReminderArgs {
        id: id.as_str(),
        status: patch.status,
    };
    call_unit("update_reminder", to_args(&args)?).await
}

pub async fn delete_reminder(id: &ReminderId) -> Result<(), String> {
    call_unit("delete_reminder", to_args(&IdArgs { id: id.as_str() })?).await
}
