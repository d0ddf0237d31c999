//! Tauri Commands for Reminder CRUD
//!
//! Exposes the reminder gateway to the frontend via Tauri IPC.
//! Every command is scoped to the signed-in user.

use tauri::State;
use tracing::{debug, warn};

use crate::auth;
use crate::domain::{DomainError, DomainResult, Reminder, ReminderStatus};
use crate::repository::{OwnedRepository, ReminderRepository, Repository};
use crate::AppState;

/// Load a reminder the signed-in user owns
async fn owned_reminder(state: &AppState, repo: &ReminderRepository, id: &str) -> DomainResult<Reminder> {
    let reminder = repo
        .find_by_id(&id.to_string())
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("reminder {}", id)))?;
    let user = state.session.current().await;
    auth::check_reminder_owner(user.as_ref(), &reminder)?;
    Ok(reminder)
}

/// List every reminder owned by `owner_id`, oldest first
#[tauri::command]
pub async fn list_reminders(
    state: State<'_, AppState>,
    owner_id: String,
) -> Result<Vec<Reminder>, String> {
    let user = state.session.current().await;
    auth::check_owner(user.as_ref(), &owner_id).map_err(|e| e.to_string())?;

    let repo = ReminderRepository::new(state.db_state.conn.clone());
    let reminders = repo.list_by_owner(&owner_id).await.map_err(|e| {
        warn!(owner_id = %owner_id, error = %e, "list_reminders failed");
        e.to_string()
    })?;
    debug!(owner_id = %owner_id, count = reminders.len(), "listed reminders");
    Ok(reminders)
}

/// Create a reminder, returning its new ID
#[tauri::command]
pub async fn create_reminder(
    state: State<'_, AppState>,
    owner_id: String,
    title: String,
    description: String,
    status: Option<ReminderStatus>,
) -> Result<String, String> {
    let user = state.session.current().await;
    auth::check_owner(user.as_ref(), &owner_id).map_err(|e| e.to_string())?;

    let mut reminder = Reminder::new(owner_id, title, description);
    reminder.status = status.unwrap_or_default();

    let repo = ReminderRepository::new(state.db_state.conn.clone());
    let created = repo.create(&reminder).await.map_err(|e| {
        warn!(error = %e, "create_reminder failed");
        e.to_string()
    })?;
    debug!(id = %created.id, "created reminder");
    Ok(created.id)
}

/// Patch a reminder. Only the status is patchable.
#[tauri::command]
pub async fn update_reminder(
    state: State<'_, AppState>,
    id: String,
    status: Option<ReminderStatus>,
) -> Result<(), String> {
    let repo = ReminderRepository::new(state.db_state.conn.clone());
    owned_reminder(&state, &repo, &id).await.map_err(|e| e.to_string())?;

    // An empty patch only confirms the reminder exists
    let Some(status) = status else {
        return Ok(());
    };

    repo.set_status(&id, status).await.map_err(|e| {
        warn!(id = %id, error = %e, "update_reminder failed");
        e.to_string()
    })?;
    Ok(())
}

/// Delete a reminder
#[tauri::command]
pub async fn delete_reminder(state: State<'_, AppState>, id: String) -> Result<(), String> {
    let repo = ReminderRepository::new(state.db_state.conn.clone());
    owned_reminder(&state, &repo, &id).await.map_err(|e| e.to_string())?;

    repo.delete(&id).await.map_err(|e| {
        warn!(id = %id, error = %e, "delete_reminder failed");
        e.to_string()
    })
}
