//! Production gateway: the board's backend calls go over Tauri IPC.

use async_trait::async_trait;

use crate::board::ReminderGateway;
use crate::models::{NewReminder, Reminder, ReminderId, ReminderPatch};

#[derive(Debug, Clone, Copy, Default)]
pub struct TauriGateway;

#[async_trait(?Send)]
impl ReminderGateway for TauriGateway {
    async fn fetch_reminders_for_user(&self, user_id: &str) -> Result<Vec<Reminder>, String> {
        super::list_reminders(user_id).await
    }

    async fn create_reminder(&self, record: &NewReminder) -> Result<ReminderId, String> {
        super::create_reminder(record).await
    }

    async fn update_reminder(&self, id: &ReminderId, patch: &ReminderPatch) -> Result<(), String> {
        super::update_reminder(id, patch).await
    }

    async fn delete_reminder(&self, id: &ReminderId) -> Result<(), String> {
        super::delete_reminder(id).await
    }
}
