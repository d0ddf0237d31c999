//! Reminder Repository
//!
//! SQLite-backed CRUD for reminders.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use crate::domain::{DomainError, DomainResult, Reminder, ReminderStatus, UNTITLED};
use super::db::{not_initialized, SharedConnection};
use super::traits::{OwnedRepository, Repository};

const SELECT_COLUMNS: &str = "SELECT id, owner_id, title, description, status, created_at FROM reminders";

/// SQLite implementation of Reminder repository
pub struct ReminderRepository {
    conn: SharedConnection,
}

impl ReminderRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Patch only the status; owner and ID are immutable
    pub async fn set_status(&self, id: &str, status: ReminderStatus) -> DomainResult<Reminder> {
        let mut existing = self
            .find_by_id(&id.to_string())
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("reminder {}", id)))?;
        existing.status = status;
        self.update(&existing).await
    }
}

#[async_trait]
impl Repository<Reminder> for ReminderRepository {
    async fn create(&self, entity: &Reminder) -> DomainResult<Reminder> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let mut created = entity.clone();
        created.id = uuid::Uuid::new_v4().to_string();
        created.created_at = Some(chrono::Local::now().timestamp_millis());

        conn.execute(
            "INSERT INTO reminders (id, owner_id, title, description, status, created_at) VALUES (?, ?, ?, ?, ?, ?)",
            params![
                created.id,
                created.owner_id,
                created.title,
                created.description,
                created.status.as_str(),
                created.created_at
            ],
        )?;

        Ok(created)
    }

    async fn find_by_id(&self, id: &String) -> DomainResult<Option<Reminder>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let reminder = conn
            .query_row(&format!("{} WHERE id = ?", SELECT_COLUMNS), params![id], row_to_reminder)
            .optional()?;
        Ok(reminder)
    }

    async fn update(&self, entity: &Reminder) -> DomainResult<Reminder> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        // owner_id is deliberately absent from the SET list
        let changed = conn.execute(
            "UPDATE reminders SET title = ?, description = ?, status = ? WHERE id = ?",
            params![entity.title, entity.description, entity.status.as_str(), entity.id],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("reminder {}", entity.id)));
        }

        Ok(entity.clone())
    }

    async fn delete(&self, id: &String) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let changed = conn.execute("DELETE FROM reminders WHERE id = ?", params![id])?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("reminder {}", id)));
        }
        Ok(())
    }
}

#[async_trait]
impl OwnedRepository<Reminder> for ReminderRepository {
    async fn list_by_owner(&self, owner_id: &str) -> DomainResult<Vec<Reminder>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let mut stmt = conn.prepare(&format!(
            "{} WHERE owner_id = ? ORDER BY created_at ASC, rowid ASC",
            SELECT_COLUMNS
        ))?;
        let reminders = stmt
            .query_map(params![owner_id], row_to_reminder)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(reminders)
    }
}

/// Convert a database row to Reminder
fn row_to_reminder(row: &Row<'_>) -> rusqlite::Result<Reminder> {
    let title = row
        .get::<_, Option<String>>(2)?
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());
    let status = row
        .get::<_, Option<String>>(4)?
        .map(|s| ReminderStatus::from_stored(&s))
        .unwrap_or_default();

    Ok(Reminder {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        title,
        description: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        status,
        created_at: row.get(5)?,
    })
}
