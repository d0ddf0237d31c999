//! User Repository
//!
//! Handles account storage. Password hashes stay inside this module and `auth`.

use rusqlite::{params, OptionalExtension};

use crate::domain::{DomainError, DomainResult, User};
use super::db::{not_initialized, SharedConnection};

pub struct UserRepository {
    conn: SharedConnection,
}

impl UserRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Insert a new account. Emails are unique (case-insensitive).
    pub async fn create(&self, username: &str, email: &str, password_hash: &str) -> DomainResult<User> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let email = email.trim().to_lowercase();
        let taken: Option<String> = conn
            .query_row("SELECT id FROM users WHERE email = ?", params![email], |row| row.get(0))
            .optional()?;
        if taken.is_some() {
            return Err(DomainError::Conflict(format!("email {} already registered", email)));
        }

        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            username: username.trim().to_string(),
            email,
            created_at: Some(chrono::Local::now().timestamp_millis()),
        };
        conn.execute(
            "INSERT INTO users (id, username, email, password_hash, created_at) VALUES (?, ?, ?, ?, ?)",
            params![user.id, user.username, user.email, password_hash, user.created_at],
        )?;
        Ok(user)
    }

    /// Look up an account with its stored password hash
    pub async fn find_credentials(&self, email: &str) -> DomainResult<Option<(User, String)>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let found = conn
            .query_row(
                "SELECT id, username, email, created_at, password_hash FROM users WHERE email = ?",
                params![email.trim().to_lowercase()],
                |row| {
                    let user = User {
                        id: row.get(0)?,
                        username: row.get(1)?,
                        email: row.get(2)?,
                        created_at: row.get(3)?,
                    };
                    Ok((user, row.get::<_, String>(4)?))
                },
            )
            .optional()?;
        Ok(found)
    }

    pub async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let user = conn
            .query_row(
                "SELECT id, username, email, created_at FROM users WHERE id = ?",
                params![id],
                |row| {
                    Ok(User {
                        id: row.get(0)?,
                        username: row.get(1)?,
                        email: row.get(2)?,
                        created_at: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(user)
    }
}
