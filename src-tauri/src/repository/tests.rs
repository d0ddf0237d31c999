//! Repository Integration Tests
//!
//! Tests for ReminderRepository and UserRepository with in-memory SQLite.

#[cfg(test)]
mod tests {
    use crate::auth;
    use crate::domain::{DomainError, Reminder, ReminderStatus, UNTITLED};
    use crate::repository::{init_db, OwnedRepository, ReminderRepository, Repository, UserRepository};
    use std::path::PathBuf;

    fn setup_test_db() -> (ReminderRepository, UserRepository) {
        let db_path = PathBuf::from(":memory:");
        let db_state = init_db(&db_path).expect("Failed to init test DB");
        (
            ReminderRepository::new(db_state.conn.clone()),
            UserRepository::new(db_state.conn),
        )
    }

    fn reminder(owner: &str, title: &str) -> Reminder {
        Reminder::new(owner.to_string(), title.to_string(), String::new())
    }

    #[tokio::test]
    async fn test_create_reminder() {
        let (repo, _) = setup_test_db();

        let created = repo
            .create(&Reminder::new("u1".into(), "Buy milk".into(), "2%".into()))
            .await
            .expect("Failed to create");

        assert!(!created.id.is_empty());
        assert_eq!(created.status, ReminderStatus::Pending);
        assert!(created.created_at.is_some());

        let found = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_list_by_owner_filters_and_orders() {
        let (repo, _) = setup_test_db();

        let first = repo.create(&reminder("u1", "first")).await.unwrap();
        repo.create(&reminder("u2", "other")).await.unwrap();
        let second = repo.create(&reminder("u1", "second")).await.unwrap();

        let mine = repo.list_by_owner("u1").await.unwrap();
        assert_eq!(mine.iter().map(|r| r.id.clone()).collect::<Vec<_>>(), vec![first.id, second.id]);
        assert!(repo.list_by_owner("nobody").await.unwrap().is_empty());
        assert_eq!(repo.list_by_owner("u2").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_set_status_keeps_owner() {
        let (repo, _) = setup_test_db();
        let created = repo.create(&reminder("u1", "cycle me")).await.unwrap();

        let updated = repo.set_status(&created.id, ReminderStatus::InProgress).await.unwrap();
        assert_eq!(updated.status, ReminderStatus::InProgress);

        let found = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(found.status, ReminderStatus::InProgress);
        assert_eq!(found.owner_id, "u1");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (repo, _) = setup_test_db();
        let result = repo.set_status("missing", ReminderStatus::Completed).await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_reminder() {
        let (repo, _) = setup_test_db();
        let created = repo.create(&reminder("u1", "To delete")).await.unwrap();
        let kept = repo.create(&reminder("u1", "To keep")).await.unwrap();

        repo.delete(&created.id).await.expect("Delete failed");

        assert!(repo.find_by_id(&created.id).await.unwrap().is_none());
        assert_eq!(repo.list_by_owner("u1").await.unwrap(), vec![kept]);
    }

    #[tokio::test]
    async fn test_delete_missing_leaves_rows() {
        let (repo, _) = setup_test_db();
        repo.create(&reminder("u1", "stays")).await.unwrap();

        let result = repo.delete(&"missing".to_string()).await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
        assert_eq!(repo.list_by_owner("u1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_legacy_rows_get_defaults() {
        let db_state = init_db(&PathBuf::from(":memory:")).unwrap();
        {
            let guard = db_state.conn.lock().await;
            let conn = guard.as_ref().unwrap();
            conn.execute(
                "INSERT INTO reminders (id, owner_id, title, description, status) VALUES ('r1', 'u1', NULL, NULL, 'todo')",
                [],
            )
            .unwrap();
        }
        let repo = ReminderRepository::new(db_state.conn);

        let found = repo.find_by_id(&"r1".to_string()).await.unwrap().unwrap();
        assert_eq!(found.title, UNTITLED);
        assert_eq!(found.description, "");
        assert_eq!(found.status, ReminderStatus::Pending);
    }

    #[tokio::test]
    async fn test_fresh_schema_has_created_at() {
        let db_state = init_db(&PathBuf::from(":memory:")).unwrap();
        let guard = db_state.conn.lock().await;
        let conn = guard.as_ref().unwrap();

        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('reminders')").unwrap();
        let columns: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(columns, vec!["id", "owner_id", "title", "description", "status", "created_at"]);
    }

    #[tokio::test]
    async fn test_file_backed_db_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reminders.db");

        let id = {
            let state = init_db(&path).unwrap();
            let repo = ReminderRepository::new(state.conn);
            repo.create(&reminder("u1", "persisted")).await.unwrap().id
        };

        let state = init_db(&path).unwrap();
        let repo = ReminderRepository::new(state.conn);
        let found = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.title, "persisted");
    }

    #[tokio::test]
    async fn test_register_and_authenticate() {
        let (_, users) = setup_test_db();

        let user = auth::register(&users, "Ana", "Ana@Example.com", "secret1").await.unwrap();
        assert_eq!(user.email, "ana@example.com");

        let signed_in = auth::authenticate(&users, "ana@example.com", "secret1").await.unwrap();
        assert_eq!(signed_in.id, user.id);
        assert_eq!(users.find_by_id(&user.id).await.unwrap(), Some(user));

        assert!(matches!(
            auth::authenticate(&users, "ana@example.com", "wrong-pass").await,
            Err(DomainError::Unauthorized(_))
        ));
        assert!(matches!(
            auth::authenticate(&users, "nobody@example.com", "secret1").await,
            Err(DomainError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let (_, users) = setup_test_db();
        auth::register(&users, "Ana", "ana@example.com", "secret1").await.unwrap();

        let again = auth::register(&users, "Ana 2", "ANA@example.com", "secret2").await;
        assert!(matches!(again, Err(DomainError::Conflict(_))));
    }
}
