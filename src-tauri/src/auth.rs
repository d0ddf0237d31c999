//! Authentication
//!
//! Password hashing (Argon2) and the in-process session holding the
//! signed-in user. The session is the auth status the welcome gate polls.

use std::sync::LazyLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use regex::Regex;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, Reminder, User};
use crate::repository::UserRepository;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Currently signed-in user, if any
#[derive(Default)]
pub struct SessionState {
    current: Mutex<Option<User>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current(&self) -> Option<User> {
        self.current.lock().await.clone()
    }

    pub async fn set(&self, user: Option<User>) {
        *self.current.lock().await = user;
    }
}

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> DomainResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DomainError::Internal(format!("password hashing failed: {}", e)))
}

/// Check a password against a stored PHC-format hash
pub fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| DomainError::Internal(format!("invalid password hash: {}", e)))?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

pub fn validate_registration(username: &str, email: &str, password: &str) -> DomainResult<()> {
    if username.trim().is_empty() {
        return Err(DomainError::InvalidInput("username is required".into()));
    }
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(DomainError::InvalidInput(format!("'{}' is not a valid email", email)));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::InvalidInput(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Register a new account
pub async fn register(repo: &UserRepository, username: &str, email: &str, password: &str) -> DomainResult<User> {
    validate_registration(username, email, password)?;
    let hash = hash_password(password)?;
    repo.create(username, email, &hash).await
}

/// Verify credentials. Unknown email and wrong password give the same error.
pub async fn authenticate(repo: &UserRepository, email: &str, password: &str) -> DomainResult<User> {
    let rejected = || DomainError::Unauthorized("invalid email or password".into());
    let (user, hash) = repo.find_credentials(email).await?.ok_or_else(rejected)?;
    if verify_password(password, &hash)? {
        Ok(user)
    } else {
        Err(rejected())
    }
}

/// Only the signed-in owner may read or mutate a user's reminders
pub fn check_owner(signed_in: Option<&User>, owner_id: &str) -> DomainResult<()> {
    match signed_in {
        Some(user) if user.id == owner_id => Ok(()),
        Some(_) => Err(DomainError::Unauthorized("reminder belongs to another user".into())),
        None => Err(DomainError::Unauthorized("not signed in".into())),
    }
}

pub fn check_reminder_owner(signed_in: Option<&User>, reminder: &Reminder) -> DomainResult<()> {
    match signed_in {
        Some(user) if reminder.is_owned_by(&user.id) => Ok(()),
        Some(_) => Err(DomainError::Unauthorized("reminder belongs to another user".into())),
        None => Err(DomainError::Unauthorized("not signed in".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("hunter22").unwrap();
        assert!(verify_password("hunter22", &hash).unwrap());
        assert!(!verify_password("hunter23", &hash).unwrap());
    }

    #[test]
    fn test_validate_registration() {
        assert!(validate_registration("ana", "ana@example.com", "secret1").is_ok());
        assert!(matches!(
            validate_registration("", "ana@example.com", "secret1"),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_registration("ana", "not-an-email", "secret1"),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_registration("ana", "ana@example.com", "short"),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_check_owner() {
        let ana = User {
            id: "u1".into(),
            username: "ana".into(),
            email: "ana@example.com".into(),
            created_at: None,
        };
        let reminder = Reminder::new("u1".into(), "t".into(), "d".into());
        let foreign = Reminder::new("u2".into(), "t".into(), "d".into());

        assert!(check_reminder_owner(Some(&ana), &reminder).is_ok());
        assert!(matches!(check_reminder_owner(Some(&ana), &foreign), Err(DomainError::Unauthorized(_))));
        assert!(matches!(check_reminder_owner(None, &reminder), Err(DomainError::Unauthorized(_))));
        assert!(check_owner(Some(&ana), "u1").is_ok());
        assert!(check_owner(Some(&ana), "u2").is_err());
    }

    #[tokio::test]
    async fn test_session_state() {
        let session = SessionState::new();
        assert!(session.current().await.is_none());

        let user = User {
            id: "u1".into(),
            username: "ana".into(),
            email: "ana@example.com".into(),
            created_at: None,
        };
        session.set(Some(user.clone())).await;
        assert_eq!(session.current().await, Some(user));

        session.set(None).await;
        assert!(session.current().await.is_none());
    }
}
