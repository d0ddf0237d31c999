//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde and thiserror).

mod entity;
mod reminder;
mod user;

pub use entity::{Entity, DomainError, DomainResult};
pub use reminder::{Reminder, ReminderStatus, UNTITLED};
pub use user::User;
