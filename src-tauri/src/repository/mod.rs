//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod reminder_repo;
mod user_repo;

#[cfg(test)]
mod tests;

pub use traits::{OwnedRepository, Repository};
pub use db::{init_db, DbState};
pub use reminder_repo::ReminderRepository;
pub use user_repo::UserRepository;
