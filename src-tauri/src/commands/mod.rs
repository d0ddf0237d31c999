//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod reminder_cmd;
mod auth_cmd;

pub use reminder_cmd::*;
pub use auth_cmd::*;
