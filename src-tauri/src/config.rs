//! Runtime configuration
//!
//! Read once at startup from the environment, falling back to defaults.

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Database file name inside the app data directory
    pub db_file: String,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl AppConfig {
    pub fn load() -> Self {
        Self {
            db_file: try_load("REMINDERS_DB_FILE", "reminders.db"),
            log_filter: try_load("REMINDERS_LOG", "info"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_file: "reminders.db".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("Invalid {key} value: {e}, using default: {default}");
            default
                .parse()
                .unwrap_or_else(|_| panic!("default for {key} must parse"))
        }
    }
}
