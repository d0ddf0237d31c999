//! Reminders Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - auth: Password hashing and the signed-in session
//! - commands: Tauri command handlers

use std::path::PathBuf;
use tauri::Manager;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod auth;
mod commands;
mod config;
mod domain;
mod repository;

use auth::SessionState;
use config::AppConfig;
use repository::{init_db, DbState};

/// Application state shared across commands
pub struct AppState {
    pub db_state: DbState,
    pub session: SessionState,
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle, file_name: &str) -> Result<PathBuf, String> {
    let app_dir = app_handle
        .path()
        .app_data_dir()
        .map_err(|e| format!("failed to resolve app data dir: {}", e))?;
    std::fs::create_dir_all(&app_dir).map_err(|e| e.to_string())?;
    Ok(app_dir.join(file_name))
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let config = AppConfig::load();
    init_tracing(&config);
    info!(?config, "configuration loaded");

    tauri::Builder::default()
        .setup(move |app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let db_path = get_db_path(app.handle(), &config.db_file)?;
            info!(path = %db_path.display(), "app setup starting");

            // Manage state immediately; commands report "not initialized" until the DB is ready
            let db_state = DbState::new();
            app.manage(AppState {
                db_state: db_state.clone(),
                session: SessionState::new(),
            });

            tauri::async_runtime::spawn(async move {
                let opened = tokio::task::spawn_blocking(move || init_db(&db_path)).await;
                match opened {
                    Ok(Ok(initialized)) => {
                        let conn = initialized.conn.lock().await.take();
                        *db_state.conn.lock().await = conn;
                        info!("database initialized");
                    }
                    Ok(Err(e)) => error!(error = %e, "database init failed"),
                    Err(e) => error!(error = %e, "database init task panicked"),
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Reminder gateway
            commands::list_reminders,
            commands::create_reminder,
            commands::update_reminder,
            commands::delete_reminder,
            // Auth
            commands::sign_up,
            commands::sign_in,
            commands::sign_out,
            commands::current_user,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
