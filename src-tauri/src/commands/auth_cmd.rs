//! Tauri Commands for Authentication
//!
//! Sign-up, sign-in, sign-out and the auth status query used by the gate.

use tauri::State;
use tracing::info;

use crate::auth;
use crate::domain::User;
use crate::repository::UserRepository;
use crate::AppState;

/// Register an account and sign it in
#[tauri::command]
pub async fn sign_up(
    state: State<'_, AppState>,
    username: String,
    email: String,
    password: String,
) -> Result<User, String> {
    let repo = UserRepository::new(state.db_state.conn.clone());
    let user = auth::register(&repo, &username, &email, &password)
        .await
        .map_err(|e| e.to_string())?;

    info!(user_id = %user.id, "account created");
    state.session.set(Some(user.clone())).await;
    Ok(user)
}

#[tauri::command]
pub async fn sign_in(
    state: State<'_, AppState>,
    email: String,
    password: String,
) -> Result<User, String> {
    let repo = UserRepository::new(state.db_state.conn.clone());
    let user = auth::authenticate(&repo, &email, &password)
        .await
        .map_err(|e| e.to_string())?;

    info!(user_id = %user.id, "signed in");
    state.session.set(Some(user.clone())).await;
    Ok(user)
}

#[tauri::command]
pub async fn sign_out(state: State<'_, AppState>) -> Result<(), String> {
    if let Some(user) = state.session.current().await {
        info!(user_id = %user.id, "signed out");
    }
    state.session.set(None).await;
    Ok(())
}

/// The signed-in user, or `None`
#[tauri::command]
pub async fn current_user(state: State<'_, AppState>) -> Result<Option<User>, String> {
    Ok(state.session.current().await)
}
