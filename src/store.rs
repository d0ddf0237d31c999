//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::User;
use crate::routes::Route;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user as reported by the backend
    pub current_user: Option<User>,
    /// Set once the initial auth status query has answered
    pub session_checked: bool,
    /// Page being shown
    pub route: Route,
    /// Message shown in the toast, if any
    pub toast: Option<String>,
}

impl AppState {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
