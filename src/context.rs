//! Application Context
//!
//! Actions shared via Leptos Context API: session changes, navigation and
//! toasts. State itself lives in the store.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::User;
use crate::routes::{push_history, Navigator, Route};
use crate::store::{AppStateStoreFields, AppStore};

/// How long a toast stays up
const TOAST_MS: u32 = 4_000;

#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Record the answer of the auth status query
    pub fn set_user(&self, user: Option<User>) {
        self.store.current_user().set(user);
        self.store.session_checked().set(true);
    }

    pub fn sign_in(&self, user: User) {
        log::info!("signed in as {}", user.email);
        self.set_user(Some(user));
        self.navigate(Route::Reminders);
    }

    pub fn sign_out(&self) {
        self.set_user(None);
        self.navigate(Route::Home);
    }

    /// Show `message` until dismissed or the timeout passes
    pub fn show_toast(&self, message: String) {
        let store = self.store;
        store.toast().set(Some(message.clone()));
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            // A newer toast keeps its own timer
            if store.toast().get_untracked().as_deref() == Some(message.as_str()) {
                store.toast().set(None);
            }
        });
    }

    pub fn dismiss_toast(&self) {
        self.store.toast().set(None);
    }
}

impl Navigator for AppContext {
    /// Pages that need a session fall back to the gate when there is none
    fn navigate(&self, route: Route) {
        let signed_in = self.store.current_user().get_untracked().is_some();
        let route = if route.requires_session() && !signed_in {
            Route::Home
        } else {
            route
        };

        if self.store.route().get_untracked() != route {
            push_history(route);
            self.store.route().set(route);
        }
    }
}
