//! Reminders Frontend App
//!
//! Top-level router: resolves the session once, then swaps pages on route
//! changes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{AccessPage, RemindersPage, SignUpPage, Toast, WelcomePage};
use crate::context::AppContext;
use crate::routes::{current_route, Navigator, Route};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new(current_route()));
    let ctx = AppContext::new(store);

    // Provide store and actions to all children
    provide_context(store);
    provide_context(ctx);

    // Browser back/forward
    let _ = window_event_listener(leptos::ev::popstate, move |_| {
        store.route().set(current_route());
    });

    // Auth status query, once on mount
    spawn_local(async move {
        match commands::current_user().await {
            Ok(user) => ctx.set_user(user),
            Err(e) => {
                log::warn!("auth status query failed: {}", e);
                ctx.set_user(None);
            }
        }
    });

    // Guarded pages bounce to the gate once we know there is no session
    Effect::new(move |_| {
        let route = store.route().get();
        if route.requires_session() && store.session_checked().get() && store.current_user().get().is_none() {
            ctx.navigate(Route::Home);
        }
    });

    view! {
        <div class="app-layout">
            {move || match store.route().get() {
                Route::Home => view! { <WelcomePage /> }.into_any(),
                Route::Access => view! { <AccessPage /> }.into_any(),
                Route::SignUp => view! { <SignUpPage /> }.into_any(),
                Route::Reminders => match store.current_user().get() {
                    Some(user) => view! { <RemindersPage user=user /> }.into_any(),
                    None => view! {
                        <div class="loading-indicator">
                            <p>"Checking your session..."</p>
                        </div>
                    }.into_any(),
                },
            }}
            <Toast />
        </div>
    }
}
