//! Welcome Page
//!
//! The gate: signed-in users go straight to their reminders, everyone else
//! gets the sign-in / create-account choice.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::routes::{Navigator, Route};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn WelcomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Re-runs whenever the auth status changes
    Effect::new(move |_| {
        if store.session_checked().get() && store.current_user().get().is_some() {
            ctx.navigate(Route::Reminders);
        }
    });

    view! {
        <div class="welcome-container">
            <Show
                when=move || store.session_checked().get()
                fallback=|| view! { <div class="loading-indicator">"Checking your session..."</div> }
            >
                <div class="access-options">
                    <h2>"Hi! I'm your personal reminder assistant 🌟"</h2>
                    <p>"I help you keep track of your reminders and stay on top of things."</p>
                    <p class="helper-note">"Sign in to your account to get started."</p>

                    <div class="action-buttons">
                        <button id="access-btn" class="cute-button primary-cute" on:click=move |_| ctx.navigate(Route::Access)>
                            "Sign in"
                        </button>
                        <button id="signup-btn" class="cute-button secondary-cute" on:click=move |_| ctx.navigate(Route::SignUp)>
                            "Create account"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
