//! Access Page
//!
//! Email/password sign-in.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::routes::{Navigator, Route};

#[component]
pub fn AccessPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email = email.get();
        let password = password.get();
        if email.trim().is_empty() || password.is_empty() {
            set_error.set(Some("Enter your email and password".to_string()));
            return;
        }

        set_pending.set(true);
        spawn_local(async move {
            match commands::sign_in(&email, &password).await {
                Ok(user) => {
                    set_error.set(None);
                    ctx.sign_in(user);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="auth-container">
            <form class="auth-form" on:submit=submit>
                <h2>"Welcome back 🐣"</h2>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" class="cute-button primary-cute" disabled=move || pending.get()>
                    "Sign in"
                </button>
                <p class="auth-switch">
                    "No account yet? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Route::SignUp);
                    }>"Create one"</a>
                </p>
                <button type="button" class="link-button" on:click=move |_| ctx.navigate(Route::Home)>"Back"</button>
            </form>
        </div>
    }
}
