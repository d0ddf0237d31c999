//! Toast Component
//!
//! Shows the store's toast message, if any.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Toast() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || store.toast().get().map(|message| view! {
            <div class="toast" role="alert">
                <span>{message}</span>
                <button class="toast-close" on:click=move |_| ctx.dismiss_toast()>"×"</button>
            </div>
        })}
    }
}
