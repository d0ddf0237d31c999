//! Reminder Modal Component
//!
//! Overlay hosting the reminder form. Closes itself once a draft is emitted.

use leptos::prelude::*;

use crate::components::ReminderForm;
use crate::models::ReminderDraft;

#[component]
pub fn ReminderModal(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    #[prop(into)] on_created: Callback<ReminderDraft>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="cute-modal" on:click=move |_| set_open.set(false)>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"New reminder 🌟"</h2>
                        <button class="close-button" on:click=move |_| set_open.set(false)>"×"</button>
                    </div>
                    <ReminderForm on_created=move |draft: ReminderDraft| {
                        set_open.set(false);
                        on_created.run(draft);
                    } />
                </div>
            </div>
        </Show>
    }
}
