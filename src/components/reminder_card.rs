//! Reminder Card Component
//!
//! One reminder in the grid, rendered from its `CardView`. Deleting takes a
//! second click on the inline confirmation.

use leptos::prelude::*;

use crate::board::CardView;
use crate::models::ReminderId;

#[component]
pub fn ReminderCard(
    card: CardView,
    on_cycle: Callback<ReminderId>,
    on_delete: Callback<ReminderId>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let cycle_id = card.id.clone();
    let delete_id = card.id.clone();
    let delete_button_id = card.delete_button_id;

    view! {
        <div class=card.css_class data-id=card.id.to_string()>
            <h4>{card.title}</h4>
            <p class="reminder-description">{card.description}</p>
            <div class="reminder-info">
                <span class="reminder-status">{card.status_label}</span>
                <div class="reminder-actions">
                    <button
                        id=card.cycle_button_id
                        class="action-btn update-status-btn"
                        title=format!("Mark as {}", card.status.next().label())
                        on:click=move |_| on_cycle.run(cycle_id.clone())
                    >
                        "✨"
                    </button>
                    <Show
                        when=move || confirming.get()
                        fallback=move || view! {
                            <button
                                id=delete_button_id.clone()
                                class="action-btn remove-btn"
                                title="Delete reminder"
                                on:click=move |_| set_confirming.set(true)
                            >
                                "🗑️"
                            </button>
                        }
                    >
                        <span class="delete-confirm">
                            <span class="delete-confirm-text">"Delete?"</span>
                            <button
                                class="confirm-btn"
                                on:click={
                                    let delete_id = delete_id.clone();
                                    move |_| {
                                        set_confirming.set(false);
                                        on_delete.run(delete_id.clone());
                                    }
                                }
                            >
                                "✓"
                            </button>
                            <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                                "✗"
                            </button>
                        </span>
                    </Show>
                </div>
            </div>
        </div>
    }
}
