//! Reminder Form Component
//!
//! Collects title and description and emits a `ReminderDraft`.

use leptos::prelude::*;

use crate::models::ReminderDraft;

/// Trim input and reject an empty title
pub fn build_draft(title: &str, description: &str) -> Result<ReminderDraft, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Give your reminder a title");
    }
    Ok(ReminderDraft {
        title: title.to_string(),
        description: description.trim().to_string(),
    })
}

#[component]
pub fn ReminderForm(#[prop(into)] on_created: Callback<ReminderDraft>) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (error, set_error) = signal::<Option<&'static str>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match build_draft(&title.get(), &description.get()) {
            Ok(draft) => {
                set_error.set(None);
                set_title.set(String::new());
                set_description.set(String::new());
                on_created.run(draft);
            }
            Err(msg) => set_error.set(Some(msg)),
        }
    };

    view! {
        <form class="reminder-form" on:submit=submit>
            <label for="reminder-title">"Title"</label>
            <input
                id="reminder-title"
                type="text"
                placeholder="What should I remind you about?"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <label for="reminder-description">"Description"</label>
            <textarea
                id="reminder-description"
                placeholder="Details (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <button type="submit" class="cute-button">"Save reminder"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_draft_trims() {
        let draft = build_draft("  Buy milk ", " 2% ").unwrap();
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.description, "2%");
    }

    #[test]
    fn test_build_draft_requires_title() {
        assert!(build_draft("   ", "details").is_err());
        assert!(build_draft("x", "").is_ok());
    }
}
