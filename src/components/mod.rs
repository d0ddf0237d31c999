//! UI Components
//!
//! Pages and reusable Leptos components.

mod welcome_page;
mod access_page;
mod sign_up_page;
mod reminders_page;
mod reminder_card;
mod reminder_form;
mod reminder_modal;
mod toast;

pub use welcome_page::WelcomePage;
pub use access_page::AccessPage;
pub use sign_up_page::SignUpPage;
pub use reminders_page::RemindersPage;
pub use reminder_card::ReminderCard;
pub use reminder_form::ReminderForm;
pub use reminder_modal::ReminderModal;
pub use toast::Toast;
