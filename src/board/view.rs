//! Board view-model
//!
//! Pure mapping from board state to what the page renders.

use crate::models::{ReminderId, ReminderStatus};

use super::BoardState;

#[derive(Debug, Clone, PartialEq)]
pub enum BoardView {
    Loading,
    Empty,
    Grid(Vec<CardView>),
}

impl BoardView {
    pub fn cards(&self) -> &[CardView] {
        match self {
            BoardView::Grid(cards) => cards,
            _ => &[],
        }
    }
}

/// One reminder card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: ReminderId,
    pub title: String,
    pub description: String,
    pub status: ReminderStatus,
    pub status_label: &'static str,
    pub css_class: String,
    pub cycle_button_id: String,
    pub delete_button_id: String,
}

pub fn render(state: &BoardState) -> BoardView {
    if state.loading {
        return BoardView::Loading;
    }
    if state.reminders.is_empty() {
        return BoardView::Empty;
    }

    let cards = state
        .reminders
        .iter()
        .map(|reminder| CardView {
            id: reminder.id.clone(),
            title: reminder.title.clone(),
            description: reminder.description.clone(),
            status: reminder.status,
            status_label: reminder.status.label(),
            css_class: format!("reminder-card {}", reminder.status.as_str()),
            cycle_button_id: format!("cycle-{}", reminder.id),
            delete_button_id: format!("delete-{}", reminder.id),
        })
        .collect();
    BoardView::Grid(cards)
}
