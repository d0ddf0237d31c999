//! Reminders Page
//!
//! Header with the signed-in email and sign-out, the "New reminder" modal,
//! and the grid driven by the board's view-model.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::{react_to_error, BoardError, BoardView, ReminderBoard, Session};
use crate::commands::{self, TauriGateway};
use crate::components::{ReminderCard, ReminderModal};
use crate::context::AppContext;
use crate::models::{ReminderDraft, ReminderId, User};

#[component]
pub fn RemindersPage(user: User) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (board_view, set_board_view) = signal(BoardView::Loading);
    let (modal_open, set_modal_open) = signal(false);

    let board = StoredValue::new_local(Rc::new(
        ReminderBoard::new(TauriGateway, Session::from_user(&user))
            .with_observer(move |view| set_board_view.set(view.clone())),
    ));
    let heading = format!("{}'s reminders 🌟", user.username);
    let email = board.with_value(|b| b.session().email.clone().unwrap_or_default());

    // Surface failures instead of swallowing them
    let report = move |err: BoardError| {
        if let Some(message) = react_to_error(&err, &ctx) {
            ctx.show_toast(message);
        }
    };

    // Initial load
    let initial = board.with_value(Rc::clone);
    spawn_local(async move {
        if let Err(e) = initial.load().await {
            report(e);
        }
    });

    let on_created = Callback::new(move |draft: ReminderDraft| {
        let board = board.with_value(Rc::clone);
        spawn_local(async move {
            if let Err(e) = board.create(draft).await {
                report(e);
            }
        });
    });

    let on_cycle = Callback::new(move |id: ReminderId| {
        let board = board.with_value(Rc::clone);
        spawn_local(async move {
            if let Err(e) = board.cycle_status(&id).await {
                report(e);
            }
        });
    });

    let on_delete = Callback::new(move |id: ReminderId| {
        let board = board.with_value(Rc::clone);
        spawn_local(async move {
            if let Err(e) = board.delete(&id).await {
                report(e);
            }
        });
    });

    let sign_out = move |_| {
        spawn_local(async move {
            if let Err(e) = commands::sign_out().await {
                log::warn!("sign out failed: {}", e);
            }
            ctx.sign_out();
        });
    };

    view! {
        <div class="reminders-container">
            <div class="page-header">
                <h1>{heading}</h1>
                <div class="user-section">
                    <span class="user-email" id="current-user-email">{email}</span>
                    <button id="signout-btn" class="cute-button" on:click=sign_out>"Sign out"</button>
                </div>
            </div>

            <div class="reminders-controls">
                <button id="add-reminder-btn" class="cute-button" on:click=move |_| set_modal_open.set(true)>
                    <span>"New reminder 🐣"</span>
                </button>
            </div>

            <div class="reminders-grid">
                {move || match board_view.get() {
                    BoardView::Loading => view! {
                        <div class="loading-indicator">
                            <p>"Loading your reminders... 🐣"</p>
                        </div>
                    }.into_any(),
                    BoardView::Empty => view! {
                        <div class="empty-indicator">
                            <h3>"No reminders yet! 🌈"</h3>
                            <p>"Start by creating your first one with the \"New reminder\" button"</p>
                        </div>
                    }.into_any(),
                    BoardView::Grid(cards) => cards
                        .into_iter()
                        .map(|card| view! { <ReminderCard card=card on_cycle=on_cycle on_delete=on_delete /> })
                        .collect_view()
                        .into_any(),
                }}
            </div>

            <ReminderModal open=modal_open set_open=set_modal_open on_created=on_created />
        </div>
    }
}
