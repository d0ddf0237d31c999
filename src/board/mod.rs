//! Reminder Board
//!
//! Keeps the in-memory reminder cache, the rendered view and the backend in
//! step. Every successful mutation is followed by a full reload; the cache is
//! never patched locally.
//!
//! The board knows nothing about the DOM: it talks to a [`ReminderGateway`]
//! and publishes a [`BoardView`] to an optional observer.

mod view;


use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewReminder, Reminder, ReminderDraft, ReminderId, ReminderPatch, ReminderStatus, User};
use crate::routes::{Navigator, Route};

pub use view::{render, BoardView, CardView};

/// Backend operations the board depends on
#[async_trait(?Send)]
pub trait ReminderGateway {
    /// Every reminder owned by `user_id`, in backend order
    async fn fetch_reminders_for_user(&self, user_id: &str) -> Result<Vec<Reminder>, String>;

    async fn create_reminder(&self, record: &NewReminder) -> Result<ReminderId, String>;

    async fn update_reminder(&self, id: &ReminderId, patch: &ReminderPatch) -> Result<(), String>;

    async fn delete_reminder(&self, id: &ReminderId) -> Result<(), String>;
}

/// Identity of the signed-in user, handed to the board at construction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user_id: Option<String>,
    pub email: Option<String>,
}

impl Session {
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: Some(user.id.clone()),
            email: Some(user.email.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("not signed in")]
    NotAuthenticated,
    #[error("reminder {0} is no longer on the board")]
    StaleReference(ReminderId),
    #[error("another change is still in progress")]
    Busy,
    #[error("backend request failed: {0}")]
    Backend(String),
}

pub type BoardResult<T> = Result<T, BoardError>;

/// Mutable board state. Only `load` replaces `reminders`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    pub reminders: Vec<Reminder>,
    pub loading: bool,
    /// A mutation is in flight
    pub busy: bool,
}

pub type Observer = Box<dyn Fn(&BoardView)>;

pub struct ReminderBoard<G> {
    gateway: G,
    session: Session,
    state: RefCell<BoardState>,
    /// Bumped by every load; only the latest one may write the cache
    generation: Cell<u64>,
    observer: Option<Observer>,
}

/// Clears `busy` when the mutation finishes, including on early return
struct BusyGuard<'a> {
    state: &'a RefCell<BoardState>,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.state.borrow_mut().busy = false;
    }
}

impl<G: ReminderGateway> ReminderBoard<G> {
    pub fn new(gateway: G, session: Session) -> Self {
        Self {
            gateway,
            session,
            state: RefCell::new(BoardState::default()),
            generation: Cell::new(0),
            observer: None,
        }
    }

    /// Call `observer` with the fresh view whenever the board changes
    pub fn with_observer(mut self, observer: impl Fn(&BoardView) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn find(&self, id: &ReminderId) -> Option<Reminder> {
        self.state.borrow().reminders.iter().find(|r| &r.id == id).cloned()
    }

    pub fn view(&self) -> BoardView {
        render(&self.state.borrow())
    }

    /// Fetch the user's reminders and replace the cache wholesale.
    /// Returns the number of reminders fetched.
    ///
    /// A load overtaken by a newer one drops its snapshot and leaves the
    /// cache and the loading flag to the newer load.
    pub async fn load(&self) -> BoardResult<usize> {
        let user_id = self.require_user()?;

        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.state.borrow_mut().loading = true;
        self.notify();

        let fetched = self.gateway.fetch_reminders_for_user(&user_id).await;
        if self.generation.get() != generation {
            log::debug!("load {} superseded, result dropped", generation);
            return fetched.map(|reminders| reminders.len()).map_err(BoardError::Backend);
        }

        let result = match fetched {
            Ok(reminders) => {
                let count = reminders.len();
                let mut state = self.state.borrow_mut();
                state.reminders = reminders;
                state.loading = false;
                log::debug!("loaded {} reminders", count);
                Ok(count)
            }
            Err(e) => {
                self.state.borrow_mut().loading = false;
                log::warn!("loading reminders failed: {}", e);
                Err(BoardError::Backend(e))
            }
        };

        self.notify();
        result
    }

    /// Submit a new pending reminder, then reload
    pub async fn create(&self, draft: ReminderDraft) -> BoardResult<ReminderId> {
        let owner_id = self.require_user()?;
        let _busy = self.begin_mutation()?;

        let record = NewReminder::pending(owner_id, draft);
        let id = self
            .gateway
            .create_reminder(&record)
            .await
            .map_err(|e| backend_failure("create", e))?;

        self.load().await?;
        Ok(id)
    }

    /// Advance a reminder one step around the status cycle, then reload.
    /// Returns the status that was submitted.
    pub async fn cycle_status(&self, id: &ReminderId) -> BoardResult<ReminderStatus> {
        let current = self
            .find(id)
            .map(|r| r.status)
            .ok_or_else(|| BoardError::StaleReference(id.clone()))?;
        let _busy = self.begin_mutation()?;

        let next = current.next();
        let patch = ReminderPatch { status: Some(next) };
        self.gateway
            .update_reminder(id, &patch)
            .await
            .map_err(|e| backend_failure("update", e))?;

        self.load().await?;
        Ok(next)
    }

    /// Delete a reminder, then reload. On failure the cache is left as is.
    pub async fn delete(&self, id: &ReminderId) -> BoardResult<()> {
        let _busy = self.begin_mutation()?;

        self.gateway
            .delete_reminder(id)
            .await
            .map_err(|e| backend_failure("delete", e))?;

        self.load().await?;
        Ok(())
    }

    fn require_user(&self) -> BoardResult<String> {
        match &self.session.user_id {
            Some(id) => Ok(id.clone()),
            None => {
                log::error!("no authenticated user, reminder operation aborted");
                Err(BoardError::NotAuthenticated)
            }
        }
    }

    fn begin_mutation(&self) -> BoardResult<BusyGuard<'_>> {
        let mut state = self.state.borrow_mut();
        if state.busy {
            return Err(BoardError::Busy);
        }
        state.busy = true;
        Ok(BusyGuard { state: &self.state })
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            let view = self.view();
            observer(&view);
        }
    }
}

fn backend_failure(action: &str, e: String) -> BoardError {
    log::warn!("{} reminder failed: {}", action, e);
    BoardError::Backend(e)
}

/// How the page should react to a failed board operation.
///
/// Missing authentication sends the user back to the gate; a rejected
/// double-submit is ignored; everything else becomes a toast message.
pub fn react_to_error(err: &BoardError, navigator: &impl Navigator) -> Option<String> {
    match err {
        BoardError::NotAuthenticated => {
            navigator.navigate(Route::Home);
            None
        }
        BoardError::Busy => None,
        BoardError::StaleReference(_) => Some("That reminder changed, the list was out of date.".to_string()),
        BoardError::Backend(e) => Some(format!("Something went wrong: {}", e)),
    }
}
