//! Routes and navigation
//!
//! Pages ask for navigation through [`Navigator`]; the app decides how a
//! route change is applied (store update plus browser history).

use std::fmt;

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Welcome gate
    #[default]
    Home,
    Reminders,
    Access,
    SignUp,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Reminders => "/reminders",
            Route::Access => "/access",
            Route::SignUp => "/signup",
        }
    }

    /// Unknown paths land on the gate
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/reminders" => Route::Reminders,
            "/access" => Route::Access,
            "/signup" => Route::SignUp,
            _ => Route::Home,
        }
    }

    /// Pages that need a signed-in user
    pub fn requires_session(self) -> bool {
        matches!(self, Route::Reminders)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// Route the browser is currently showing
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or_default()
}

/// Push `route` onto the browser history without reloading
pub fn push_history(route: Route) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        log::warn!("no history object, cannot record navigation to {}", route);
        return;
    };
    if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path())) {
        log::warn!("pushState to {} failed: {:?}", route, e);
    }
}
