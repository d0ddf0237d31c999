//! Console logging
//!
//! `log` records go to the browser console through `console_log`.

use log::Level;

/// Debug builds log at `Debug`, release builds at `Info`
fn max_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

pub fn init() {
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(max_level());
}
