pub mod components;
pub mod config;
pub mod gui;
pub mod logging;
pub mod models;
pub mod utils;

use gpui::{App, actions};
pub use gui::{open_main_window, setup_app};
use tracing::{info, warn};

actions!(ride_hailing, [Quit, VerboseLogging]);

// Takes a reference to the action (often unused) and mutable app context
pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}

/// Raises the log filter to `debug` for the rest of the session.
pub fn verbose_logging(
    _: &VerboseLogging,
    _cx: &mut App,
) {
    match logging::set_log_level("debug") {
        Ok(()) => info!("log level set to debug"),
        Err(error) => warn!(%error, "log level unchanged"),
    }
}
