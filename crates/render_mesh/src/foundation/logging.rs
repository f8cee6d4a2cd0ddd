//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Panics if a global logger has already been installed; use [`try_init`]
/// where that can happen (tests, embedding applications).
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system, ignoring an already-installed logger
pub fn try_init() {
    let _ = env_logger::builder().is_test(cfg!(test)).try_init();
}
