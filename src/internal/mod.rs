//! Footstep's own diagnostic logger: a regular [`Logger`] writing to stderr, so
//! config problems and sink failures are reported through the same pipeline.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if
//! multiple entry points race to call `init`.

use crate::config::Config;
use crate::level::Level;
use crate::logger::Logger;
use crate::options::Overrides;
use crate::sink::Sink;
use std::cell::Cell;
use std::sync::{Mutex, OnceLock, PoisonError};

static INTERNAL_LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

thread_local! {
    /// Set while this thread is inside the internal logger; nested reports are dropped.
    static REPORTING: Cell<bool> = const { Cell::new(false) };
}

/// Initializes with built-in settings. Only the first call takes effect.
pub fn init() {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| Mutex::new(build_internal_logger(None)));
    if !was_init {
        debug("INTERNAL", "Internal logger ready");
    }
}

/// Initializes with `config` applied on top of the stderr defaults. `debug = true`
/// in the config turns on debug diagnostics.
pub fn init_with_config(config: &Config) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| Mutex::new(build_internal_logger(Some(config))));
    if !was_init {
        debug("INTERNAL", "Internal logger ready");
    }
}

/// Whether `init` has run.
#[must_use]
pub fn is_initialized() -> bool {
    INTERNAL_LOGGER.get().is_some()
}

fn build_internal_logger(config: Option<&Config>) -> Logger {
    let mut overrides = Overrides::new()
        .prefix("footstep: ")
        .max_log_history(0)
        .stream(Level::Clear.as_str(), Sink::stderr());
    for level in Level::emitting() {
        overrides = overrides.stream(level.as_str(), Sink::stderr());
    }

    let mut logger = Logger::new(overrides);
    if let Some(config) = config {
        logger.set_options(config.to_overrides());
    }
    logger
}

/// Pre-init calls are dropped silently.
fn log(level: Level, scope: &str, msg: &str) {
    let Some(logger) = INTERNAL_LOGGER.get() else {
        return;
    };
    if REPORTING.with(Cell::get) {
        return;
    }

    REPORTING.with(|r| r.set(true));
    let line = format!("[{scope}] {msg}");
    logger
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .emit(level, &[&"%s", &line]);
    REPORTING.with(|r| r.set(false));
}

/// Visible only when the internal logger has debug enabled.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

/// Normal milestones, such as a loaded config.
pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Recoverable problems: unknown stream targets or missing includes.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}

/// Failures the caller should hear about.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
