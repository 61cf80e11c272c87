//! The facade callers hold. Each emitting call formats with the current options,
//! writes to the level's stream and leaves a record in the history buffer.
//! Sink failures end up on that record instead of reaching the caller.

mod from_config;

use crate::error::Error;
use crate::fmt::{style, template};
use crate::history::{HistoryBuffer, LogRecord};
use crate::internal;
use crate::level::Level;
use crate::options::{Options, Overrides};
use crate::sink;
use std::fmt::Display;

/// Owns its options and history outright; share an instance across threads by
/// wrapping it in a `Mutex`.
#[derive(Debug)]
pub struct Logger {
    options: Options,
    history: HistoryBuffer,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Overrides::new())
    }
}

impl Logger {
    /// Defaults with `overrides` folded in.
    #[must_use]
    pub fn new(overrides: Overrides) -> Self {
        let options = Options::with_overrides(overrides);
        let history = HistoryBuffer::new(options.max_log_history);
        Self { options, history }
    }

    /// Deep-merges `overrides` into the current options. An empty `Overrides`
    /// changes nothing.
    pub fn set_options(&mut self, overrides: Overrides) -> &mut Self {
        if overrides.is_empty() {
            return self;
        }
        self.options.merge(overrides);
        self.history.set_max(self.options.max_log_history);
        self
    }

    /// Returns the value just set.
    pub const fn set_verbose(&mut self, enabled: bool) -> bool {
        self.options.verbose = enabled;
        enabled
    }

    /// Returns the value just set.
    pub const fn set_debug(&mut self, enabled: bool) -> bool {
        self.options.debug = enabled;
        enabled
    }

    /// `verbose` and `debug` are gated by their flags; everything else always passes.
    #[must_use]
    pub const fn is_enabled(&self, level: Level) -> bool {
        match level {
            Level::Verbose => self.options.verbose,
            Level::Debug => self.options.debug,
            _ => true,
        }
    }

    /// Formats `args` (printf-style when the first one holds `%` specifiers) and
    /// writes the result to the level's stream. Control levels are routed to
    /// [`Logger::clear`] and [`Logger::blank`].
    pub fn emit(&mut self, level: Level, args: &[&dyn Display]) -> &mut Self {
        match level {
            Level::Clear => return self.clear(true),
            Level::Blank => return self.blank(),
            _ => {}
        }
        if !self.is_enabled(level) {
            return self;
        }

        let formatted = template::format(level, args, &self.options);
        let output = if self.options.colors {
            formatted.output
        } else {
            style::strip(&formatted.output)
        };

        self.write(level, formatted.message, output, level.as_str())
    }

    /// Only when verbose output is enabled.
    pub fn verbose(&mut self, msg: impl Display) -> &mut Self {
        self.emit(Level::Verbose, &[&msg])
    }

    pub fn info(&mut self, msg: impl Display) -> &mut Self {
        self.emit(Level::Info, &[&msg])
    }

    pub fn error(&mut self, msg: impl Display) -> &mut Self {
        self.emit(Level::Error, &[&msg])
    }

    pub fn warning(&mut self, msg: impl Display) -> &mut Self {
        self.emit(Level::Warning, &[&msg])
    }

    pub fn notice(&mut self, msg: impl Display) -> &mut Self {
        self.emit(Level::Notice, &[&msg])
    }

    /// Only when debug output is enabled.
    pub fn debug(&mut self, msg: impl Display) -> &mut Self {
        self.emit(Level::Debug, &[&msg])
    }

    pub fn log(&mut self, msg: impl Display) -> &mut Self {
        self.emit(Level::Log, &[&msg])
    }

    /// Writes the full clear code, or the cursor-home code when `full` is false,
    /// to the `clear` stream.
    pub fn clear(&mut self, full: bool) -> &mut Self {
        let code = if full {
            self.options.clear_codes.full.clone()
        } else {
            self.options.clear_codes.standard.clone()
        };
        self.write(Level::Clear, code.clone(), code, Level::Clear.as_str())
    }

    /// Writes a newline to the `log` stream.
    pub fn blank(&mut self) -> &mut Self {
        self.blank_on(Level::Log.as_str())
    }

    /// Writes a newline to `stream`.
    pub fn blank_on(&mut self, stream: &str) -> &mut Self {
        self.write(Level::Blank, "\n".to_string(), "\n".to_string(), stream)
    }

    fn write(&mut self, level: Level, message: String, output: String, stream: &str) -> &mut Self {
        let result = sink::dispatch(&mut self.options.streams, stream, &output);
        match result {
            Err(ref e @ Error::Io(_)) => internal::error("SINK", &e.to_string()),
            Err(ref e) => internal::warn("SINK", &e.to_string()),
            Ok(()) => {}
        }

        let record = LogRecord::new(level, message, output, stream).with_error(result.err());
        self.history.record(record);
        self
    }

    /// Recent records, oldest first.
    #[must_use]
    pub const fn past_logs(&self) -> &HistoryBuffer {
        &self.history
    }

    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }
}
