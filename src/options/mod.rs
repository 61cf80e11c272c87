//! The configuration a logger owns, and the partial form used to build and update it.
//!
//! Every logger starts from a fresh [`Options::default()`] and folds caller
//! [`Overrides`] into it. Nothing here is shared between instances, so changing
//! one logger's formats can never leak into another.

mod defaults;

pub use defaults::{default_formats, default_streams, type_tag};

use crate::fmt::{FormatData, FormatTemplate, FormatValue};
use crate::sink::{Sink, SinkTable};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Platform line terminator.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

pub const DEFAULT_MAX_LOG_HISTORY: usize = 50;

type PatternFn = dyn Fn(&FormatData<'_>) -> String + Send + Sync;

/// The top-level format: a fixed pattern, or a function choosing the pattern per record.
#[derive(Clone)]
pub enum Format {
    Template(FormatTemplate),
    /// The returned string is parsed and rendered like any other pattern.
    Func(Arc<PatternFn>),
}

impl Format {
    #[must_use]
    pub fn pattern(pattern: &str) -> Self {
        Self::Template(FormatTemplate::parse(pattern))
    }

    pub fn func(f: impl Fn(&FormatData<'_>) -> String + Send + Sync + 'static) -> Self {
        Self::Func(Arc::new(f))
    }

    #[must_use]
    #[allow(clippy::implicit_hasher)]
    pub fn render(&self, formats: &HashMap<String, FormatValue>, data: &FormatData<'_>) -> String {
        match self {
            Self::Template(template) => template.render(formats, data),
            Self::Func(f) => FormatTemplate::parse(&f(data)).render(formats, data),
        }
    }
}

impl Default for Format {
    fn default() -> Self {
        Self::pattern(&defaults::default_pattern())
    }
}

impl fmt::Debug for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(t) => f.debug_tuple("Template").field(&t.as_str()).finish(),
            Self::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl From<&str> for Format {
    fn from(pattern: &str) -> Self {
        Self::pattern(pattern)
    }
}

/// Escape sequences written by `clear`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearCodes {
    /// Erases the whole screen.
    pub full: String,
    /// Moves the cursor home without erasing.
    pub standard: String,
}

impl Default for ClearCodes {
    fn default() -> Self {
        Self {
            full: "\x1b[2J".to_string(),
            standard: "\x1b[0f".to_string(),
        }
    }
}

/// Complete logger configuration.
#[derive(Debug)]
pub struct Options {
    pub format: Format,
    /// Placeholder name → value or function.
    pub formats: HashMap<String, FormatValue>,
    pub prefix: String,
    pub suffix: String,
    pub eol: String,
    pub verbose: bool,
    pub debug: bool,
    /// When off, styling is stripped from output before it reaches a sink.
    pub colors: bool,
    pub max_log_history: usize,
    pub clear_codes: ClearCodes,
    /// Stream name → sink. Level names, plus `clear`.
    pub streams: SinkTable,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            format: Format::default(),
            formats: default_formats(),
            prefix: String::new(),
            suffix: String::new(),
            eol: LINE_ENDING.to_string(),
            verbose: false,
            debug: false,
            colors: true,
            max_log_history: DEFAULT_MAX_LOG_HISTORY,
            clear_codes: ClearCodes::default(),
            streams: default_streams(),
        }
    }
}

impl Options {
    /// Builds defaults and folds `overrides` into them.
    #[must_use]
    pub fn with_overrides(overrides: Overrides) -> Self {
        let mut options = Self::default();
        options.merge(overrides);
        options
    }

    /// Deep merge: mapping fields (`formats`, `streams`, `clear_codes`) merge key by
    /// key, everything else is replaced when present. Sinks are replaced whole.
    pub fn merge(&mut self, overrides: Overrides) {
        let Overrides {
            format,
            formats,
            prefix,
            suffix,
            eol,
            verbose,
            debug,
            colors,
            max_log_history,
            clear_full,
            clear_standard,
            streams,
        } = overrides;

        if let Some(format) = format {
            self.format = format;
        }
        self.formats.extend(formats);
        if let Some(prefix) = prefix {
            self.prefix = prefix;
        }
        if let Some(suffix) = suffix {
            self.suffix = suffix;
        }
        if let Some(eol) = eol {
            self.eol = eol;
        }
        if let Some(verbose) = verbose {
            self.verbose = verbose;
        }
        if let Some(debug) = debug {
            self.debug = debug;
        }
        if let Some(colors) = colors {
            self.colors = colors;
        }
        if let Some(max) = max_log_history {
            self.max_log_history = max;
        }
        if let Some(full) = clear_full {
            self.clear_codes.full = full;
        }
        if let Some(standard) = clear_standard {
            self.clear_codes.standard = standard;
        }
        self.streams.extend(streams);
    }
}

/// Partial configuration. Unset fields leave the target untouched, so
/// `Overrides::new()` merges as a no-op.
#[derive(Debug, Default)]
pub struct Overrides {
    pub(crate) format: Option<Format>,
    pub(crate) formats: HashMap<String, FormatValue>,
    pub(crate) prefix: Option<String>,
    pub(crate) suffix: Option<String>,
    pub(crate) eol: Option<String>,
    pub(crate) verbose: Option<bool>,
    pub(crate) debug: Option<bool>,
    pub(crate) colors: Option<bool>,
    pub(crate) max_log_history: Option<usize>,
    pub(crate) clear_full: Option<String>,
    pub(crate) clear_standard: Option<String>,
    pub(crate) streams: SinkTable,
}

impl Overrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole format with a pattern string or a [`Format::func`].
    #[must_use]
    pub fn format(mut self, format: impl Into<Format>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Binds one placeholder. Other placeholders keep their current values.
    #[must_use]
    pub fn format_value(mut self, name: impl Into<String>, value: impl Into<FormatValue>) -> Self {
        self.formats.insert(name.into(), value.into());
        self
    }

    /// Binds one placeholder to a function of the record being formatted.
    #[must_use]
    pub fn format_fn(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&FormatData<'_>) -> String + Send + Sync + 'static,
    ) -> Self {
        self.formats.insert(name.into(), FormatValue::func(f));
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    #[must_use]
    pub fn eol(mut self, eol: impl Into<String>) -> Self {
        self.eol = Some(eol.into());
        self
    }

    #[must_use]
    pub const fn verbose(mut self, enabled: bool) -> Self {
        self.verbose = Some(enabled);
        self
    }

    #[must_use]
    pub const fn debug(mut self, enabled: bool) -> Self {
        self.debug = Some(enabled);
        self
    }

    /// Piped output and CI logs can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = Some(enabled);
        self
    }

    #[must_use]
    pub const fn max_log_history(mut self, max: usize) -> Self {
        self.max_log_history = Some(max);
        self
    }

    #[must_use]
    pub fn clear_full(mut self, code: impl Into<String>) -> Self {
        self.clear_full = Some(code.into());
        self
    }

    #[must_use]
    pub fn clear_standard(mut self, code: impl Into<String>) -> Self {
        self.clear_standard = Some(code.into());
        self
    }

    /// Routes one stream name to `sink`, replacing whatever sink it had.
    #[must_use]
    pub fn stream(mut self, name: impl Into<String>, sink: Sink) -> Self {
        self.streams.insert(name.into(), sink);
        self
    }

    /// `true` when merging would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.format.is_none()
            && self.formats.is_empty()
            && self.prefix.is_none()
            && self.suffix.is_none()
            && self.eol.is_none()
            && self.verbose.is_none()
            && self.debug.is_none()
            && self.colors.is_none()
            && self.max_log_history.is_none()
            && self.clear_full.is_none()
            && self.clear_standard.is_none()
            && self.streams.is_empty()
    }
}
