//! Configuration struct definitions.

use crate::internal;
use crate::options::Overrides;
use crate::sink::Sink;
use serde::Deserialize;
use std::collections::HashMap;

/// File form of the logger options. Every field is optional so an empty file,
/// or no file at all, leaves the built-in defaults in place.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Top-level pattern, e.g. `"[{{date}}] {{type}}: {{message}}"`.
    pub format: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub eol: Option<String>,
    pub verbose: Option<bool>,
    pub debug: Option<bool>,
    pub colors: Option<bool>,
    pub max_log_history: Option<usize>,
    /// Static placeholder values. Function-valued placeholders only exist in code.
    pub formats: HashMap<String, String>,
    pub clear_codes: ClearCodesConfig,
    /// Stream name → `"stdout"`, `"stderr"` or `"null"`.
    pub streams: HashMap<String, String>,
}

/// `[clear_codes]` section.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ClearCodesConfig {
    pub full: Option<String>,
    pub standard: Option<String>,
}

impl Config {
    /// Folds a sourced config into `self` without overwriting anything already
    /// set, so the including file's values take precedence over its includes.
    pub fn merge(&mut self, other: Self) {
        self.format = self.format.take().or(other.format);
        self.prefix = self.prefix.take().or(other.prefix);
        self.suffix = self.suffix.take().or(other.suffix);
        self.eol = self.eol.take().or(other.eol);
        self.verbose = self.verbose.or(other.verbose);
        self.debug = self.debug.or(other.debug);
        self.colors = self.colors.or(other.colors);
        self.max_log_history = self.max_log_history.or(other.max_log_history);
        self.clear_codes.full = self.clear_codes.full.take().or(other.clear_codes.full);
        self.clear_codes.standard = self
            .clear_codes
            .standard
            .take()
            .or(other.clear_codes.standard);
        for (k, v) in other.formats {
            self.formats.entry(k).or_insert(v);
        }
        for (k, v) in other.streams {
            self.streams.entry(k).or_insert(v);
        }
    }

    /// Converts to the partial options a logger merges. Unknown stream targets
    /// become unusable sinks, so writes to them show up as errors in history.
    #[must_use]
    pub fn to_overrides(&self) -> Overrides {
        let mut overrides = Overrides::new();

        if let Some(ref format) = self.format {
            overrides = overrides.format(format.as_str());
        }
        if let Some(ref prefix) = self.prefix {
            overrides = overrides.prefix(prefix);
        }
        if let Some(ref suffix) = self.suffix {
            overrides = overrides.suffix(suffix);
        }
        if let Some(ref eol) = self.eol {
            overrides = overrides.eol(eol);
        }
        if let Some(verbose) = self.verbose {
            overrides = overrides.verbose(verbose);
        }
        if let Some(debug) = self.debug {
            overrides = overrides.debug(debug);
        }
        if let Some(colors) = self.colors {
            overrides = overrides.colors(colors);
        }
        if let Some(max) = self.max_log_history {
            overrides = overrides.max_log_history(max);
        }
        if let Some(ref full) = self.clear_codes.full {
            overrides = overrides.clear_full(full);
        }
        if let Some(ref standard) = self.clear_codes.standard {
            overrides = overrides.clear_standard(standard);
        }
        for (name, value) in &self.formats {
            overrides = overrides.format_value(name, value.as_str());
        }
        for (name, target) in &self.streams {
            let sink = Sink::from_name(target);
            if matches!(sink, Sink::Unusable(_)) {
                internal::warn(
                    "CONFIG",
                    &format!("Unknown target '{target}' for stream '{name}'"),
                );
            }
            overrides = overrides.stream(name, sink);
        }

        overrides
    }
}

impl From<&Config> for Overrides {
    fn from(config: &Config) -> Self {
        config.to_overrides()
    }
}
