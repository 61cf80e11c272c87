//! Named categories a message is emitted under, plus the two control levels
//! (`clear`, `blank`) that only ever appear in history records.

use std::fmt;
use std::str::FromStr;

/// Each level doubles as the default stream name its output is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    /// Chatty progress output, gated by the `verbose` flag.
    Verbose,
    #[default]
    Info,
    Error,
    Warning,
    Notice,
    /// Developer diagnostics, gated by the `debug` flag.
    Debug,
    /// Plain output with an unstyled tag.
    Log,
    /// Screen clear control call.
    Clear,
    /// Blank line control call.
    Blank,
}

impl Level {
    /// Lowercase because stream tables and config files key on these names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Info => "info",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Debug => "debug",
            Self::Log => "log",
            Self::Clear => "clear",
            Self::Blank => "blank",
        }
    }

    /// The seven levels that go through the formatter.
    #[must_use]
    pub const fn emitting() -> [Self; 7] {
        [
            Self::Verbose,
            Self::Info,
            Self::Error,
            Self::Warning,
            Self::Notice,
            Self::Debug,
            Self::Log,
        ]
    }

    /// `clear` and `blank` bypass the formatter and write fixed payloads.
    #[must_use]
    pub const fn is_control(self) -> bool {
        matches!(self, Self::Clear | Self::Blank)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "info" => Ok(Self::Info),
            "error" | "err" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "notice" => Ok(Self::Notice),
            "debug" => Ok(Self::Debug),
            "log" => Ok(Self::Log),
            "clear" => Ok(Self::Clear),
            "blank" => Ok(Self::Blank),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
