//! Built-in look: gray-bracketed magenta clock, a badge per level, then the message.

use crate::fmt::{FormatValue, style, style_all};
use crate::level::Level;
use crate::sink::{Sink, SinkTable};
use chrono::Local;
use std::collections::HashMap;

pub(super) fn default_pattern() -> String {
    format!(
        "{}{{{{date}}}}{} {{{{type}}}}: {{{{message}}}}",
        style("gray", "["),
        style("gray", "]")
    )
}

/// Level badge: the level name with a space either side, styled per level.
#[must_use]
pub fn type_tag(level: Level) -> String {
    let label = format!(" {level} ");
    match level {
        Level::Verbose => style_all(&["bg_magenta", "white"], &label),
        Level::Info => style_all(&["bright_bg_cyan", "black"], &label),
        Level::Error => style_all(&["bg_red", "white"], &label),
        Level::Warning => style_all(&["bright_bg_yellow", "black"], &label),
        Level::Notice => style_all(&["bg_blue", "white"], &label),
        Level::Debug => style_all(&["bg_white", "black"], &label),
        Level::Log | Level::Clear | Level::Blank => label,
    }
}

/// Bindings for the placeholders of the default pattern.
#[must_use]
pub fn default_formats() -> HashMap<String, FormatValue> {
    let mut formats = HashMap::new();
    formats.insert(
        "date".to_string(),
        FormatValue::func(|_| style("magenta", &Local::now().format("%H:%M:%S").to_string())),
    );
    formats.insert(
        "message".to_string(),
        FormatValue::func(|data| data.message.to_string()),
    );
    formats.insert(
        "type".to_string(),
        FormatValue::func(|data| type_tag(data.level)),
    );
    formats
}

/// Errors go to stderr, everything else (including `clear`) to stdout.
#[must_use]
pub fn default_streams() -> SinkTable {
    let mut streams = SinkTable::new();
    for level in Level::emitting() {
        let sink = if level == Level::Error {
            Sink::stderr()
        } else {
            Sink::stdout()
        };
        streams.insert(level.as_str().to_string(), sink);
    }
    streams.insert(Level::Clear.as_str().to_string(), Sink::stdout());
    streams
}
