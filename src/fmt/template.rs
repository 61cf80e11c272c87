//! `{{name}}` templates. Patterns are parsed into segments once; each placeholder
//! resolves against the `formats` table at render time, either to a static value
//! or to the output of a function of the record being formatted.

use super::printf;
use crate::internal;
use crate::level::Level;
use crate::options::Options;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Upper bound on nested expansion. A value produced by a format function may
/// itself contain placeholders, but only this many levels deep.
pub const MAX_DEPTH: usize = 8;

/// Upper bound on placeholder lookups in one render. Past it, values are inserted
/// without further expansion, which keeps fan-out chains from growing exponentially.
pub const MAX_RESOLUTIONS: usize = 1024;

/// Placeholder whose value is always inserted verbatim.
pub const MESSAGE: &str = "message";

/// What a format function gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct FormatData<'a> {
    /// Message after printf-style interpolation.
    pub message: &'a str,
    pub level: Level,
    pub options: &'a Options,
}

type FormatFn = dyn Fn(&FormatData<'_>) -> String + Send + Sync;

/// Binding for one placeholder name.
#[derive(Clone)]
pub enum FormatValue {
    /// Substituted literally.
    Static(String),
    /// Invoked once per placeholder occurrence.
    Func(Arc<FormatFn>),
}

impl FormatValue {
    #[must_use]
    pub fn value(value: impl Into<String>) -> Self {
        Self::Static(value.into())
    }

    pub fn func(f: impl Fn(&FormatData<'_>) -> String + Send + Sync + 'static) -> Self {
        Self::Func(Arc::new(f))
    }

    #[must_use]
    pub fn resolve(&self, data: &FormatData<'_>) -> String {
        match self {
            Self::Static(s) => s.clone(),
            Self::Func(f) => f(data),
        }
    }
}

impl fmt::Debug for FormatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(s) => f.debug_tuple("Static").field(s).finish(),
            Self::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl From<&str> for FormatValue {
    fn from(value: &str) -> Self {
        Self::Static(value.to_string())
    }
}

impl From<String> for FormatValue {
    fn from(value: String) -> Self {
        Self::Static(value)
    }
}

/// Parsed pattern pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// Name with the whitespace inside the braces trimmed.
    Placeholder(String),
}

/// Pre-parsed pattern, rendered on every log call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl FormatTemplate {
    /// Splits `pattern` at every `{{ ... }}` token. The first `}}` closes a token;
    /// an unclosed `{{` is kept as literal text.
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        let mut segments = Vec::new();
        let mut rest = pattern;

        while let Some(open) = rest.find("{{") {
            let after_open = &rest[open + 2..];
            let Some(close) = after_open.find("}}") else {
                break;
            };

            if open > 0 {
                push_literal(&mut segments, &rest[..open]);
            }
            segments.push(Segment::Placeholder(after_open[..close].trim().to_string()));
            rest = &after_open[close + 2..];
        }

        if !rest.is_empty() {
            push_literal(&mut segments, rest);
        }

        Self {
            source: pattern.to_string(),
            segments,
        }
    }

    /// The pattern this template was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn has_placeholders(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Placeholder(_)))
    }

    /// Substitutes every placeholder. Unknown names render as empty text, values
    /// containing further placeholders are expanded up to [`MAX_DEPTH`], and a
    /// placeholder never expands inside its own value. At most [`MAX_RESOLUTIONS`]
    /// lookups are expanded per render.
    #[must_use]
    #[allow(clippy::implicit_hasher)]
    pub fn render(&self, formats: &HashMap<String, FormatValue>, data: &FormatData<'_>) -> String {
        let mut expansion = Expansion::default();
        self.render_nested(formats, data, &mut expansion)
    }

    fn render_nested(
        &self,
        formats: &HashMap<String, FormatValue>,
        data: &FormatData<'_>,
        expansion: &mut Expansion,
    ) -> String {
        let mut out = String::with_capacity(self.source.len());

        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => out.push_str(s),
                Segment::Placeholder(name) => {
                    out.push_str(&resolve(name, formats, data, expansion));
                }
            }
        }

        out
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::parse("[{{date}}] {{type}}: {{message}}")
    }
}

impl From<&str> for FormatTemplate {
    fn from(pattern: &str) -> Self {
        Self::parse(pattern)
    }
}

fn push_literal(segments: &mut Vec<Segment>, text: &str) {
    if let Some(Segment::Literal(last)) = segments.last_mut() {
        last.push_str(text);
    } else {
        segments.push(Segment::Literal(text.to_string()));
    }
}

/// Per-render bookkeeping: names being expanded and lookups spent so far.
#[derive(Debug, Default)]
struct Expansion {
    stack: Vec<String>,
    resolutions: usize,
}

impl Expansion {
    /// Counts one lookup; `false` once the budget is spent. Reports the cutoff once.
    fn spend(&mut self, name: &str) -> bool {
        self.resolutions += 1;
        if self.resolutions == MAX_RESOLUTIONS + 1 {
            internal::debug(
                "TEMPLATE",
                &format!("Expansion budget {MAX_RESOLUTIONS} spent at '{name}'"),
            );
        }
        self.resolutions <= MAX_RESOLUTIONS
    }
}

fn resolve(
    name: &str,
    formats: &HashMap<String, FormatValue>,
    data: &FormatData<'_>,
    expansion: &mut Expansion,
) -> String {
    if expansion.stack.iter().any(|n| n == name) {
        internal::debug(
            "TEMPLATE",
            &format!("Placeholder '{name}' refers to itself, substituting nothing"),
        );
        return String::new();
    }

    let Some(value) = formats.get(name) else {
        return String::new();
    };

    let resolved = value.resolve(data);
    if name == MESSAGE {
        return resolved;
    }

    let nested = FormatTemplate::parse(&resolved);
    if !nested.has_placeholders() {
        return resolved;
    }
    if !expansion.spend(name) {
        return resolved;
    }
    if expansion.stack.len() + 1 >= MAX_DEPTH {
        internal::debug(
            "TEMPLATE",
            &format!("Expansion depth {MAX_DEPTH} reached at '{name}'"),
        );
        return resolved;
    }

    expansion.stack.push(name.to_string());
    let expanded = nested.render_nested(formats, data, expansion);
    expansion.stack.pop();
    expanded
}

/// Result of formatting one log call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    /// Message after printf-style interpolation, before templating.
    pub message: String,
    /// Final text handed to the sink.
    pub output: String,
}

/// Full formatting of one log call: builds the message from `args`, renders the
/// configured format and wraps it in `prefix`, `suffix` and `eol`.
#[must_use]
pub fn format(level: Level, args: &[&dyn Display], options: &Options) -> Formatted {
    let message = printf::format_args(args);
    let data = FormatData {
        message: &message,
        level,
        options,
    };

    let body = options.format.render(&options.formats, &data);
    let output = format!("{}{}{}{}", options.prefix, body, options.suffix, options.eol);

    Formatted { message, output }
}
