//! Named SGR styles (`red`, `bg_blue`, `bold`, ...) generated from fixed code tables,
//! and the inverse operation that strips every SGR sequence from a string.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

const ESC: &str = "\x1b[";

/// Order matters: the color's index is added to the family's base code.
const BASE_COLORS: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// (prefix, first code, exit code) for each color family.
const COLOR_FAMILIES: [(&str, u8, u8); 4] = [
    ("", 30, 39),
    ("bright_", 90, 39),
    ("bg_", 40, 49),
    ("bright_bg_", 100, 49),
];

/// Text attributes reset with their own class-specific code, not a full reset.
const ATTRIBUTES: [(&str, u8, u8); 12] = [
    ("bold", 1, 22),
    ("faint", 2, 22),
    ("italic", 3, 23),
    ("underline", 4, 24),
    ("slow_blink", 5, 25),
    ("rapid_blink", 6, 25),
    ("inverse", 7, 27),
    ("hidden", 8, 28),
    ("strikethrough", 9, 29),
    ("framed", 51, 54),
    ("encircled", 52, 54),
    ("overlined", 53, 55),
];

/// Matches `ESC [ <params> m`; params may be empty or `;`-separated.
static SGR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("Invalid SGR regex"));

static TABLE: LazyLock<HashMap<String, StyleCode>> = LazyLock::new(build_table);

/// One entry of the style table: the SGR code that switches the style on, and the
/// one that switches only that attribute class off again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleCode {
    pub name: String,
    pub enter: u8,
    pub exit: u8,
}

impl StyleCode {
    fn new(name: impl Into<String>, enter: u8, exit: u8) -> Self {
        Self {
            name: name.into(),
            enter,
            exit,
        }
    }

    /// Returns `None` for names outside the table.
    #[must_use]
    pub fn lookup(name: &str) -> Option<&'static Self> {
        TABLE.get(name)
    }

    /// Every generated style, sorted by name.
    #[must_use]
    pub fn all() -> Vec<&'static Self> {
        let mut codes: Vec<&Self> = TABLE.values().collect();
        codes.sort_by(|a, b| a.name.cmp(&b.name));
        codes
    }

    #[must_use]
    pub fn enter_sequence(&self) -> String {
        format!("{ESC}{}m", self.enter)
    }

    #[must_use]
    pub fn exit_sequence(&self) -> String {
        format!("{ESC}{}m", self.exit)
    }

    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        format!("{}{text}{}", self.enter_sequence(), self.exit_sequence())
    }
}

fn build_table() -> HashMap<String, StyleCode> {
    let mut table = HashMap::new();

    for (prefix, base, exit) in COLOR_FAMILIES {
        for (offset, color) in (0u8..).zip(BASE_COLORS) {
            let name = format!("{prefix}{color}");
            table.insert(name.clone(), StyleCode::new(name, base + offset, exit));
        }
    }

    for (name, enter, exit) in ATTRIBUTES {
        table.insert(name.to_string(), StyleCode::new(name, enter, exit));
    }

    table.insert("gray".to_string(), StyleCode::new("gray", 90, 39));
    table.insert("grey".to_string(), StyleCode::new("grey", 90, 39));
    table.insert("reset".to_string(), StyleCode::new("reset", 0, 0));

    table
}

/// Wraps `text` in the named style. Unknown names leave the text untouched so a
/// typo in a format function degrades to plain output.
#[must_use]
pub fn style(name: &str, text: &str) -> String {
    StyleCode::lookup(name).map_or_else(|| text.to_string(), |code| code.apply(text))
}

/// Applies several styles, first name innermost: `style_all(&["bg_red", "white"], t)`
/// renders like `white(bg_red(t))`.
#[must_use]
pub fn style_all(names: &[&str], text: &str) -> String {
    names
        .iter()
        .fold(text.to_string(), |acc, name| style(name, &acc))
}

/// Removes every SGR sequence in a single global pass, stacked ones included.
#[must_use]
pub fn strip(text: &str) -> String {
    SGR_REGEX.replace_all(text, "").into_owned()
}

/// Width as the terminal will show it, ignoring escape sequences.
#[must_use]
pub fn visible_len(text: &str) -> usize {
    SGR_REGEX.replace_all(text, "").chars().count()
}
