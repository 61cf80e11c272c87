//! Column alignment for tables of log labels. Pads every string to the width
//! of the longest one so messages after them start at the same column.

use super::style::visible_len;

/// Which side receives the padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Padding goes at the end.
    Left,
    /// Padding goes at the start.
    #[default]
    Right,
    /// Padding is split, with the odd space at the end.
    Center,
}

/// Pads each string to the longest visible width in `strings`. Styled strings are
/// measured without their escape sequences.
#[must_use]
pub fn pad<S: AsRef<str>>(strings: &[S], alignment: Alignment) -> Vec<String> {
    let longest = strings
        .iter()
        .map(|s| visible_len(s.as_ref()))
        .max()
        .unwrap_or(0);

    strings
        .iter()
        .map(|s| pad_to(s.as_ref(), longest, alignment))
        .collect()
}

/// Pads a single string to `width` visible columns; longer strings are returned as-is.
#[must_use]
pub fn pad_to(s: &str, width: usize, alignment: Alignment) -> String {
    let len = visible_len(s);
    if len >= width {
        return s.to_string();
    }

    let padding = width - len;
    match alignment {
        Alignment::Left => format!("{}{}", s, " ".repeat(padding)),
        Alignment::Right => format!("{}{}", " ".repeat(padding), s),
        Alignment::Center => {
            let left = padding / 2;
            let right = padding - left;
            format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
        }
    }
}
