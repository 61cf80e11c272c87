//! Builds the message text from positional arguments. A first argument carrying
//! `%` specifiers acts as a format string; otherwise arguments are space-joined.
//! A lone argument is always taken verbatim.

use std::fmt::Display;

/// Renders `args` into one message string.
///
/// Supported specifiers: `%s` `%j` `%o` `%O` (display), `%d` `%f` (number or `NaN`),
/// `%i` (truncated integer or `NaN`), `%c` (consumes an argument, prints nothing)
/// and `%%`. A specifier with no argument left is kept literally, and leftover
/// arguments are appended with single spaces.
#[must_use]
pub fn format_args(args: &[&dyn Display]) -> String {
    let Some((first, rest)) = args.split_first() else {
        return String::new();
    };

    let first = first.to_string();
    let mut remaining = rest.iter();
    let mut out = String::with_capacity(first.len());

    if !rest.is_empty() && first.contains('%') {
        let mut chars = first.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }

            let Some(&spec) = chars.peek() else {
                out.push('%');
                break;
            };

            match spec {
                '%' => {
                    chars.next();
                    out.push('%');
                }
                's' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O' | 'c' => {
                    chars.next();
                    match remaining.next() {
                        Some(arg) => out.push_str(&convert(spec, &arg.to_string())),
                        None => {
                            out.push('%');
                            out.push(spec);
                        }
                    }
                }
                _ => out.push('%'),
            }
        }
    } else {
        out.push_str(&first);
    }

    for arg in remaining {
        out.push(' ');
        out.push_str(&arg.to_string());
    }

    out
}

fn convert(spec: char, value: &str) -> String {
    match spec {
        'd' | 'f' => value
            .trim()
            .parse::<f64>()
            .map_or_else(|_| "NaN".to_string(), |n| n.to_string()),
        'i' => value.trim().parse::<f64>().map_or_else(
            |_| "NaN".to_string(),
            |n| {
                if n.is_finite() {
                    format!("{}", n.trunc())
                } else {
                    "NaN".to_string()
                }
            },
        ),
        'c' => String::new(),
        _ => value.to_string(),
    }
}
