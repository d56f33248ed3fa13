//! Date helper functions

use chrono::NaiveDate;

/// Moment.js tokens and their chrono equivalents, longest first within a family
const TOKENS: [(&str, &str); 11] = [
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("DDDD", "%j"),
    ("DD", "%d"),
    ("D", "%-d"),
    ("dddd", "%A"),
    ("ddd", "%a"),
];

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(date, "MMMM D, YYYY") // -> "January 5, 2024"
/// ```
pub fn format_date(date: NaiveDate, format: &str) -> String {
    date.format(&moment_to_chrono_format(format)).to_string()
}

/// Format a date for a `datetime` attribute
pub fn date_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Convert Moment.js format to chrono format
///
/// Scans left to right taking the longest token at each position, so a
/// replacement is never rescanned.
fn moment_to_chrono_format(format: &str) -> String {
    let mut result = String::with_capacity(format.len() * 2);
    let mut rest = format;

    'scan: while let Some(c) = rest.chars().next() {
        if c.is_ascii_alphabetic() {
            let mut best: Option<(&str, &str)> = None;
            for (token, replacement) in TOKENS {
                if rest.starts_with(token) && best.map_or(true, |(b, _)| token.len() > b.len()) {
                    best = Some((token, replacement));
                }
            }
            if let Some((token, replacement)) = best {
                result.push_str(replacement);
                rest = &rest[token.len()..];
                continue 'scan;
            }
        }

        if c == '%' {
            result.push_str("%%");
        } else {
            result.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }

    result
}
