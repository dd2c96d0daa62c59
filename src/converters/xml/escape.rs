//! Legend escaping for Android resource XML
//!
//! Android treats a value consisting of exactly `@`, `#`, `\` or `?` as a
//! resource reference or escape marker. Such legends get a leading
//! backslash. Longer values are never touched.

use std::borrow::Cow;

const RESERVED: [char; 4] = ['@', '#', '\\', '?'];

fn single_reserved(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if RESERVED.contains(&c) => Some(c),
        _ => None,
    }
}

pub fn escape_legend(legend: &str) -> Cow<'_, str> {
    match single_reserved(legend) {
        Some(c) => Cow::Owned(format!("\\{}", c)),
        None => Cow::Borrowed(legend),
    }
}

pub fn unescape_legend(value: &str) -> Cow<'_, str> {
    match value.strip_prefix('\\').and_then(single_reserved) {
        Some(c) => Cow::Owned(c.to_string()),
        None => Cow::Borrowed(value),
    }
}
