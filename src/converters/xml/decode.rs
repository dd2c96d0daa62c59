//! Attribute tree → keyboard
//!
//! Decoding never fails. Anything missing or unreadable becomes its default.

use super::escape::unescape_legend;
use super::tree::*;
use crate::models::{Direction, Key, Keyboard, Row, DEFAULT_KEYBOARD_NAME};

/// Length of the leading decimal number in `text`, `parseFloat` style
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return 0;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    end
}

/// Parse a numeric attribute
///
/// Trailing garbage is ignored (`"1.5em"` reads as 1.5). Non-finite and
/// unparseable values count as absent.
pub fn parse_number(value: &str) -> Option<f64> {
    let text = value.trim_start();
    let len = numeric_prefix_len(text);
    text[..len].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Sizes must be positive; zero or negative counts as absent
fn positive(attributes: &Attributes, name: &str) -> Option<f64> {
    attributes
        .get(name)
        .and_then(parse_number)
        .filter(|v| *v > 0.0)
}

fn positive_or(attributes: &Attributes, name: &str, default: f64) -> f64 {
    positive(attributes, name).unwrap_or(default)
}

/// Offsets may be zero but never negative
fn non_negative_or(attributes: &Attributes, name: &str, default: f64) -> f64 {
    attributes
        .get(name)
        .and_then(parse_number)
        .filter(|v| *v >= 0.0)
        .unwrap_or(default)
}

/// `bottom_row` wins over the legacy `bottomRow` when both are present
fn decode_bottom_row(attributes: &Attributes) -> bool {
    let value = attributes
        .get(ATTR_BOTTOM_ROW)
        .or_else(|| attributes.get(ATTR_BOTTOM_ROW_LEGACY));
    value != Some("false")
}

pub fn decode(document: &XmlDocument) -> Keyboard {
    let keyboard = &document.keyboard;
    let attributes = &keyboard.attributes;

    Keyboard {
        name: attributes
            .get(ATTR_NAME)
            .unwrap_or(DEFAULT_KEYBOARD_NAME)
            .to_string(),
        script: attributes.get(ATTR_SCRIPT).unwrap_or_default().to_string(),
        rows: keyboard.rows.iter().map(decode_row).collect(),
        bottom_row: decode_bottom_row(attributes),
        width: positive(attributes, ATTR_WIDTH),
    }
}

fn decode_row(row: &XmlRow) -> Row {
    Row {
        height: positive_or(&row.attributes, ATTR_HEIGHT, 1.0),
        shift: non_negative_or(&row.attributes, ATTR_SHIFT, 0.0),
        keys: row.keys.iter().map(decode_key).collect(),
    }
}

fn decode_key(key: &XmlKey) -> Key {
    let attributes = &key.attributes;
    let mut decoded = Key {
        width: positive_or(attributes, ATTR_WIDTH, 1.0),
        shift: non_negative_or(attributes, ATTR_SHIFT, 0.0),
        slider: attributes.get(ATTR_SLIDER) == Some("true"),
        ..Key::new()
    };
    for direction in Direction::ALL {
        if let Some(value) = attributes.get(direction.attribute_name()) {
            decoded.legends[direction.index()] = unescape_legend(value).into_owned();
        }
    }
    decoded
}
