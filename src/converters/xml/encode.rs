//! Keyboard → attribute tree

use super::escape::escape_legend;
use super::tree::*;
use crate::models::{Direction, Key, Keyboard, Row};

const DEFAULT_WIDTH: f64 = 1.0;
const DEFAULT_HEIGHT: f64 = 1.0;
const DEFAULT_SHIFT: f64 = 0.0;

/// Format a number the way it appears in layout files (`2`, `1.5`)
pub fn format_number(value: f64) -> String {
    value.to_string()
}

fn unless_default(value: f64, default: f64) -> Option<String> {
    if value == default {
        None
    } else {
        Some(format_number(value))
    }
}

/// Build the attribute tree for a keyboard, omitting every default value
pub fn encode(keyboard: &Keyboard) -> XmlDocument {
    let mut attributes = Attributes::new();
    attributes.set(ATTR_NAME, keyboard.name.as_str());
    if !keyboard.script.is_empty() {
        attributes.set(ATTR_SCRIPT, keyboard.script.as_str());
    }
    if !keyboard.bottom_row {
        attributes.set(ATTR_BOTTOM_ROW, "false");
    }
    attributes.set_opt(ATTR_WIDTH, keyboard.width.map(format_number));

    XmlDocument {
        keyboard: XmlKeyboard {
            attributes,
            rows: keyboard.rows.iter().map(encode_row).collect(),
        },
    }
}

fn encode_row(row: &Row) -> XmlRow {
    let mut attributes = Attributes::new();
    attributes.set_opt(ATTR_HEIGHT, unless_default(row.height, DEFAULT_HEIGHT));
    attributes.set_opt(ATTR_SHIFT, unless_default(row.shift, DEFAULT_SHIFT));

    XmlRow {
        attributes,
        keys: row.keys.iter().map(encode_key).collect(),
    }
}

fn encode_key(key: &Key) -> XmlKey {
    let mut attributes = Attributes::new();
    attributes.set_opt(ATTR_WIDTH, unless_default(key.width, DEFAULT_WIDTH));
    attributes.set_opt(ATTR_SHIFT, unless_default(key.shift, DEFAULT_SHIFT));
    if key.slider {
        attributes.set(ATTR_SLIDER, "true");
    }
    for direction in Direction::ALL {
        let legend = key.legend(direction);
        if !legend.is_empty() {
            attributes.set(direction.attribute_name(), escape_legend(legend));
        }
    }

    XmlKey { attributes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key_has_no_attributes() {
        let encoded = encode_key(&Key::new());
        assert!(encoded.attributes.is_empty());
    }

    #[test]
    fn test_key_attributes() {
        let mut key = Key::new().with_legend(Direction::Tap, "q").with_legend(Direction::BottomLeft, "@");
        key.width = 1.5;
        key.slider = true;
        let encoded = encode_key(&key);
        let pairs: Vec<_> = encoded.attributes.iter().collect();
        assert_eq!(
            pairs,
            vec![("width", "1.5"), ("slider", "true"), ("key0", "q"), ("key3", "\\@")]
        );
    }

    #[test]
    fn test_keyboard_attributes() {
        let mut keyboard = Keyboard::new();
        let encoded = encode(&keyboard);
        let pairs: Vec<_> = encoded.keyboard.attributes.iter().collect();
        assert_eq!(pairs, vec![("name", "Custom Layout")]);

        keyboard.script = "latin".to_string();
        keyboard.bottom_row = false;
        keyboard.width = Some(11.0);
        let encoded = encode(&keyboard);
        assert_eq!(encoded.keyboard.attributes.get(ATTR_SCRIPT), Some("latin"));
        assert_eq!(encoded.keyboard.attributes.get(ATTR_BOTTOM_ROW), Some("false"));
        assert_eq!(encoded.keyboard.attributes.get(ATTR_WIDTH), Some("11"));
    }

    #[test]
    fn test_row_defaults_omitted() {
        let mut row = Row::new();
        assert!(encode_row(&row).attributes.is_empty());
        row.shift = 0.5;
        assert_eq!(encode_row(&row).attributes.get(ATTR_SHIFT), Some("0.5"));
        assert_eq!(encode_row(&row).attributes.get(ATTR_HEIGHT), None);
    }
}
