//! Built-in starting layouts
//!
//! The catalog is built once on first use and handed out by value, so
//! editing a keyboard loaded from a template never touches the catalog.

use once_cell::sync::Lazy;

use crate::models::{Key, Keyboard, Row, LEGEND_COUNT};

/// Template loaded when the editor starts
pub const DEFAULT_TEMPLATE: &str = "QWERTY";

struct KeySpec {
    width: f64,
    shift: f64,
    legends: [&'static str; LEGEND_COUNT],
}

const fn key(legends: [&'static str; LEGEND_COUNT]) -> KeySpec {
    KeySpec {
        width: 1.0,
        shift: 0.0,
        legends,
    }
}

const fn wide(width: f64, legends: [&'static str; LEGEND_COUNT]) -> KeySpec {
    KeySpec {
        width,
        shift: 0.0,
        legends,
    }
}

const fn shifted(shift: f64, legends: [&'static str; LEGEND_COUNT]) -> KeySpec {
    KeySpec {
        width: 1.0,
        shift,
        legends,
    }
}

// Legend order: tap, top-left, top-right, bottom-left, bottom-right,
// left, right, top, bottom.
const QWERTY_ROWS: &[&[KeySpec]] = &[
    &[
        key(["q", "", "1", "", "esc", "", "", "", ""]),
        key(["w", "~", "2", "@", "", "", "", "", ""]),
        key(["e", "!", "3", "#", "loc \u{20ac}", "", "", "", ""]),
        key(["r", "loc \u{20aa}", "4", "$", "", "", "", "", ""]),
        key(["t", "", "5", "%", "", "", "", "", ""]),
        key(["y", "", "6", "^", "", "", "", "", ""]),
        key(["u", "", "7", "&", "", "", "", "", ""]),
        key(["i", "", "8", "*", "", "", "", "", ""]),
        key(["o", "loc accent_macron", "9", "(", ")", "", "", "", ""]),
        key(["p", "", "0", "f11_placeholder", "f12_placeholder", "", "", "", ""]),
    ],
    &[
        shifted(0.5, ["a", "tab", "`", "", "", "", "", "", ""]),
        key(["s", "loc accent_ring", "", "loc \u{df}", "loc accent_ogonek", "", "", "", ""]),
        key(["d", "loc accent_grave", "loc \u{a3}", "loc accent_aigu", "", "", "", "", ""]),
        key(["f", "loc accent_dot_above", "", "", "", "", "", "", ""]),
        key(["g", "loc accent_caron", "-", "_", "", "", "", "", ""]),
        key(["h", "", "=", "+", "", "", "", "", ""]),
        key(["j", "loc accent_trema", "loc accent_circonflexe", "{", "}", "", "", "", ""]),
        key(["k", "loc accent_double_aigu", "", "[", "]", "", "", "", ""]),
        key(["l", "", "|", "\\", "", "", "", "", ""]),
    ],
    &[
        wide(1.5, ["shift", "", "loc capslock", "", "", "", "", "", ""]),
        key(["z", "", "", "", "", "", "", "", ""]),
        key(["x", "", "", "", "", "", "", "", ""]),
        key(["c", "loc accent_cedille", "<", ".", "", "", "", "", ""]),
        key(["v", "", ">", ",", "", "", "", "", ""]),
        key(["b", "", "?", "/", "", "", "", "", ""]),
        key(["n", "loc accent_tilde", ":", ";", "", "", "", "", ""]),
        key(["m", "", "\"", "'", "", "", "", "", ""]),
        wide(1.5, ["backspace", "", "delete", "", "", "", "", "", ""]),
    ],
];

fn build(name: &str, rows: &[&[KeySpec]]) -> Keyboard {
    let rows = rows
        .iter()
        .map(|specs| Row {
            keys: specs
                .iter()
                .map(|spec| Key {
                    width: spec.width,
                    shift: spec.shift,
                    legends: spec.legends.map(str::to_string),
                    ..Key::new()
                })
                .collect(),
            ..Row::new()
        })
        .collect();

    Keyboard {
        name: name.to_string(),
        rows,
        ..Keyboard::new()
    }
}

static CATALOG: Lazy<Vec<(&'static str, Keyboard)>> = Lazy::new(|| {
    vec![
        ("Blank", Keyboard::new()),
        ("QWERTY", build("QWERTY", QWERTY_ROWS)),
    ]
});

/// Template names in display order
pub fn template_names() -> Vec<&'static str> {
    CATALOG.iter().map(|(name, _)| *name).collect()
}

/// Copy of the named template
pub fn template(name: &str) -> Option<Keyboard> {
    CATALOG
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, keyboard)| keyboard.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{effective_width, Direction};

    #[test]
    fn test_catalog_names() {
        assert_eq!(template_names(), vec!["Blank", "QWERTY"]);
        assert!(template("Dvorak").is_none());
    }

    #[test]
    fn test_blank_template() {
        assert_eq!(template("Blank").unwrap(), Keyboard::new());
    }

    #[test]
    fn test_qwerty_shape() {
        let qwerty = template("QWERTY").unwrap();
        assert_eq!(qwerty.name, "QWERTY");
        assert!(qwerty.bottom_row);
        let counts: Vec<usize> = qwerty.rows.iter().map(|r| r.keys.len()).collect();
        assert_eq!(counts, vec![10, 9, 9]);
        assert_eq!(qwerty.rows[1].keys[0].shift, 0.5);
        assert_eq!(qwerty.rows[2].keys[8].legend(Direction::Tap), "backspace");
        assert_eq!(qwerty.rows[1].keys[8].legend(Direction::BottomLeft), "\\");
        assert_eq!(effective_width(&qwerty), 10.0);
    }

    #[test]
    fn test_template_copies_are_independent() {
        let mut copy = template("QWERTY").unwrap();
        copy.rows.clear();
        assert_eq!(template("QWERTY").unwrap().rows.len(), 3);
    }
}
