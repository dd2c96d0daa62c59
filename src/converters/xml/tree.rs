//! Typed attribute tree for layout XML
//!
//! Mirrors the generic element shape used at the text boundary: every
//! element keeps its attributes under `$` and its children in one list per
//! tag name. Only the three layout elements exist here, so the tree is
//! already known to be well shaped.

use serde_json::{Map, Value};

pub const KEYBOARD_TAG: &str = "keyboard";
pub const ROW_TAG: &str = "row";
pub const KEY_TAG: &str = "key";

/// Object key holding an element's attributes
pub const ATTRIBUTES_KEY: &str = "$";
/// Object key holding an element's text content
pub const TEXT_KEY: &str = "_";

pub const ATTR_NAME: &str = "name";
pub const ATTR_SCRIPT: &str = "script";
pub const ATTR_BOTTOM_ROW: &str = "bottom_row";
/// Older spelling of `bottom_row`, still found in hand written layouts
pub const ATTR_BOTTOM_ROW_LEGACY: &str = "bottomRow";
pub const ATTR_WIDTH: &str = "width";
pub const ATTR_HEIGHT: &str = "height";
pub const ATTR_SHIFT: &str = "shift";
pub const ATTR_SLIDER: &str = "slider";

pub const KEYBOARD_ATTRIBUTES: &[&str] = &[
    ATTR_NAME,
    ATTR_SCRIPT,
    ATTR_BOTTOM_ROW,
    ATTR_BOTTOM_ROW_LEGACY,
    ATTR_WIDTH,
];

pub const ROW_ATTRIBUTES: &[&str] = &[ATTR_HEIGHT, ATTR_SHIFT];

pub const KEY_ATTRIBUTES: &[&str] = &[
    ATTR_WIDTH,
    ATTR_SHIFT,
    ATTR_SLIDER,
    "key0",
    "key1",
    "key2",
    "key3",
    "key4",
    "key5",
    "key6",
    "key7",
    "key8",
];

/// String attributes of one element, in insertion order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing any previous value
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name.to_string(), value)),
        }
    }

    /// Set the attribute when `value` is present; absent means omitted
    pub fn set_opt(&mut self, name: &str, value: Option<String>) {
        if let Some(value) = value {
            self.set(name, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .0
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        Value::Object(map)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct XmlKey {
    pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct XmlRow {
    pub attributes: Attributes,
    pub keys: Vec<XmlKey>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct XmlKeyboard {
    pub attributes: Attributes,
    pub rows: Vec<XmlRow>,
}

/// A whole layout document: a single `keyboard` root element
#[derive(Clone, Debug, Default, PartialEq)]
pub struct XmlDocument {
    pub keyboard: XmlKeyboard,
}

impl XmlDocument {
    /// Convert to the untyped `{keyboard: {$, row: [{$, key: [{$}]}]}}` shape
    ///
    /// Key elements always carry `$` (possibly empty). Rows and the keyboard
    /// carry it only when they have attributes.
    pub fn to_value(&self) -> Value {
        let rows: Vec<Value> = self
            .keyboard
            .rows
            .iter()
            .map(|row| {
                let keys: Vec<Value> = row
                    .keys
                    .iter()
                    .map(|key| {
                        let mut object = Map::new();
                        object.insert(ATTRIBUTES_KEY.to_string(), key.attributes.to_value());
                        Value::Object(object)
                    })
                    .collect();
                element_value(&row.attributes, KEY_TAG, keys)
            })
            .collect();

        let mut top = Map::new();
        top.insert(
            KEYBOARD_TAG.to_string(),
            element_value(&self.keyboard.attributes, ROW_TAG, rows),
        );
        Value::Object(top)
    }
}

fn element_value(attributes: &Attributes, child_tag: &str, children: Vec<Value>) -> Value {
    let mut object = Map::new();
    if !attributes.is_empty() {
        object.insert(ATTRIBUTES_KEY.to_string(), attributes.to_value());
    }
    object.insert(child_tag.to_string(), Value::Array(children));
    Value::Object(object)
}
