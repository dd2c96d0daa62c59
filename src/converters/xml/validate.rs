//! Structural validation of an untyped layout tree
//!
//! Walks the generic `{keyboard: {$, row: [{$, key: [{$}]}]}}` shape and
//! either returns the typed [`XmlDocument`] or the first problem found.
//! Attribute values must still be strings here; numbers and booleans are
//! only interpreted by the decoder.

use serde_json::{Map, Value};
use thiserror::Error;

use super::tree::*;

/// Why a document cannot be treated as a layout
///
/// Row and key positions in messages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Document is not an xml object")]
    NotAnObject,

    #[error("Document is missing a keyboard element")]
    MissingKeyboard,

    #[error("Keyboard attributes are not an object")]
    KeyboardAttributesNotObject,

    #[error("Keyboard {0} attribute is not a string")]
    KeyboardAttributeNotString(&'static str),

    #[error("Keyboard is missing rows")]
    MissingRows,

    #[error("Row {} is not an object", .0 + 1)]
    RowNotObject(usize),

    #[error("Row {} attributes are not an object", .0 + 1)]
    RowAttributesNotObject(usize),

    #[error("Row {} {name} attribute is not a string", .row + 1)]
    RowAttributeNotString { row: usize, name: &'static str },

    #[error("Row {} is missing keys", .0 + 1)]
    MissingKeys(usize),

    #[error("Key {} in row {} is not an object", .key + 1, .row + 1)]
    KeyNotObject { row: usize, key: usize },

    #[error("Key {} in row {} is missing attributes", .key + 1, .row + 1)]
    MissingKeyAttributes { row: usize, key: usize },

    #[error("Key {} in row {} {name} attribute is not a string", .key + 1, .row + 1)]
    KeyAttributeNotString {
        row: usize,
        key: usize,
        name: &'static str,
    },
}

/// Check a parsed document and convert it to the typed tree
pub fn validate(document: &Value) -> Result<XmlDocument, ValidationError> {
    let top = document.as_object().ok_or(ValidationError::NotAnObject)?;
    let keyboard = top
        .get(KEYBOARD_TAG)
        .and_then(Value::as_object)
        .ok_or(ValidationError::MissingKeyboard)?;

    let attributes = match keyboard.get(ATTRIBUTES_KEY) {
        None => Attributes::new(),
        Some(value) => {
            let object = value
                .as_object()
                .ok_or(ValidationError::KeyboardAttributesNotObject)?;
            read_attributes(object, KEYBOARD_ATTRIBUTES)
                .map_err(ValidationError::KeyboardAttributeNotString)?
        }
    };

    let rows = keyboard
        .get(ROW_TAG)
        .and_then(Value::as_array)
        .ok_or(ValidationError::MissingRows)?
        .iter()
        .enumerate()
        .map(|(index, row)| validate_row(index, row))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(XmlDocument {
        keyboard: XmlKeyboard { attributes, rows },
    })
}

/// Diagnostic for an invalid document, `None` when it is a valid layout
pub fn validation_error(document: &Value) -> Option<String> {
    validate(document).err().map(|e| e.to_string())
}

fn validate_row(index: usize, row: &Value) -> Result<XmlRow, ValidationError> {
    let row = row
        .as_object()
        .ok_or(ValidationError::RowNotObject(index))?;

    let attributes = match row.get(ATTRIBUTES_KEY) {
        None => Attributes::new(),
        Some(value) => {
            let object = value
                .as_object()
                .ok_or(ValidationError::RowAttributesNotObject(index))?;
            read_attributes(object, ROW_ATTRIBUTES)
                .map_err(|name| ValidationError::RowAttributeNotString { row: index, name })?
        }
    };

    let keys = row
        .get(KEY_TAG)
        .and_then(Value::as_array)
        .ok_or(ValidationError::MissingKeys(index))?
        .iter()
        .enumerate()
        .map(|(key, value)| validate_key(index, key, value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(XmlRow { attributes, keys })
}

fn validate_key(row: usize, key: usize, value: &Value) -> Result<XmlKey, ValidationError> {
    let object = value
        .as_object()
        .ok_or(ValidationError::KeyNotObject { row, key })?;
    let attributes = object
        .get(ATTRIBUTES_KEY)
        .and_then(Value::as_object)
        .ok_or(ValidationError::MissingKeyAttributes { row, key })?;
    let attributes = read_attributes(attributes, KEY_ATTRIBUTES)
        .map_err(|name| ValidationError::KeyAttributeNotString { row, key, name })?;

    Ok(XmlKey { attributes })
}

/// Copy the known attributes, failing on the first that is not a string
fn read_attributes(
    object: &Map<String, Value>,
    known: &[&'static str],
) -> Result<Attributes, &'static str> {
    let mut attributes = Attributes::new();
    for name in known {
        match object.get(*name) {
            None => {}
            Some(Value::String(value)) => attributes.set(name, value.as_str()),
            Some(_) => return Err(*name),
        }
    }
    Ok(attributes)
}
