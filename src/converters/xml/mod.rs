//! Unexpected Keyboard layout XML
//!
//! ```text
//! XML text ──parse_xml──▶ generic tree ──validate──▶ XmlDocument ──decode──▶ Keyboard
//! Keyboard ──encode──▶ XmlDocument ──write_xml──▶ XML text
//! ```
//!
//! `encode`, `decode` and `validate` are pure. Only the text layer touches
//! an XML library.

pub mod decode;
pub mod encode;
pub mod escape;
pub mod text;
pub mod tree;
pub mod validate;

pub use decode::decode;
pub use encode::encode;
pub use text::{parse_xml, write_xml};
pub use tree::{Attributes, XmlDocument, XmlKey, XmlKeyboard, XmlRow};
pub use validate::{validate, validation_error, ValidationError};

use crate::models::Keyboard;
use thiserror::Error;

/// Failures of the XML text layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmlError {
    #[error("Invalid XML: {0}")]
    Parse(String),

    #[error("XML write failed: {0}")]
    Write(String),
}

/// Why an import was rejected; the message is shown to the user as is
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("Error parsing XML: {0}")]
    Xml(#[from] XmlError),

    #[error("Error parsing XML: Not an Unexpected Keyboard XML file: {0}")]
    Invalid(#[from] ValidationError),
}

/// Parse, validate and decode a layout file
pub fn import_keyboard(text: &str) -> Result<Keyboard, ImportError> {
    let tree = parse_xml(text)?;
    let document = validate(&tree)?;
    let keyboard = decode(&document);
    log::debug!(
        "imported layout '{}' with {} rows",
        keyboard.name,
        keyboard.rows.len()
    );
    Ok(keyboard)
}

/// Encode a keyboard and serialize it as a layout file
pub fn export_keyboard(keyboard: &Keyboard) -> Result<String, XmlError> {
    write_xml(&encode(keyboard))
}
