//! Format converters
//!
//! Currently only the Unexpected Keyboard layout XML format.

pub mod xml;

pub use xml::{export_keyboard, import_keyboard, ImportError, XmlError};
