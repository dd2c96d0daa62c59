//! Unexpected Keyboard Layout Editor WASM Module
//!
//! Core of a browser-based editor for Unexpected Keyboard layouts: the
//! keyboard/row/key model, the layout XML codec and validator, a bounded
//! undo history and the built-in templates, plus the JavaScript API over
//! them.

pub mod models;
pub mod converters;
pub mod undo;
pub mod templates;
pub mod editor;
pub mod api;

// Re-export commonly used types
pub use models::core::*;
pub use converters::xml::{decode, encode, validate, validation_error, ValidationError, XmlDocument};
pub use converters::{export_keyboard, import_keyboard, ImportError, XmlError};
pub use editor::{EditorConfig, EditorError, EditorState};
pub use undo::HistoryQueue;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            wasm_warn!("logger already initialized: {}", e);
        }
    }

    log::info!("Layout editor WASM module initialized");
}
