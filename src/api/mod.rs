//! Layout editor WASM API
//!
//! JavaScript-facing functions over one global editor session.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, session access, serialization and error conversion
//! - `editor`: session setup, undo/redo and structural edits
//! - `export`: XML import/export, templates and legend display data

pub mod helpers;
pub mod editor;
pub mod export;

pub use self::editor::*;
pub use self::export::*;
