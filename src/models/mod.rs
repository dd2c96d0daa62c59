//! Models module for the layout editor
//!
//! This module contains the keyboard/row/key value tree, the width helper
//! and the special-token display catalog.

pub mod core;
pub mod geometry;
pub mod legends;

// Re-export commonly used types
pub use self::core::*;
pub use self::geometry::{effective_width, row_extent};
pub use self::legends::{display_legend, special_tokens, LegendContent, LegendDisplay};
