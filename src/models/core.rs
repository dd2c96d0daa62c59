//! Core data structures for the layout editor
//!
//! A [`Keyboard`] owns its [`Row`]s, which own their [`Key`]s. Nothing has
//! identity outside its position in the tree. Edits never mutate a keyboard
//! in place: every `with_*` method returns a fresh value, so snapshots held
//! by the undo history stay untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::row_extent;

/// Total width, in key units, that a single row may occupy.
pub const ROW_CAPACITY: f64 = 10.0;

/// Name given to keyboards that were not created from a template.
pub const DEFAULT_KEYBOARD_NAME: &str = "Custom Layout";

/// Number of legend slots on every key (tap plus eight swipe directions).
pub const LEGEND_COUNT: usize = 9;

/// One of the nine legend regions of a key
///
/// The discriminant is the slot index, which is also the digit in the
/// `keyN` XML attribute name.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Tap = 0,
    TopLeft = 1,
    TopRight = 2,
    BottomLeft = 3,
    BottomRight = 4,
    Left = 5,
    Right = 6,
    Top = 7,
    Bottom = 8,
}

impl Direction {
    /// All directions in slot order (`key0` first).
    pub const ALL: [Direction; LEGEND_COUNT] = [
        Direction::Tap,
        Direction::TopLeft,
        Direction::TopRight,
        Direction::BottomLeft,
        Direction::BottomRight,
        Direction::Left,
        Direction::Right,
        Direction::Top,
        Direction::Bottom,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Direction> {
        Self::ALL.get(index).copied()
    }

    /// XML attribute carrying this legend (`key0`..`key8`)
    pub fn attribute_name(self) -> &'static str {
        match self {
            Direction::Tap => "key0",
            Direction::TopLeft => "key1",
            Direction::TopRight => "key2",
            Direction::BottomLeft => "key3",
            Direction::BottomRight => "key4",
            Direction::Left => "key5",
            Direction::Right => "key6",
            Direction::Top => "key7",
            Direction::Bottom => "key8",
        }
    }

    /// Human readable name used by the key editing form
    pub fn label(self) -> &'static str {
        match self {
            Direction::Tap => "Center Key",
            Direction::TopLeft => "Top Left Key",
            Direction::TopRight => "Top Right Key",
            Direction::BottomLeft => "Bottom Left Key",
            Direction::BottomRight => "Bottom Right Key",
            Direction::Left => "Left Key",
            Direction::Right => "Right Key",
            Direction::Top => "Top Key",
            Direction::Bottom => "Bottom Key",
        }
    }
}

/// A single physical key
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Key {
    /// Width in key units. A row holds [`ROW_CAPACITY`] units.
    pub width: f64,

    /// Empty space left of the key, in key units
    pub shift: f64,

    /// Insert sequences, indexed by [`Direction`]
    pub legends: [String; LEGEND_COUNT],

    /// Whether the left/right legends can also be reached by sliding
    pub slider: bool,
}

impl Key {
    /// Create a default key: width 1, no shift, empty legends
    pub fn new() -> Self {
        Self {
            width: 1.0,
            shift: 0.0,
            legends: Default::default(),
            slider: false,
        }
    }

    pub fn legend(&self, direction: Direction) -> &str {
        &self.legends[direction.index()]
    }

    /// Return a copy of this key with one legend replaced
    pub fn with_legend(&self, direction: Direction, legend: impl Into<String>) -> Self {
        let mut key = self.clone();
        key.legends[direction.index()] = legend.into();
        key
    }
}

impl Default for Key {
    fn default() -> Self {
        Self::new()
    }
}

/// An ordered row of keys
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Row {
    /// Height in key units
    pub height: f64,

    /// Padding above the row, in key units
    pub shift: f64,

    /// Keys from left to right
    pub keys: Vec<Key>,
}

impl Row {
    pub fn new() -> Self {
        Self {
            height: 1.0,
            shift: 0.0,
            keys: Vec::new(),
        }
    }

    /// Whether a default key still fits within [`ROW_CAPACITY`]
    pub fn can_add_key(&self) -> bool {
        row_extent(self) + Key::new().width <= ROW_CAPACITY
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyboard-level fields editable from the settings form
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KeyboardSettings {
    pub name: String,
    pub script: String,
    pub bottom_row: bool,
    pub width: Option<f64>,
}

/// The root of a layout
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Keyboard {
    /// Display name of the layout
    pub name: String,

    /// Free-text writing script hint (e.g. "latin"), empty when unset
    pub script: String,

    /// Rows from top to bottom
    pub rows: Vec<Row>,

    /// Whether the app should append its default bottom row
    pub bottom_row: bool,

    /// Overrides the computed width used to size keys
    pub width: Option<f64>,
}

/// Errors from structural edits
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("Row {0} does not exist")]
    RowOutOfRange(usize),

    #[error("Key {key} does not exist in row {row}")]
    KeyOutOfRange { row: usize, key: usize },

    #[error("Row {0} has no room for another key")]
    RowFull(usize),
}

impl Keyboard {
    /// Create an empty keyboard with the default name and bottom row
    pub fn new() -> Self {
        Self {
            name: DEFAULT_KEYBOARD_NAME.to_string(),
            script: String::new(),
            rows: Vec::new(),
            bottom_row: true,
            width: None,
        }
    }

    pub fn settings(&self) -> KeyboardSettings {
        KeyboardSettings {
            name: self.name.clone(),
            script: self.script.clone(),
            bottom_row: self.bottom_row,
            width: self.width,
        }
    }

    pub fn with_settings(&self, settings: KeyboardSettings) -> Self {
        Self {
            name: settings.name,
            script: settings.script,
            bottom_row: settings.bottom_row,
            width: settings.width,
            rows: self.rows.clone(),
        }
    }

    /// Append a default row at the bottom
    pub fn with_row_added(&self) -> Self {
        let mut keyboard = self.clone();
        keyboard.rows.push(Row::new());
        keyboard
    }

    pub fn with_row_updated(&self, index: usize, row: Row) -> Result<Self, EditError> {
        self.check_row(index)?;
        let mut keyboard = self.clone();
        keyboard.rows[index] = row;
        Ok(keyboard)
    }

    pub fn with_row_removed(&self, index: usize) -> Result<Self, EditError> {
        self.check_row(index)?;
        let mut keyboard = self.clone();
        keyboard.rows.remove(index);
        Ok(keyboard)
    }

    /// Append a default key to the end of a row, if it fits
    pub fn with_key_added(&self, row: usize) -> Result<Self, EditError> {
        self.check_row(row)?;
        if !self.rows[row].can_add_key() {
            return Err(EditError::RowFull(row));
        }
        let mut keyboard = self.clone();
        keyboard.rows[row].keys.push(Key::new());
        Ok(keyboard)
    }

    pub fn with_key_updated(&self, row: usize, index: usize, key: Key) -> Result<Self, EditError> {
        self.check_key(row, index)?;
        let mut keyboard = self.clone();
        keyboard.rows[row].keys[index] = key;
        Ok(keyboard)
    }

    pub fn with_key_removed(&self, row: usize, index: usize) -> Result<Self, EditError> {
        self.check_key(row, index)?;
        let mut keyboard = self.clone();
        keyboard.rows[row].keys.remove(index);
        Ok(keyboard)
    }

    fn check_row(&self, index: usize) -> Result<(), EditError> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(EditError::RowOutOfRange(index))
        }
    }

    fn check_key(&self, row: usize, index: usize) -> Result<(), EditError> {
        self.check_row(row)?;
        if index < self.rows[row].keys.len() {
            Ok(())
        } else {
            Err(EditError::KeyOutOfRange { row, key: index })
        }
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyboard_with_row(keys: usize) -> Keyboard {
        let mut keyboard = Keyboard::new().with_row_added();
        keyboard.rows[0].keys = vec![Key::new(); keys];
        keyboard
    }

    #[test]
    fn test_default_key_has_all_legend_slots() {
        let key = Key::new();
        assert_eq!(key.legends.len(), LEGEND_COUNT);
        assert!(key.legends.iter().all(|l| l.is_empty()));
        assert_eq!(key.width, 1.0);
        assert_eq!(key.shift, 0.0);
        assert!(!key.slider);
    }

    #[test]
    fn test_default_keyboard() {
        let keyboard = Keyboard::default();
        assert_eq!(keyboard.name, "Custom Layout");
        assert!(keyboard.script.is_empty());
        assert!(keyboard.rows.is_empty());
        assert!(keyboard.bottom_row);
        assert_eq!(keyboard.width, None);
    }

    #[test]
    fn test_direction_attribute_names() {
        for (i, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.attribute_name(), format!("key{}", i));
            assert_eq!(Direction::from_index(i), Some(*direction));
        }
        assert_eq!(Direction::from_index(9), None);
    }

    #[test]
    fn test_with_legend_leaves_original_untouched() {
        let key = Key::new();
        let edited = key.with_legend(Direction::TopRight, "1");
        assert_eq!(edited.legend(Direction::TopRight), "1");
        assert_eq!(key.legend(Direction::TopRight), "");
    }

    #[test]
    fn test_edits_do_not_alias() {
        let original = keyboard_with_row(2);
        let edited = original
            .with_key_updated(0, 1, Key::new().with_legend(Direction::Tap, "x"))
            .unwrap();
        assert_eq!(original.rows[0].keys[1].legend(Direction::Tap), "");
        assert_eq!(edited.rows[0].keys[1].legend(Direction::Tap), "x");
    }

    #[test]
    fn test_row_and_key_removal() {
        let keyboard = keyboard_with_row(3).with_row_added();
        let keyboard = keyboard.with_key_removed(0, 0).unwrap();
        assert_eq!(keyboard.rows[0].keys.len(), 2);
        let keyboard = keyboard.with_row_removed(1).unwrap();
        assert_eq!(keyboard.rows.len(), 1);
    }

    #[test]
    fn test_out_of_range_edits() {
        let keyboard = keyboard_with_row(1);
        assert_eq!(keyboard.with_row_removed(3), Err(EditError::RowOutOfRange(3)));
        assert_eq!(
            keyboard.with_key_removed(0, 1),
            Err(EditError::KeyOutOfRange { row: 0, key: 1 })
        );
        assert_eq!(keyboard.with_key_added(1), Err(EditError::RowOutOfRange(1)));
    }

    #[test]
    fn test_row_capacity() {
        let keyboard = keyboard_with_row(9);
        assert!(keyboard.rows[0].can_add_key());
        let full = keyboard.with_key_added(0).unwrap();
        assert_eq!(full.rows[0].keys.len(), 10);
        assert_eq!(full.with_key_added(0), Err(EditError::RowFull(0)));
    }

    #[test]
    fn test_shift_counts_against_capacity() {
        let mut keyboard = keyboard_with_row(9);
        keyboard.rows[0].keys[0].shift = 0.5;
        assert!(!keyboard.rows[0].can_add_key());
    }

    #[test]
    fn test_settings_round_trip() {
        let keyboard = keyboard_with_row(1);
        let mut settings = keyboard.settings();
        settings.name = "Mine".to_string();
        settings.bottom_row = false;
        settings.width = Some(11.0);
        let edited = keyboard.with_settings(settings.clone());
        assert_eq!(edited.settings(), settings);
        assert_eq!(edited.rows, keyboard.rows);
    }
}
