//! Editor session: the current keyboard plus its undo history
//!
//! Every change goes through [`EditorState::commit`], which pushes the new
//! keyboard into history before making it current. The current keyboard
//! therefore always equals the snapshot under the history pointer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::converters::xml::{self, ImportError, XmlError};
use crate::models::{EditError, Key, Keyboard, KeyboardSettings, Row};
use crate::templates::{self, DEFAULT_TEMPLATE};
use crate::undo::HistoryQueue;

/// Default number of snapshots kept for undo
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Session settings supplied by the host page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Maximum number of snapshots kept for undo/redo
    pub history_capacity: usize,

    /// Template the session starts from
    pub initial_template: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            initial_template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Export(#[from] XmlError),
}

#[derive(Clone, Debug)]
pub struct EditorState {
    keyboard: Keyboard,
    history: HistoryQueue<Keyboard>,
}

impl EditorState {
    pub fn new(config: &EditorConfig) -> Self {
        let keyboard = templates::template(&config.initial_template).unwrap_or_else(|| {
            log::warn!(
                "unknown initial template '{}', starting blank",
                config.initial_template
            );
            Keyboard::new()
        });
        Self {
            history: HistoryQueue::new(keyboard.clone(), config.history_capacity),
            keyboard,
        }
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn history(&self) -> &HistoryQueue<Keyboard> {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        !self.history.at_oldest()
    }

    pub fn can_redo(&self) -> bool {
        !self.history.at_newest()
    }

    /// Record `keyboard` in history and make it current
    pub fn commit(&mut self, keyboard: Keyboard) -> &Keyboard {
        self.history.add(keyboard.clone());
        self.keyboard = keyboard;
        log::debug!(
            "committed edit ({} of {} snapshots)",
            self.history.pointer() + 1,
            self.history.len()
        );
        &self.keyboard
    }

    pub fn undo(&mut self) -> &Keyboard {
        self.keyboard = self.history.undo().clone();
        &self.keyboard
    }

    pub fn redo(&mut self) -> &Keyboard {
        self.keyboard = self.history.redo().clone();
        &self.keyboard
    }

    pub fn load_template(&mut self, name: &str) -> Result<&Keyboard, EditorError> {
        let keyboard = templates::template(name)
            .ok_or_else(|| EditorError::UnknownTemplate(name.to_string()))?;
        Ok(self.commit(keyboard))
    }

    /// Replace the keyboard with an imported layout
    ///
    /// On failure the current keyboard and history are left as they were.
    pub fn import_xml(&mut self, text: &str) -> Result<&Keyboard, EditorError> {
        let keyboard = xml::import_keyboard(text)?;
        Ok(self.commit(keyboard))
    }

    pub fn export_xml(&self) -> Result<String, EditorError> {
        Ok(xml::export_keyboard(&self.keyboard)?)
    }

    pub fn update_settings(&mut self, settings: KeyboardSettings) -> &Keyboard {
        let keyboard = self.keyboard.with_settings(settings);
        self.commit(keyboard)
    }

    pub fn add_row(&mut self) -> &Keyboard {
        let keyboard = self.keyboard.with_row_added();
        self.commit(keyboard)
    }

    pub fn update_row(&mut self, index: usize, row: Row) -> Result<&Keyboard, EditorError> {
        let keyboard = self.keyboard.with_row_updated(index, row)?;
        Ok(self.commit(keyboard))
    }

    pub fn delete_row(&mut self, index: usize) -> Result<&Keyboard, EditorError> {
        let keyboard = self.keyboard.with_row_removed(index)?;
        Ok(self.commit(keyboard))
    }

    pub fn add_key(&mut self, row: usize) -> Result<&Keyboard, EditorError> {
        let keyboard = self.keyboard.with_key_added(row)?;
        Ok(self.commit(keyboard))
    }

    pub fn update_key(&mut self, row: usize, index: usize, key: Key) -> Result<&Keyboard, EditorError> {
        let keyboard = self.keyboard.with_key_updated(row, index, key)?;
        Ok(self.commit(keyboard))
    }

    pub fn delete_key(&mut self, row: usize, index: usize) -> Result<&Keyboard, EditorError> {
        let keyboard = self.keyboard.with_key_removed(row, index)?;
        Ok(self.commit(keyboard))
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_editor() -> EditorState {
        EditorState::new(&EditorConfig {
            initial_template: "Blank".to_string(),
            ..EditorConfig::default()
        })
    }

    #[test]
    fn test_starts_from_default_template() {
        let editor = EditorState::default();
        assert_eq!(editor.keyboard().name, "QWERTY");
        assert!(!editor.can_undo());
        assert!(!editor.can_redo());
    }

    #[test]
    fn test_unknown_initial_template_is_blank() {
        let editor = EditorState::new(&EditorConfig {
            initial_template: "Nope".to_string(),
            ..EditorConfig::default()
        });
        assert_eq!(*editor.keyboard(), Keyboard::new());
    }

    #[test]
    fn test_config_defaults_from_partial_json() {
        let config: EditorConfig = serde_json::from_str(r#"{"historyCapacity": 5}"#).unwrap();
        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.initial_template, DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_current_tracks_history_pointer() {
        let mut editor = blank_editor();
        editor.add_row();
        editor.add_key(0).unwrap();
        assert_eq!(editor.history().current(), editor.keyboard());

        editor.undo();
        assert_eq!(editor.keyboard().rows[0].keys.len(), 0);
        assert_eq!(editor.history().current(), editor.keyboard());

        editor.redo();
        assert_eq!(editor.keyboard().rows[0].keys.len(), 1);
    }

    #[test]
    fn test_failed_edit_leaves_state() {
        let mut editor = blank_editor();
        let before = editor.history().len();
        assert!(matches!(
            editor.delete_row(0),
            Err(EditorError::Edit(EditError::RowOutOfRange(0)))
        ));
        assert_eq!(editor.history().len(), before);
    }

    #[test]
    fn test_unknown_template_rejected() {
        let mut editor = blank_editor();
        assert_eq!(
            editor.load_template("Colemak").unwrap_err().to_string(),
            "Unknown template: Colemak"
        );
    }
}
