//! Editing operations for the WASM API
//!
//! Every mutating call returns the new current keyboard so the UI can
//! re-render from a single value.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, install_editor, js_diagnostic, serialize, with_editor};
use crate::editor::EditorConfig;
use crate::models::{effective_width, Key, KeyboardSettings, Row};
use crate::{wasm_info, wasm_log};

/// Start a new session
///
/// # Parameters
/// - `config_js`: `{historyCapacity?, initialTemplate?}`, or undefined for defaults
#[wasm_bindgen(js_name = initEditor)]
pub fn init_editor(config_js: JsValue) -> Result<JsValue, JsValue> {
    let config: EditorConfig = if config_js.is_undefined() || config_js.is_null() {
        EditorConfig::default()
    } else {
        deserialize(config_js, "Invalid editor config")?
    };
    wasm_info!(
        "initEditor: template={}, history={}",
        config.initial_template,
        config.history_capacity
    );
    install_editor(&config)?;
    get_keyboard()
}

#[wasm_bindgen(js_name = getKeyboard)]
pub fn get_keyboard() -> Result<JsValue, JsValue> {
    with_editor(|editor| serialize(editor.keyboard(), "Keyboard serialization error"))
}

/// Width used to size keys: explicit override or widest row
#[wasm_bindgen(js_name = getEffectiveWidth)]
pub fn get_effective_width() -> Result<f64, JsValue> {
    with_editor(|editor| Ok(effective_width(editor.keyboard())))
}

#[wasm_bindgen(js_name = canUndo)]
pub fn can_undo() -> Result<bool, JsValue> {
    with_editor(|editor| Ok(editor.can_undo()))
}

#[wasm_bindgen(js_name = canRedo)]
pub fn can_redo() -> Result<bool, JsValue> {
    with_editor(|editor| Ok(editor.can_redo()))
}

#[wasm_bindgen]
pub fn undo() -> Result<JsValue, JsValue> {
    with_editor(|editor| serialize(editor.undo(), "Keyboard serialization error"))
}

#[wasm_bindgen]
pub fn redo() -> Result<JsValue, JsValue> {
    with_editor(|editor| serialize(editor.redo(), "Keyboard serialization error"))
}

#[wasm_bindgen(js_name = updateKeyboardSettings)]
pub fn update_keyboard_settings(settings_js: JsValue) -> Result<JsValue, JsValue> {
    let settings: KeyboardSettings = deserialize(settings_js, "Invalid keyboard settings")?;
    with_editor(|editor| {
        serialize(editor.update_settings(settings), "Keyboard serialization error")
    })
}

#[wasm_bindgen(js_name = addRow)]
pub fn add_row() -> Result<JsValue, JsValue> {
    with_editor(|editor| serialize(editor.add_row(), "Keyboard serialization error"))
}

#[wasm_bindgen(js_name = updateRow)]
pub fn update_row(index: usize, row_js: JsValue) -> Result<JsValue, JsValue> {
    let row: Row = deserialize(row_js, "Invalid row")?;
    with_editor(|editor| {
        let keyboard = editor.update_row(index, row).map_err(js_diagnostic)?;
        serialize(keyboard, "Keyboard serialization error")
    })
}

#[wasm_bindgen(js_name = deleteRow)]
pub fn delete_row(index: usize) -> Result<JsValue, JsValue> {
    wasm_log!("deleteRow: {}", index);
    with_editor(|editor| {
        let keyboard = editor.delete_row(index).map_err(js_diagnostic)?;
        serialize(keyboard, "Keyboard serialization error")
    })
}

/// Append a default key to a row; fails when the row is full
#[wasm_bindgen(js_name = addKey)]
pub fn add_key(row: usize) -> Result<JsValue, JsValue> {
    with_editor(|editor| {
        let keyboard = editor.add_key(row).map_err(js_diagnostic)?;
        serialize(keyboard, "Keyboard serialization error")
    })
}

#[wasm_bindgen(js_name = updateKey)]
pub fn update_key(row: usize, index: usize, key_js: JsValue) -> Result<JsValue, JsValue> {
    let key: Key = deserialize(key_js, "Invalid key")?;
    with_editor(|editor| {
        let keyboard = editor.update_key(row, index, key).map_err(js_diagnostic)?;
        serialize(keyboard, "Keyboard serialization error")
    })
}

#[wasm_bindgen(js_name = deleteKey)]
pub fn delete_key(row: usize, index: usize) -> Result<JsValue, JsValue> {
    wasm_log!("deleteKey: row={}, key={}", row, index);
    with_editor(|editor| {
        let keyboard = editor.delete_key(row, index).map_err(js_diagnostic)?;
        serialize(keyboard, "Keyboard serialization error")
    })
}
