//! Import/export and catalog operations for the WASM API
//!
//! - XML import: text → validated layout → current keyboard
//! - XML export: current keyboard → layout file text for the clipboard
//! - Templates and special-token display data for the UI

use wasm_bindgen::prelude::*;

use crate::api::helpers::{js_diagnostic, js_error, serialize, with_editor};
use crate::models::{display_legend, special_tokens};
use crate::templates::template_names;
use crate::{wasm_info, wasm_log};

// ============================================================================
// XML Import / Export
// ============================================================================

/// Replace the current keyboard with a layout file
///
/// # Returns
/// The imported keyboard. On failure the error string is the message to
/// show the user, and the current keyboard is unchanged.
#[wasm_bindgen(js_name = importXml)]
pub fn import_xml(xml: String) -> Result<JsValue, JsValue> {
    wasm_info!("importXml called");
    wasm_log!("  Input XML: {} bytes", xml.len());

    with_editor(|editor| {
        let keyboard = editor.import_xml(&xml).map_err(js_diagnostic)?;
        wasm_log!("  Imported '{}' with {} rows", keyboard.name, keyboard.rows.len());
        serialize(keyboard, "Keyboard serialization error")
    })
}

/// Serialize the current keyboard as Unexpected Keyboard layout XML
#[wasm_bindgen(js_name = exportXml)]
pub fn export_xml() -> Result<String, JsValue> {
    wasm_info!("exportXml called");
    let xml = with_editor(|editor| editor.export_xml().map_err(|e| js_error("XML export error", e)))?;
    wasm_info!("  XML generated: {} bytes", xml.len());
    Ok(xml)
}

// ============================================================================
// Templates
// ============================================================================

#[wasm_bindgen(js_name = listTemplates)]
pub fn list_templates() -> Result<JsValue, JsValue> {
    serialize(&template_names(), "Template list serialization error")
}

#[wasm_bindgen(js_name = loadTemplate)]
pub fn load_template(name: String) -> Result<JsValue, JsValue> {
    wasm_info!("loadTemplate: {}", name);
    with_editor(|editor| {
        let keyboard = editor.load_template(&name).map_err(js_diagnostic)?;
        serialize(keyboard, "Keyboard serialization error")
    })
}

// ============================================================================
// Legends
// ============================================================================

/// How a legend should be drawn: `{content: {type, value}, placeholder}`
#[wasm_bindgen(js_name = describeLegend)]
pub fn describe_legend(legend: String) -> Result<JsValue, JsValue> {
    serialize(&display_legend(&legend), "Legend serialization error")
}

/// Special token names for legend autocompletion
#[wasm_bindgen(js_name = listSpecialTokens)]
pub fn list_special_tokens() -> Result<JsValue, JsValue> {
    serialize(&special_tokens(), "Token list serialization error")
}
