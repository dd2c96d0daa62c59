// XML text import/export and the editor session around it

use uk_layout_editor_wasm::converters::{export_keyboard, import_keyboard, ImportError};
use uk_layout_editor_wasm::models::{effective_width, Direction, Key, Keyboard, Row};
use uk_layout_editor_wasm::templates::template;
use uk_layout_editor_wasm::{EditorConfig, EditorState};

const HAND_WRITTEN: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!-- A layout as found in the Unexpected Keyboard repository -->
<keyboard name="Test layout" script="latin" bottomRow="false">
  <row>
    <key key0="q" key2="1" key4="esc"/>
    <key key0="w" key1="~" key2="2" key3="\@"/>
    <key width="1.5" key0="shift" key2="loc capslock"/>
  </row>
  <row height="0.95" shift="0.5">
    <key shift="0.5" key0="a" key3="\?"/>
    <key key0="space" key5="cursor_left" key6="cursor_right" slider="true"/>
    <key key0="&lt;" key1="&amp;"/>
  </row>
</keyboard>
"#;

#[test]
fn test_import_hand_written_layout() {
    let keyboard = import_keyboard(HAND_WRITTEN).expect("layout should import");
    assert_eq!(keyboard.name, "Test layout");
    assert_eq!(keyboard.script, "latin");
    assert!(!keyboard.bottom_row);
    assert_eq!(keyboard.width, None);
    assert_eq!(keyboard.rows.len(), 2);

    let first = &keyboard.rows[0];
    assert_eq!(first.keys[1].legend(Direction::BottomLeft), "@");
    assert_eq!(first.keys[2].width, 1.5);
    assert_eq!(effective_width(&keyboard), 3.5);

    let second = &keyboard.rows[1];
    assert_eq!(second.height, 0.95);
    assert_eq!(second.shift, 0.5);
    assert_eq!(second.keys[0].legend(Direction::BottomLeft), "?");
    assert!(second.keys[1].slider);
    assert_eq!(second.keys[1].legend(Direction::Right), "cursor_right");
    assert_eq!(second.keys[2].legend(Direction::Tap), "<");
    assert_eq!(second.keys[2].legend(Direction::TopLeft), "&");
}

#[test]
fn test_text_round_trip() {
    let qwerty = template("QWERTY").unwrap();
    let xml = export_keyboard(&qwerty).unwrap();
    assert!(xml.contains(r#"<keyboard name="QWERTY">"#));
    assert!(xml.contains(r#"key3="\@""#));
    assert_eq!(import_keyboard(&xml).unwrap(), qwerty);

    let imported = import_keyboard(HAND_WRITTEN).unwrap();
    let xml = export_keyboard(&imported).unwrap();
    assert!(xml.contains(r#"bottom_row="false""#));
    assert!(!xml.contains("bottomRow"));
    assert_eq!(import_keyboard(&xml).unwrap(), imported);
}

#[test]
fn test_export_width_override() {
    let mut row = Row::new();
    row.keys = vec![Key::new().with_legend(Direction::Tap, "x")];
    let keyboard = Keyboard {
        rows: vec![row],
        width: Some(10.5),
        ..Keyboard::new()
    };
    let xml = export_keyboard(&keyboard).unwrap();
    assert!(xml.contains(r#"width="10.5""#));
    assert_eq!(import_keyboard(&xml).unwrap().width, Some(10.5));
}

#[test]
fn test_malformed_xml_diagnostic() {
    let err = import_keyboard("<keyboard><row></keyboard>").unwrap_err();
    assert!(matches!(err, ImportError::Xml(_)));
    assert!(err.to_string().starts_with("Error parsing XML"));
}

#[test]
fn test_wrong_document_diagnostic() {
    let err = import_keyboard("<layout><row/></layout>").unwrap_err();
    assert!(matches!(err, ImportError::Invalid(_)));
    assert_eq!(
        err.to_string(),
        "Error parsing XML: Not an Unexpected Keyboard XML file: Document is missing a keyboard element"
    );
}

#[test]
fn test_keyboard_without_rows_does_not_reimport() {
    let xml = export_keyboard(&Keyboard::new()).unwrap();
    assert!(xml.contains(r#"<keyboard name="Custom Layout"/>"#));

    let err = import_keyboard(&xml).unwrap_err();
    assert!(matches!(err, ImportError::Invalid(_)));
    assert!(err.to_string().ends_with("Keyboard is missing rows"));
}

#[test]
fn test_empty_element_key_is_rejected() {
    let err = import_keyboard("<keyboard><row><key/></row></keyboard>").unwrap_err();
    assert!(err.to_string().ends_with("Key 1 in row 1 is missing attributes"));
}

#[test]
fn test_failed_import_keeps_editor_state() {
    let mut editor = EditorState::new(&EditorConfig::default());
    editor.add_row();
    let before = editor.keyboard().clone();
    let history_len = editor.history().len();

    assert!(editor.import_xml("not xml at all").is_err());
    assert_eq!(*editor.keyboard(), before);
    assert_eq!(editor.history().len(), history_len);

    let imported = editor.import_xml(HAND_WRITTEN).unwrap().clone();
    assert_eq!(imported.name, "Test layout");
    assert_eq!(*editor.undo(), before);
    assert_eq!(*editor.redo(), imported);
}
