//! XML text ↔ attribute tree
//!
//! Reading produces the generic object tree the validator expects: each
//! element becomes an object with its attributes under `$`, one array per
//! child tag name and any non-blank text under `_`. Writing emits the typed
//! tree with two-space indentation.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use roxmltree::Node;
use serde_json::{Map, Value};
use std::io::Cursor;

use super::tree::*;
use super::XmlError;

/// Parse XML text into the generic object tree
pub fn parse_xml(text: &str) -> Result<Value, XmlError> {
    let document =
        roxmltree::Document::parse(text).map_err(|e| XmlError::Parse(e.to_string()))?;
    let root = document.root_element();

    let mut top = Map::new();
    top.insert(root.tag_name().name().to_string(), element_to_value(root));
    Ok(Value::Object(top))
}

fn element_to_value(node: Node) -> Value {
    let mut object = Map::new();

    let attributes: Map<String, Value> = node
        .attributes()
        .map(|attr| (attr.name().to_string(), Value::String(attr.value().to_string())))
        .collect();
    if !attributes.is_empty() {
        object.insert(ATTRIBUTES_KEY.to_string(), Value::Object(attributes));
    }

    let mut text = String::new();
    for child in node.children() {
        if child.is_element() {
            let slot = object
                .entry(child.tag_name().name().to_string())
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(items) = slot {
                items.push(element_to_value(child));
            }
        } else if child.is_text() {
            text.push_str(child.text().unwrap_or_default());
        }
    }

    let text = text.trim();
    if !text.is_empty() {
        object.insert(TEXT_KEY.to_string(), Value::String(text.to_string()));
    }

    Value::Object(object)
}

type XmlWriter = Writer<Cursor<Vec<u8>>>;

fn write_event(writer: &mut XmlWriter, event: Event) -> Result<(), XmlError> {
    writer
        .write_event(event)
        .map_err(|e| XmlError::Write(e.to_string()))
}

fn start_tag<'a>(name: &'a str, attributes: &'a Attributes) -> BytesStart<'a> {
    let mut element = BytesStart::new(name);
    for attribute in attributes.iter() {
        element.push_attribute(attribute);
    }
    element
}

/// Serialize the typed tree to XML text
pub fn write_xml(document: &XmlDocument) -> Result<String, XmlError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    write_event(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))),
    )?;

    let keyboard = &document.keyboard;
    let keyboard_tag = start_tag(KEYBOARD_TAG, &keyboard.attributes);
    if keyboard.rows.is_empty() {
        write_event(&mut writer, Event::Empty(keyboard_tag))?;
    } else {
        write_event(&mut writer, Event::Start(keyboard_tag))?;
        for row in &keyboard.rows {
            write_row(&mut writer, row)?;
        }
        write_event(&mut writer, Event::End(BytesEnd::new(KEYBOARD_TAG)))?;
    }

    String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| XmlError::Write(e.to_string()))
}

fn write_row(writer: &mut XmlWriter, row: &XmlRow) -> Result<(), XmlError> {
    let row_tag = start_tag(ROW_TAG, &row.attributes);
    if row.keys.is_empty() {
        return write_event(writer, Event::Empty(row_tag));
    }

    write_event(writer, Event::Start(row_tag))?;
    for key in &row.keys {
        write_event(writer, Event::Empty(start_tag(KEY_TAG, &key.attributes)))?;
    }
    write_event(writer, Event::End(BytesEnd::new(ROW_TAG)))
}
