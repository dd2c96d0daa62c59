//! Display catalog for Unexpected Keyboard special tokens
//!
//! Token names follow the app's `KeyValue` names. This is presentation data
//! only: an unknown legend is shown as its own text, never rejected.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Prefix marking a legend that only appears when the locale provides it
pub const LOCALE_PREFIX: &str = "loc ";

const ICON_TOKENS: &[(&str, &str)] = &[
    ("shift", "shift-fill"),
    ("capslock", "capslock-fill"),
    ("enter", "arrow-return-left"),
    ("up", "arrow-up"),
    ("down", "arrow-down"),
    ("left", "arrow-left"),
    ("right", "arrow-right"),
    ("page_up", "arrow-up-circle-fill"),
    ("page_down", "arrow-down-circle-fill"),
    ("home", "arrow-left-circle-fill"),
    ("end", "arrow-right-circle-fill"),
    ("backspace", "backspace-fill"),
    ("delete", "backspace-reverse-fill"),
    ("tab", "indent"),
    ("copy", "files"),
    ("cut", "scissors"),
    ("paste", "clipboard-data"),
    ("selectAll", "check2-circle"),
    ("undo", "arrow-counterclockwise"),
    ("redo", "arrow-clockwise"),
];

const TEXT_TOKENS: &[(&str, &str)] = &[
    ("accent_aigu", "\u{25cc}\u{301}"),
    ("accent_grave", "\u{25cc}\u{300}"),
    ("accent_double_aigu", "\u{25cc}\u{30b}"),
    ("accent_dot_above", "\u{25cc}\u{307}"),
    ("accent_circonflexe", "\u{25cc}\u{302}"),
    ("accent_tilde", "\u{25cc}\u{303}"),
    ("accent_cedille", "\u{25cc}\u{327}"),
    ("accent_trema", "\u{25cc}\u{308}"),
    ("accent_ring", "\u{25cc}\u{30a}"),
    ("accent_caron", "\u{25cc}\u{30c}"),
    ("accent_macron", "\u{25cc}\u{304}"),
    ("accent_ogonek", "\u{25cc}\u{328}"),
    ("accent_breve", "\u{25cc}\u{306}"),
    ("accent_slash", "\u{25cc}\u{337}"),
    ("accent_bar", "\u{25cc}\u{304}"),
    ("accent_dot_below", "\u{25cc}\u{323}"),
    ("accent_hook_above", "\u{25cc}\u{309}"),
    ("accent_horn", "\u{25cc}\u{31b}"),
    ("switch_greekmath", "\u{3c0}\u{3bb}\u{2207}\u{ac}"),
    ("f11_placeholder", "F11"),
    ("f12_placeholder", "F12"),
];

const PLACEHOLDER_TOKENS: &[&str] = &["f11_placeholder", "f12_placeholder"];

static ICONS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ICON_TOKENS.iter().copied().collect());

static TEXTS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| TEXT_TOKENS.iter().copied().collect());

/// What to draw for a legend
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum LegendContent {
    /// Literal text
    Text(String),
    /// Name of an icon in the UI's icon font
    Icon(String),
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct LegendDisplay {
    pub content: LegendContent,
    /// Rendered dimmed: locale-dependent keys and F11/F12 placeholders
    pub placeholder: bool,
}

/// Resolve a legend to what the key face should show
pub fn display_legend(legend: &str) -> LegendDisplay {
    let (token, locale) = match legend.strip_prefix(LOCALE_PREFIX) {
        Some(rest) => (rest, true),
        None => (legend, false),
    };

    let content = if let Some(text) = TEXTS.get(token) {
        LegendContent::Text((*text).to_string())
    } else if let Some(icon) = ICONS.get(token) {
        LegendContent::Icon((*icon).to_string())
    } else {
        LegendContent::Text(token.to_string())
    };

    LegendDisplay {
        content,
        placeholder: locale || PLACEHOLDER_TOKENS.iter().any(|t| *t == token),
    }
}

/// Every token with a dedicated rendering, for autocompletion
pub fn special_tokens() -> Vec<&'static str> {
    ICON_TOKENS
        .iter()
        .chain(TEXT_TOKENS.iter())
        .map(|(name, _)| *name)
        .collect()
}
