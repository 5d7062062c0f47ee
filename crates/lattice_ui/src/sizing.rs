//! Token-driven sizing math shared by the primitives

use lattice_core::{style_map, StyleMap, StyleValue};
use lattice_theme::{resolve_literal, TokenCategory, Tokens};

/// Resolve a size token (or literal number) to its numeric value.
pub fn size_value(value: &StyleValue, tokens: &Tokens) -> f32 {
    resolve_literal(value, TokenCategory::Size, None, tokens)
        .as_number()
        .unwrap_or(0.0)
}

/// Resolve a space token (or literal number) to its numeric value.
pub fn space_value(value: &StyleValue, tokens: &Tokens) -> f32 {
    resolve_literal(value, TokenCategory::Space, None, tokens)
        .as_number()
        .unwrap_or(0.0)
}

/// Track height for a switch of the given size token.
pub fn switch_height(value: &StyleValue, tokens: &Tokens) -> f32 {
    (size_value(value, tokens) * 0.65).round()
}

/// Track width: twice the height.
pub fn switch_width(value: &StyleValue, tokens: &Tokens) -> f32 {
    switch_height(value, tokens) * 2.0
}

/// Button-family sizing: height from the size table, horizontal padding from
/// the space table, radius proportional to height.
pub fn button_sized(value: &StyleValue, tokens: &Tokens) -> StyleMap {
    let height = size_value(value, tokens);
    let padding = space_value(value, tokens);
    style_map! {
        "height" => height,
        "paddingLeft" => padding,
        "paddingRight" => padding,
        "borderRadius" => (height * 0.25).round(),
    }
}
