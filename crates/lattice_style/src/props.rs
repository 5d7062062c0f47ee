//! Prop merging with shorthand expansion
//!
//! Merge correctness depends on insertion order: later writes win on shared
//! keys while the earlier key position is kept, so variant application order
//! downstream stays deterministic.

use lattice_core::Props;
use rustc_hash::FxHashMap;

/// Shorthand prop names to their longhand equivalents (`bg` ->
/// `backgroundColor`). Expanding during merge keeps a shorthand from
/// silently coexisting with its longhand.
pub type Shorthands = FxHashMap<String, String>;

/// The longhand key for `key`, or `key` itself.
pub fn expand_key<'a>(key: &'a str, shorthands: &'a Shorthands) -> &'a str {
    shorthands.get(key).map(String::as_str).unwrap_or(key)
}

/// Merge two prop maps with `{..a, ..b}` semantics: `b` wins on shared keys,
/// insertion order follows first appearance.
pub fn merge_props(a: &Props, b: &Props, shorthands: &Shorthands) -> Props {
    let mut out = Props::new();
    for (key, value) in a.iter().chain(b.iter()) {
        out.insert(expand_key(key, shorthands).to_string(), value.clone());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_core::{style_map, StyleValue};

    fn shorthands() -> Shorthands {
        let mut map = Shorthands::default();
        map.insert("bg".into(), "backgroundColor".into());
        map
    }

    #[test]
    fn later_map_wins_on_shared_keys() {
        let a = style_map! {"color" => "red", "width" => 10};
        let b = style_map! {"color" => "blue"};
        let merged = merge_props(&a, &b, &Shorthands::default());

        assert_eq!(merged["color"], StyleValue::from("blue"));
        assert_eq!(merged["width"], StyleValue::Number(10.0));
        // Position of the overridden key is preserved.
        assert_eq!(merged.get_index(0).unwrap().0, "color");
    }

    #[test]
    fn shorthands_collapse_onto_longhands() {
        let a = style_map! {"backgroundColor" => "red"};
        let b = style_map! {"bg" => "blue"};
        let merged = merge_props(&a, &b, &shorthands());

        assert_eq!(merged.len(), 1);
        assert_eq!(merged["backgroundColor"], StyleValue::from("blue"));
    }
}
