//! Style values and ordered prop/style maps

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered style-key to value map.
///
/// Iteration follows insertion order. Re-inserting an existing key replaces
/// its value but keeps its original position, which is exactly the semantics
/// the merge pipeline relies on: later writes win on conflicting keys while
/// declaration order stays stable.
pub type StyleMap = IndexMap<String, StyleValue>;

/// A merged component prop map. Same shape and ordering rules as [`StyleMap`].
pub type Props = StyleMap;

/// A single prop or style value.
///
/// Covers every shape the splitter accepts:
/// - scalars (`Bool`, `Number`, `Str`) including token references such as
///   `"$color.primary"`
/// - `List` for array-form responsive values (one entry per breakpoint)
/// - `Map` for pseudo-style blocks (`pressStyle`) and named-breakpoint
///   objects (`{sm: 10, lg: 20}`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Bool(bool),
    Number(f32),
    Str(String),
    List(Vec<StyleValue>),
    Map(StyleMap),
}

impl StyleValue {
    /// Whether this value is a token reference (`$`-prefixed string).
    pub fn is_token_ref(&self) -> bool {
        matches!(self, StyleValue::Str(s) if s.starts_with('$'))
    }

    /// Borrow the string contents, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric contents, if any.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean contents, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StyleValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow the map contents, if any.
    pub fn as_map(&self) -> Option<&StyleMap> {
        match self {
            StyleValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Render the value the way it appears in CSS text.
    ///
    /// Numbers print without a trailing `.0` so `10.0` becomes `10`, matching
    /// how the values were written in the source prop. Non-scalar values are
    /// not meaningful as CSS and render empty.
    pub fn css_text(&self) -> String {
        match self {
            StyleValue::Bool(b) => b.to_string(),
            StyleValue::Number(n) => format_number(*n),
            StyleValue::Str(s) => s.clone(),
            StyleValue::List(_) | StyleValue::Map(_) => String::new(),
        }
    }

    /// A stable key identifying this value for alias lookups.
    ///
    /// Two values compare equal here exactly when they would be the same CSS
    /// output, which is the identity the token alias map is keyed by.
    pub fn alias_key(&self) -> String {
        match self {
            StyleValue::Bool(b) => format!("b:{b}"),
            StyleValue::Number(n) => format!("n:{}", format_number(*n)),
            StyleValue::Str(s) => format!("s:{s}"),
            StyleValue::List(_) | StyleValue::Map(_) => String::new(),
        }
    }
}

impl From<bool> for StyleValue {
    fn from(v: bool) -> Self {
        StyleValue::Bool(v)
    }
}

impl From<f32> for StyleValue {
    fn from(v: f32) -> Self {
        StyleValue::Number(v)
    }
}

impl From<i32> for StyleValue {
    fn from(v: i32) -> Self {
        StyleValue::Number(v as f32)
    }
}

impl From<&str> for StyleValue {
    fn from(v: &str) -> Self {
        StyleValue::Str(v.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(v: String) -> Self {
        StyleValue::Str(v)
    }
}

fn format_number(n: f32) -> String {
    if n.fract() == 0.0 && n.abs() < 1e7 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Build a [`StyleMap`] from key/value pairs, preserving the given order.
#[macro_export]
macro_rules! style_map {
    () => { $crate::StyleMap::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::StyleMap::new();
        $(map.insert(String::from($key), $crate::StyleValue::from($value));)+
        map
    }};
}
