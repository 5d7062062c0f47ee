//! Declarative theme and token definitions
//!
//! Tokens and themes load from TOML tables at configuration time:
//!
//! ```toml
//! [tokens.space]
//! 1 = 4
//! 2 = 8
//!
//! [tokens.color]
//! white = "#ffffff"
//!
//! [themes.light]
//! background = "$color.white"
//! color = "#111111"
//!
//! [themes.light_Button]
//! background = "#eeeeee"
//! ```
//!
//! Sub-themes compose at build time: `light_Button` starts from the longest
//! defined base prefix (`light`) and overrides a subset of its keys.

use indexmap::IndexMap;
use lattice_core::StyleValue;
use serde::Deserialize;
use thiserror::Error;

use crate::theme::{Theme, Themes};
use crate::tokens::{TokenCategory, Tokens};
use crate::variable::Variable;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to parse theme definition: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown token category `{0}`")]
    UnknownCategory(String),
}

/// A parsed theme/token definition, not yet validated against the known
/// token categories.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ThemeDefinition {
    #[serde(default)]
    tokens: IndexMap<String, IndexMap<String, StyleValue>>,
    #[serde(default)]
    themes: IndexMap<String, IndexMap<String, StyleValue>>,
}

impl ThemeDefinition {
    pub fn from_toml_str(input: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(input)?)
    }

    /// Validate and build the immutable token set and theme map.
    ///
    /// Token values may reference earlier tokens (`primary = "$color.base"`);
    /// the reference collapses to the target's value so both tokens share it
    /// and the alias map links them. Unrecognized references are kept as
    /// literals - a `$`-prefixed string that matches nothing is data, not an
    /// error.
    pub fn build(&self) -> Result<(Tokens, Themes), ThemeError> {
        let mut tokens = Tokens::default();
        for (category_name, table) in &self.tokens {
            let category = TokenCategory::from_id(category_name)
                .ok_or_else(|| ThemeError::UnknownCategory(category_name.clone()))?;
            for (key, value) in table {
                let value = dealias(value, category, &tokens);
                tokens.insert(category, key, value);
            }
        }

        let mut themes = Themes::default();
        for (name, table) in &self.themes {
            let mut theme = Theme::new(name.clone());

            // Sub-theme inheritance: longest defined base prefix first.
            if let Some(base) = base_theme_name(name, &themes) {
                let base = themes.get(&base).expect("base name came from the map");
                for (key, variable) in base.iter() {
                    theme.insert(key.clone(), variable.clone());
                }
            }

            for (key, value) in table {
                let value = dealias(value, TokenCategory::Color, &tokens);
                theme.insert(key.clone(), Variable::new(key.clone(), value));
            }
            themes.insert(theme);
        }

        tracing::debug!(themes = themes.len(), "theme definition built");
        Ok((tokens, themes))
    }
}

/// Collapse a token reference to the referenced token's value, leaving
/// anything else untouched.
fn dealias(value: &StyleValue, category: TokenCategory, tokens: &Tokens) -> StyleValue {
    if let Some(name) = value.as_str().and_then(|s| s.strip_prefix('$')) {
        if let Some(variable) = tokens.resolve_ref(name, category) {
            return variable.val.clone();
        }
    }
    value.clone()
}

/// The longest already-defined prefix of `name` split on `_`, if any:
/// `dark_blue_Button` prefers `dark_blue` over `dark`.
fn base_theme_name(name: &str, themes: &Themes) -> Option<String> {
    let mut candidate = name;
    while let Some((prefix, _)) = candidate.rsplit_once('_') {
        if themes.contains(prefix) {
            return Some(prefix.to_string());
        }
        candidate = prefix;
    }
    None
}
