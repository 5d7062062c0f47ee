//! Design token tables
//!
//! Tokens are the atomic values of the design system, grouped by category.
//! Each token is backed by a [`Variable`]; an alias map keyed by value links
//! tokens that share a value, which is what keeps theme entries referring to
//! a token live (`var(--token)`) instead of frozen literals.

use indexmap::IndexMap;
use lattice_core::StyleValue;
use rustc_hash::FxHashMap;

use crate::variable::Variable;

/// Token categories, matching the table names in a theme definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Space,
    Size,
    Color,
    Radius,
    ZIndex,
    Font,
}

impl TokenCategory {
    /// Stable category id for definitions and variable key prefixes.
    pub fn id(self) -> &'static str {
        match self {
            Self::Space => "space",
            Self::Size => "size",
            Self::Color => "color",
            Self::Radius => "radius",
            Self::ZIndex => "zIndex",
            Self::Font => "font",
        }
    }

    /// Parse a category id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    pub const ALL: [TokenCategory; 6] = [
        TokenCategory::Space,
        TokenCategory::Size,
        TokenCategory::Color,
        TokenCategory::Radius,
        TokenCategory::ZIndex,
        TokenCategory::Font,
    ];
}

/// The full token set, constructed once at configuration time and immutable
/// thereafter.
#[derive(Clone, Debug, Default)]
pub struct Tokens {
    pub space: IndexMap<String, Variable>,
    pub size: IndexMap<String, Variable>,
    pub color: IndexMap<String, Variable>,
    pub radius: IndexMap<String, Variable>,
    pub z_index: IndexMap<String, Variable>,
    pub font: IndexMap<String, Variable>,

    /// Value -> first variable registered with that value. First registration
    /// wins so aliases always point at the canonical token.
    value_to_variable: FxHashMap<String, Variable>,
}

impl Tokens {
    /// The table for one category.
    pub fn category(&self, category: TokenCategory) -> &IndexMap<String, Variable> {
        match category {
            TokenCategory::Space => &self.space,
            TokenCategory::Size => &self.size,
            TokenCategory::Color => &self.color,
            TokenCategory::Radius => &self.radius,
            TokenCategory::ZIndex => &self.z_index,
            TokenCategory::Font => &self.font,
        }
    }

    fn category_mut(&mut self, category: TokenCategory) -> &mut IndexMap<String, Variable> {
        match category {
            TokenCategory::Space => &mut self.space,
            TokenCategory::Size => &mut self.size,
            TokenCategory::Color => &mut self.color,
            TokenCategory::Radius => &mut self.radius,
            TokenCategory::ZIndex => &mut self.z_index,
            TokenCategory::Font => &mut self.font,
        }
    }

    /// Register a token. The backing variable is keyed
    /// `<category>-<name>` so identifiers stay readable and unique across
    /// categories.
    pub fn insert(&mut self, category: TokenCategory, name: &str, value: StyleValue) -> &Variable {
        let variable = Variable::new(format!("{}-{}", category.id(), name), value);
        let alias_key = variable.val.alias_key();
        if !alias_key.is_empty() {
            self.value_to_variable
                .entry(alias_key)
                .or_insert_with(|| variable.clone());
        }
        let table = self.category_mut(category);
        table.insert(name.to_string(), variable);
        &table[name]
    }

    /// Look up a token by category and name.
    pub fn get(&self, category: TokenCategory, name: &str) -> Option<&Variable> {
        self.category(category).get(name)
    }

    /// Resolve a bare token reference name (without the `$` sigil).
    ///
    /// `color.primary` looks up the named category explicitly; `primary`
    /// falls back to `default_category`.
    pub fn resolve_ref(&self, name: &str, default_category: TokenCategory) -> Option<&Variable> {
        if let Some((cat, rest)) = name.split_once('.') {
            if let Some(cat) = TokenCategory::from_id(cat) {
                return self.get(cat, rest);
            }
        }
        self.get(default_category, name)
    }

    /// The canonical token variable sharing this value, if any.
    ///
    /// Theme entries built from a token share the token's value; substituting
    /// this variable's reference instead of the literal keeps inheritance
    /// live.
    pub fn lookup_alias(&self, value: &StyleValue) -> Option<&Variable> {
        let key = value.alias_key();
        if key.is_empty() {
            return None;
        }
        self.value_to_variable.get(&key)
    }

    /// The `:root` declaration block for every token variable, in
    /// registration order.
    pub fn root_css_rule(&self) -> String {
        let mut vars = String::new();
        for category in TokenCategory::ALL {
            for variable in self.category(category).values() {
                vars.push_str(&variable.css_name());
                vars.push(':');
                vars.push_str(&variable.val.css_text());
                vars.push(';');
            }
        }
        format!(":root {{{vars}}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_category_path_wins_over_default() {
        let mut tokens = Tokens::default();
        tokens.insert(TokenCategory::Space, "4", StyleValue::from(16));
        tokens.insert(TokenCategory::Size, "4", StyleValue::from(44));

        let by_path = tokens.resolve_ref("space.4", TokenCategory::Size).unwrap();
        assert_eq!(by_path.val, StyleValue::Number(16.0));

        let by_default = tokens.resolve_ref("4", TokenCategory::Size).unwrap();
        assert_eq!(by_default.val, StyleValue::Number(44.0));
    }

    #[test]
    fn alias_lookup_returns_first_registered() {
        let mut tokens = Tokens::default();
        tokens.insert(TokenCategory::Color, "base", StyleValue::from("#001122"));
        tokens.insert(TokenCategory::Color, "primary", StyleValue::from("#001122"));

        let alias = tokens
            .lookup_alias(&StyleValue::from("#001122"))
            .expect("value registered");
        assert_eq!(alias.key, "color-base");
    }

    #[test]
    fn root_rule_lists_tokens_in_order() {
        let mut tokens = Tokens::default();
        tokens.insert(TokenCategory::Space, "1", StyleValue::from(4));
        tokens.insert(TokenCategory::Space, "2", StyleValue::from(8));

        let rule = tokens.root_css_rule();
        assert!(rule.starts_with(":root {"));
        let one = rule.find("--space-1:4;").unwrap();
        let two = rule.find("--space-2:8;").unwrap();
        assert!(one < two);
    }
}
