//! Themes and sub-themes

use indexmap::IndexMap;

use crate::variable::Variable;

/// Class-name prefix for theme selectors. Part of the generated-CSS wire
/// contract; changing it invalidates every shipped stylesheet.
pub const THEME_CLASSNAME_PREFIX: &str = "t_";

/// An ordered token-key to variable map, scoped by theme name.
///
/// Sub-themes compose by name: `dark_Button` layers over `dark`, overriding a
/// subset of its keys. Composition happens at build time
/// ([`crate::ThemeDefinition::build`]); a built `Theme` is always fully
/// materialized.
#[derive(Clone, Debug, Default)]
pub struct Theme {
    name: String,
    map: IndexMap<String, Variable>,
}

impl Theme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            map: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert or override a theme entry. Later writes win, earlier insertion
    /// order is kept.
    pub fn insert(&mut self, key: impl Into<String>, variable: Variable) {
        self.map.insert(key.into(), variable);
    }

    pub fn get(&self, key: &str) -> Option<&Variable> {
        self.map.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Variable)> {
        self.map.iter()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// The full named theme set.
#[derive(Clone, Debug, Default)]
pub struct Themes {
    map: IndexMap<String, Theme>,
}

impl Themes {
    pub fn insert(&mut self, theme: Theme) {
        self.map.insert(theme.name().to_string(), theme);
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.map.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.map.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Theme)> {
        self.map.iter()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether both base color schemes exist. The selector-ladder logic is
    /// only needed to disambiguate light/dark layering; without both, rule
    /// generation emits flat selectors.
    pub fn has_dark_light(&self) -> bool {
        self.contains("light") && self.contains("dark")
    }

    /// Component-scoped sub-theme lookup: `(dark, Button)` resolves
    /// `dark_Button` if defined, falling back to the base theme.
    pub fn component_theme(&self, base: &str, component: &str) -> Option<&Theme> {
        self.get(&format!("{base}_{component}"))
            .or_else(|| self.get(base))
    }
}

/// Theme-system configuration.
#[derive(Clone, Debug)]
pub struct ThemeConfig {
    /// How deeply alternating light/dark providers may nest before the
    /// generated selector ladder stops disambiguating them.
    pub max_dark_light_nesting: usize,
    /// Emit `@media(prefers-color-scheme)` fallbacks so SSR/no-JS clients get
    /// the right scheme before hydration.
    pub should_add_prefers_color_themes: bool,
    /// Whether base theme class names are attached to `:root` itself rather
    /// than a descendant.
    pub theme_class_name_on_root: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            max_dark_light_nesting: 3,
            should_add_prefers_color_themes: true,
            theme_class_name_on_root: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_theme_prefers_scoped_over_base() {
        let mut themes = Themes::default();
        themes.insert(Theme::new("dark"));
        themes.insert(Theme::new("dark_Button"));

        let scoped = themes.component_theme("dark", "Button").unwrap();
        assert_eq!(scoped.name(), "dark_Button");

        let fallback = themes.component_theme("dark", "Tabs").unwrap();
        assert_eq!(fallback.name(), "dark");
    }

    #[test]
    fn has_dark_light_requires_both() {
        let mut themes = Themes::default();
        themes.insert(Theme::new("light"));
        assert!(!themes.has_dark_light());
        themes.insert(Theme::new("dark"));
        assert!(themes.has_dark_light());
    }
}
