//! Process-wide style registry
//!
//! All shared style state lives here as an explicit dependency rather than
//! module-level globals: the token tables, the theme set, the default-prop
//! inheritance cache, the generated-rule sink, and the pass-wide
//! variable-access flag. Tests and embedded hosts can run several registries
//! side by side.
//!
//! Reads dominate; writes happen at configuration time or on first use per
//! key, guarded by check-then-set under the lock.

use std::sync::RwLock;

use indexmap::IndexMap;
use lattice_core::{Platform, Props};
use lattice_theme::{
    theme_css_rules, Theme, ThemeConfig, Themes, Tokens, VariableAccess,
};
use rustc_hash::FxHashMap;

use crate::media::Breakpoints;
use crate::props::Shorthands;

/// One-time registry configuration.
#[derive(Debug, Default)]
pub struct RegistryConfig {
    pub platform: Platform,
    pub tokens: Tokens,
    pub themes: Themes,
    pub theme_config: ThemeConfig,
    pub breakpoints: Breakpoints,
    pub shorthands: Shorthands,
    /// Per-component default props layered over each component's own
    /// defaults (host configuration wins).
    pub component_defaults: FxHashMap<String, Props>,
}

/// Shared style-engine state. Constructed once at startup, read on every
/// render pass.
pub struct StyleRegistry {
    platform: Platform,
    tokens: Tokens,
    themes: Themes,
    theme_config: ThemeConfig,
    breakpoints: Breakpoints,
    shorthands: Shorthands,
    component_defaults: FxHashMap<String, Props>,

    variable_access: VariableAccess,
    default_props_cache: RwLock<FxHashMap<String, Props>>,
    rules: RwLock<IndexMap<String, String>>,
}

impl StyleRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        if config.themes.is_empty() {
            #[cfg(debug_assertions)]
            tracing::warn!("no themes configured; styles resolve against an empty theme");
        }

        Self {
            platform: config.platform,
            tokens: config.tokens,
            themes: config.themes,
            theme_config: config.theme_config,
            breakpoints: config.breakpoints,
            shorthands: config.shorthands,
            component_defaults: config.component_defaults,
            variable_access: VariableAccess::default(),
            default_props_cache: RwLock::new(FxHashMap::default()),
            rules: RwLock::new(IndexMap::new()),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    pub fn themes(&self) -> &Themes {
        &self.themes
    }

    pub fn theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// The first configured theme, used when a render names none.
    pub fn default_theme(&self) -> Option<&Theme> {
        self.themes.names().next().and_then(|name| self.themes.get(name))
    }

    pub fn theme_config(&self) -> &ThemeConfig {
        &self.theme_config
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    pub fn shorthands(&self) -> &Shorthands {
        &self.shorthands
    }

    pub fn component_defaults(&self, name: &str) -> Option<&Props> {
        self.component_defaults.get(name)
    }

    // ========== Variable liveness ==========

    /// The pass-wide resolver flag. The splitter resets it per pass; the
    /// render layer reads it once afterwards to decide whether to
    /// resubscribe to theme changes.
    pub fn variable_access(&self) -> &VariableAccess {
        &self.variable_access
    }

    /// Whether the last split pass resolved a live theme variable.
    pub fn did_access_variable(&self) -> bool {
        self.variable_access.did_access()
    }

    // ========== Default-props cache ==========

    pub(crate) fn cached_default_props(&self, name: &str) -> Option<Props> {
        self.default_props_cache.read().unwrap().get(name).cloned()
    }

    pub(crate) fn cache_default_props(&self, name: &str, props: Props) {
        self.default_props_cache
            .write()
            .unwrap()
            .entry(name.to_string())
            .or_insert(props);
    }

    /// Whether the merged defaults for a component name are already cached.
    pub fn has_cached_defaults(&self, name: &str) -> bool {
        self.default_props_cache.read().unwrap().contains_key(name)
    }

    // ========== Generated rules ==========

    /// Record a generated atomic rule. First insertion wins; the same class
    /// always names the same declaration.
    pub fn insert_rule(&self, class_name: &str, rule: &str) {
        self.rules
            .write()
            .unwrap()
            .entry(class_name.to_string())
            .or_insert_with(|| rule.to_string());
    }

    /// Snapshot of every generated rule, in insertion order, for the
    /// stylesheet-injection collaborator.
    pub fn rules(&self) -> Vec<(String, String)> {
        self.rules
            .read()
            .unwrap()
            .iter()
            .map(|(class, rule)| (class.clone(), rule.clone()))
            .collect()
    }

    /// The full generated stylesheet: token variables at `:root`, then every
    /// theme's selector rules in definition order. Order matters - later
    /// rules must be able to override earlier ones at equal specificity.
    pub fn stylesheet(&self) -> String {
        let mut out = vec![self.tokens.root_css_rule()];
        for (name, theme) in self.themes.iter() {
            out.extend(theme_css_rules(
                &self.theme_config,
                &self.themes,
                name,
                theme,
                std::slice::from_ref(name),
                &self.tokens,
            ));
        }
        out.join("\n")
    }
}
