//! Default-prop inheritance
//!
//! Components extend one another (`styled` on top of `styled`); each level
//! may declare defaults, and the host configuration may layer more on by
//! component name. The fully-merged result is cached process-wide by the
//! most-derived name so repeated instantiation never re-walks the chain.

use lattice_core::Props;

use crate::config::StaticConfig;
use crate::props::merge_props;
use crate::registry::StyleRegistry;

/// The merged default props for a component, walking the parent chain root
/// to leaf with `{..parent, ..child}` semantics (child wins).
///
/// Host-level defaults from [`crate::RegistryConfig::component_defaults`]
/// are merged over the component's own declared defaults: configuration
/// overrides code. The chain merge is cached per component name on first
/// use and never invalidated - configuration is static after setup.
pub fn merged_default_props(config: &StaticConfig, registry: &StyleRegistry) -> Props {
    let Some(name) = config.component_name() else {
        return config.default_props().clone();
    };

    let shorthands = registry.shorthands();
    let mut prev: Option<Props> = None;

    let chain = config
        .parent_names()
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(name));

    for level_name in chain {
        if let Some(cached) = registry.cached_default_props(level_name) {
            prev = Some(cached);
            continue;
        }
        let Some(level) = registry.component_defaults(level_name) else {
            // Nothing declared at this level: the chain-so-far stands in for
            // it so later lookups skip the walk.
            if let Some(prev) = &prev {
                registry.cache_default_props(level_name, prev.clone());
            }
            continue;
        };
        let merged = merge_props(&prev.unwrap_or_default(), level, shorthands);
        registry.cache_default_props(level_name, merged.clone());
        prev = Some(merged);
    }

    match registry.cached_default_props(name) {
        Some(config_defaults) => merge_props(config.default_props(), &config_defaults, shorthands),
        None => config.default_props().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryConfig;
    use lattice_core::{style_map, StyleValue};
    use rustc_hash::FxHashMap;

    fn registry_with_chain() -> StyleRegistry {
        let mut component_defaults = FxHashMap::default();
        component_defaults.insert("A".to_string(), style_map! {"color" => "red"});
        component_defaults.insert("B".to_string(), style_map! {"color" => "blue"});
        component_defaults.insert("C".to_string(), style_map! {"size" => "lg"});
        StyleRegistry::new(RegistryConfig {
            component_defaults,
            ..RegistryConfig::default()
        })
    }

    #[test]
    fn chain_merges_root_to_leaf_child_wins() {
        let registry = registry_with_chain();
        let config = StaticConfig::builder("C").parent("A").parent("B").build();

        let merged = merged_default_props(&config, &registry);
        assert_eq!(merged["color"], StyleValue::from("blue"));
        assert_eq!(merged["size"], StyleValue::from("lg"));
    }

    #[test]
    fn merge_is_cached_by_most_derived_name() {
        let registry = registry_with_chain();
        let config = StaticConfig::builder("C").parent("A").parent("B").build();

        assert!(!registry.has_cached_defaults("C"));
        let first = merged_default_props(&config, &registry);
        assert!(registry.has_cached_defaults("C"));

        let second = merged_default_props(&config, &registry);
        assert_eq!(first, second);
    }

    #[test]
    fn component_own_defaults_fill_gaps() {
        let registry = registry_with_chain();
        let config = StaticConfig::builder("C")
            .parent("A")
            .parent("B")
            .default_prop("width", 10)
            // Host config wins over the component's own declaration.
            .default_prop("color", "green")
            .build();

        let merged = merged_default_props(&config, &registry);
        assert_eq!(merged["width"], StyleValue::Number(10.0));
        assert_eq!(merged["color"], StyleValue::from("blue"));
    }

    #[test]
    fn unconfigured_component_keeps_declared_defaults() {
        let registry = StyleRegistry::new(RegistryConfig::default());
        let config = StaticConfig::builder("Lone")
            .default_prop("opacity", 0.5)
            .build();

        let merged = merged_default_props(&config, &registry);
        assert_eq!(merged["opacity"], StyleValue::Number(0.5));
    }
}
