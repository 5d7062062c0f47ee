//! The style splitter
//!
//! One call per render pass: partitions a merged prop map into static
//! class-name-eligible properties, dynamic inline properties, and
//! pseudo-state blocks, resolving variants, tokens, and responsive values
//! along the way.
//!
//! Application order is declaration order - the returned style and class
//! set are equivalent to applying every matched variant/pseudo/media rule
//! in prop-key order with later rules winning on conflicting keys.

use indexmap::IndexMap;
use lattice_core::{ElementKind, InteractionState, Platform, Props, PseudoState, StyleMap, StyleValue};
use lattice_theme::{resolve, simple_hash, Theme, TokenCategory};

use crate::config::{StaticConfig, Variant, VariantContext};
use crate::media::{
    is_breakpoint_object, resolve_responsive_list, resolve_responsive_map, HasMedia, MediaState,
};
use crate::props::expand_key;
use crate::registry::StyleRegistry;

/// Per-render state fed into the splitter alongside the interaction flags.
#[derive(Clone, Debug, Default)]
pub struct RenderState {
    pub interaction: InteractionState,
    /// An animation driver owns styles this render; classes would fight it.
    pub is_animated: bool,
    /// Presence says this instance is animating out.
    pub is_exiting: bool,
    /// Caller force-disabled class generation (forced-pseudo debug mode).
    pub no_class_names: bool,
}

/// Pseudo-style blocks, one bucket per reserved namespace. Always present in
/// the output, possibly empty, whether or not any pseudo is active.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PseudoStyles {
    pub hover: StyleMap,
    pub press: StyleMap,
    pub focus: StyleMap,
    pub enter: StyleMap,
    pub exit: StyleMap,
}

impl PseudoStyles {
    pub fn get(&self, pseudo: PseudoState) -> &StyleMap {
        match pseudo {
            PseudoState::Hover => &self.hover,
            PseudoState::Press => &self.press,
            PseudoState::Focus => &self.focus,
            PseudoState::Enter => &self.enter,
            PseudoState::Exit => &self.exit,
        }
    }

    fn get_mut(&mut self, pseudo: PseudoState) -> &mut StyleMap {
        match pseudo {
            PseudoState::Hover => &mut self.hover,
            PseudoState::Press => &mut self.press,
            PseudoState::Focus => &mut self.focus,
            PseudoState::Enter => &mut self.enter,
            PseudoState::Exit => &mut self.exit,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hover.is_empty()
            && self.press.is_empty()
            && self.focus.is_empty()
            && self.enter.is_empty()
            && self.exit.is_empty()
    }
}

/// The per-render split result. Ephemeral: owned by the invoking render,
/// recomputed every pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplitStyles {
    /// Inline style object. Empty when class generation ran - partial
    /// class/inline mixing is unsupported by design.
    pub style: StyleMap,
    /// Pseudo-state blocks for runtime application.
    pub pseudos: PseudoStyles,
    /// Style key to generated class name, in application order.
    pub class_names: IndexMap<String, String>,
    /// Which breakpoints this render depends on.
    pub has_media: HasMedia,
    /// Props that are neither styles nor reserved, passed through untouched
    /// to the final element.
    pub view_props: Props,
    /// Font family for the `font_<name>` class, `$` sigil stripped.
    pub font_family: Option<String>,
}

/// Component-scope class name: `is_<componentName>`. Wire contract with
/// external CSS tooling.
pub fn component_class_name(component_name: &str) -> String {
    format!("is_{component_name}")
}

/// Font-scope class name: `font_<familyName>`. Wire contract with external
/// CSS tooling.
pub fn font_class_name(family: &str) -> String {
    format!("font_{family}")
}

/// Props consumed by the component layer, never forwarded to the element.
const RESERVED_PROPS: &[&str] = &[
    "theme",
    "themeInverse",
    "themeShallow",
    "componentName",
    "tag",
    "asChild",
    "children",
    "animation",
    "forceStyle",
    "debug",
    "reset",
];

/// Split a merged prop map into platform output.
///
/// `props` must already be combined with the component's merged defaults
/// (see [`crate::merged_default_props`]). `theme` is the active theme, if
/// any; unrecognized token references pass through as literals.
pub fn split_styles(
    props: &Props,
    config: &StaticConfig,
    theme: Option<&Theme>,
    state: &RenderState,
    media_state: &MediaState,
    element: &ElementKind,
    registry: &StyleRegistry,
) -> SplitStyles {
    registry.variable_access().reset();

    // Class eligibility is all-or-nothing: if any condition fails, every
    // style for this render stays inline. Mixing would set up specificity
    // fights between inline styles and class rules.
    let use_classes = registry.platform() == Platform::Web
        && config.accepts_class_name()
        && element.accepts_class_name()
        && !state.is_animated
        && !state.no_class_names;

    let mut pass = SplitPass {
        config,
        theme,
        state,
        media_state,
        registry,
        use_classes,
        props,
        out: SplitStyles::default(),
    };

    for (key, value) in props {
        pass.apply_prop(key, value);
    }

    let mut out = pass.out;

    if use_classes {
        compile_class_names(&mut out, registry);
    }

    out
}

struct SplitPass<'a> {
    config: &'a StaticConfig,
    theme: Option<&'a Theme>,
    state: &'a RenderState,
    media_state: &'a MediaState,
    registry: &'a StyleRegistry,
    use_classes: bool,
    props: &'a Props,
    out: SplitStyles,
}

impl SplitPass<'_> {
    fn apply_prop(&mut self, key: &str, value: &StyleValue) {
        let key = expand_key(key, self.registry.shorthands());

        if let Some(definition) = self.config.variants().get(key) {
            if let Some((variant, _spread)) = definition.select(value) {
                let patch = match variant {
                    Variant::Literal(map) => map.clone(),
                    Variant::Computed(resolver) => resolver.as_ref()(
                        value,
                        &VariantContext {
                            tokens: self.registry.tokens(),
                            theme: self.theme,
                            props: self.props,
                        },
                    ),
                };
                // Variant output is a style patch; entries land through the
                // same pipeline so later props still override them.
                for (patch_key, patch_value) in &patch {
                    self.apply_style_entry(patch_key, patch_value);
                }
            } else {
                tracing::debug!(prop = key, "no variant arm matched; prop dropped");
            }
            return;
        }

        self.apply_style_entry(key, value);
    }

    fn apply_style_entry(&mut self, key: &str, value: &StyleValue) {
        if let Some(pseudo) = PseudoState::from_prop_key(key) {
            if let Some(block) = value.as_map() {
                self.apply_pseudo_block(pseudo, block);
            }
            return;
        }

        match value {
            StyleValue::List(items) => {
                let (resolved, keys) =
                    resolve_responsive_list(items, self.registry.breakpoints(), self.media_state);
                self.out.has_media.add_keys(keys.into_iter());
                self.insert_style(key, &resolved);
            }
            StyleValue::Map(map) if is_breakpoint_object(map, self.registry.breakpoints()) => {
                // Named-breakpoint objects cannot be narrowed statically:
                // watch every breakpoint.
                self.out.has_media.set_all();
                if let Some(resolved) =
                    resolve_responsive_map(map, self.registry.breakpoints(), self.media_state)
                {
                    self.insert_style(key, &resolved);
                }
            }
            _ if self.config.accepts_style(key) => self.insert_style(key, value),
            _ if RESERVED_PROPS.contains(&key) => {}
            _ => {
                // Unknown keys pass through untouched - they are native
                // platform attributes, never silently dropped.
                self.out
                    .view_props
                    .insert(key.to_string(), value.clone());
            }
        }
    }

    fn apply_pseudo_block(&mut self, pseudo: PseudoState, block: &StyleMap) {
        let resolved: StyleMap = block
            .iter()
            .map(|(key, value)| {
                let resolved = resolve(
                    value,
                    category_for_style_key(key),
                    self.theme,
                    self.registry.tokens(),
                    self.registry.variable_access(),
                );
                (key.clone(), resolved.value)
            })
            .collect();

        // Without classes there is no :hover-style selector to defer to, so
        // the currently active state merges into the base style eagerly.
        let eager = !self.use_classes
            && pseudo.is_active(&self.state.interaction, self.state.is_exiting);
        if eager {
            for (key, value) in &resolved {
                self.out.style.insert(key.clone(), value.clone());
            }
        }

        let bucket = self.out.pseudos.get_mut(pseudo);
        for (key, value) in resolved {
            bucket.insert(key, value);
        }
    }

    fn insert_style(&mut self, key: &str, value: &StyleValue) {
        if !self.config.accepts_style(key) {
            if RESERVED_PROPS.contains(&key) {
                return;
            }
            self.out
                .view_props
                .insert(key.to_string(), value.clone());
            return;
        }

        if key == "fontFamily" {
            if let Some(family) = value.as_str() {
                self.out.font_family = Some(family.trim_start_matches('$').to_string());
            }
        }

        let resolved = resolve(
            value,
            category_for_style_key(key),
            self.theme,
            self.registry.tokens(),
            self.registry.variable_access(),
        );
        self.out.style.insert(key.to_string(), resolved.value);
    }
}

/// Compile every resolved style entry and pseudo block into atomic classes,
/// draining the inline style map. Only called when this render is
/// class-eligible.
fn compile_class_names(out: &mut SplitStyles, registry: &StyleRegistry) {
    let style = std::mem::take(&mut out.style);
    for (key, value) in style {
        let class = atomic_class_name(&key, &value, None);
        let rule = format!(".{class}{{{}:{}}}", kebab_case(&key), value.css_text());
        registry.insert_rule(&class, &rule);
        out.class_names.insert(key, class);
    }

    for pseudo in PseudoState::ALL {
        let Some(selector) = pseudo.css_selector() else {
            // Enter/exit are mount-driven and stay runtime-only.
            continue;
        };
        let bucket = out.pseudos.get(pseudo).clone();
        for (key, value) in bucket {
            let class = atomic_class_name(&key, &value, Some(pseudo));
            let rule = format!(
                ".{class}{selector}{{{}:{}}}",
                kebab_case(&key),
                value.css_text()
            );
            registry.insert_rule(&class, &rule);
            out.class_names
                .insert(format!("{key}{selector}"), class);
        }
    }
}

/// Atomic class name: `_<key>-<hash>`, with a pseudo segment when the rule
/// targets an interaction selector. Wire contract with external CSS tooling.
fn atomic_class_name(key: &str, value: &StyleValue, pseudo: Option<PseudoState>) -> String {
    let hash = simple_hash(&value.css_text(), 10);
    match pseudo {
        Some(pseudo) => format!("_{key}-{}-{hash}", pseudo_segment(pseudo)),
        None => format!("_{key}-{hash}"),
    }
}

fn pseudo_segment(pseudo: PseudoState) -> &'static str {
    match pseudo {
        PseudoState::Hover => "hover",
        PseudoState::Press => "press",
        PseudoState::Focus => "focus",
        PseudoState::Enter => "enter",
        PseudoState::Exit => "exit",
    }
}

/// `backgroundColor` -> `background-color`.
fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// The token category a style key resolves bare references against.
fn category_for_style_key(key: &str) -> TokenCategory {
    if key == "color" || key.ends_with("Color") {
        TokenCategory::Color
    } else if key.contains("Radius") {
        TokenCategory::Radius
    } else if key == "zIndex" {
        TokenCategory::ZIndex
    } else if key == "fontFamily" {
        TokenCategory::Font
    } else if is_space_key(key) {
        TokenCategory::Space
    } else {
        TokenCategory::Size
    }
}

fn is_space_key(key: &str) -> bool {
    key.starts_with("margin")
        || key.starts_with("padding")
        || matches!(
            key,
            "gap" | "rowGap" | "columnGap" | "top" | "right" | "bottom" | "left"
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_case_splits_camel_humps() {
        assert_eq!(kebab_case("backgroundColor"), "background-color");
        assert_eq!(kebab_case("width"), "width");
        assert_eq!(kebab_case("borderTopLeftRadius"), "border-top-left-radius");
    }

    #[test]
    fn category_mapping_covers_key_families() {
        assert_eq!(category_for_style_key("color"), TokenCategory::Color);
        assert_eq!(category_for_style_key("borderColor"), TokenCategory::Color);
        assert_eq!(category_for_style_key("borderRadius"), TokenCategory::Radius);
        assert_eq!(category_for_style_key("marginTop"), TokenCategory::Space);
        assert_eq!(category_for_style_key("width"), TokenCategory::Size);
        assert_eq!(category_for_style_key("zIndex"), TokenCategory::ZIndex);
        assert_eq!(category_for_style_key("fontFamily"), TokenCategory::Font);
    }

    #[test]
    fn atomic_names_are_stable_per_value() {
        let a = atomic_class_name("width", &StyleValue::from(10), None);
        let b = atomic_class_name("width", &StyleValue::from(10), None);
        let c = atomic_class_name("width", &StyleValue::from(12), None);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.starts_with("_width-"));
    }
}
