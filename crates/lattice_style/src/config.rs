//! Static component configuration
//!
//! A [`StaticConfig`] is built once per component type at module load and
//! never mutated afterwards. It describes which style keys a component
//! accepts, its variants, its default props, and its parent chain for
//! default-prop inheritance.

use std::fmt;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use lattice_core::{Props, StyleMap, StyleValue};
use lattice_theme::{Theme, TokenCategory, Tokens};

/// Context handed to computed variants.
pub struct VariantContext<'a> {
    pub tokens: &'a Tokens,
    pub theme: Option<&'a Theme>,
    /// The full merged prop map, for variants that read sibling props.
    pub props: &'a Props,
}

/// A computed variant resolver.
///
/// Panics inside a resolver propagate to the render that triggered them;
/// the splitter never catches - a bad variant definition is a caller
/// configuration error and fails loudly.
pub type VariantFn = Arc<dyn Fn(&StyleValue, &VariantContext<'_>) -> StyleMap + Send + Sync>;

/// A named mapping from a prop value to a partial style patch.
#[derive(Clone)]
pub enum Variant {
    Literal(StyleMap),
    Computed(VariantFn),
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(map) => f.debug_tuple("Literal").field(map).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// The arms of one variant prop, in declaration order.
///
/// Arm keys are either exact stringified values (`"true"`, `"outlined"`) or
/// a token-spread matcher (`"...size"`) that accepts any value and resolves
/// it against the named token category.
#[derive(Clone, Debug, Default)]
pub struct VariantDefinition {
    arms: IndexMap<String, Variant>,
}

impl VariantDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(mut self, matcher: impl Into<String>, variant: Variant) -> Self {
        self.arms.insert(matcher.into(), variant);
        self
    }

    /// Select the arm for a prop value: exact match first, then the spread
    /// arm if one is declared.
    pub fn select(&self, value: &StyleValue) -> Option<(&Variant, Option<TokenCategory>)> {
        if let Some(variant) = self.arms.get(&matcher_key(value)) {
            return Some((variant, None));
        }
        self.arms.iter().find_map(|(key, variant)| {
            let spread = key.strip_prefix("...")?;
            Some((variant, TokenCategory::from_id(spread)))
        })
    }
}

fn matcher_key(value: &StyleValue) -> String {
    match value {
        StyleValue::Bool(b) => b.to_string(),
        other => other.css_text(),
    }
}

/// Immutable per-component-type style descriptor.
#[derive(Clone, Debug)]
pub struct StaticConfig {
    component_name: Option<String>,
    parent_names: Vec<String>,
    tag: Option<String>,
    is_text: bool,
    accepts_class_name: bool,
    valid_styles: IndexSet<String>,
    variants: IndexMap<String, VariantDefinition>,
    default_props: Props,
}

impl StaticConfig {
    pub fn builder(name: impl Into<String>) -> StaticConfigBuilder {
        StaticConfigBuilder::new().name(name)
    }

    pub fn component_name(&self) -> Option<&str> {
        self.component_name.as_deref()
    }

    pub fn parent_names(&self) -> &[String] {
        &self.parent_names
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn is_text(&self) -> bool {
        self.is_text
    }

    pub fn accepts_class_name(&self) -> bool {
        self.accepts_class_name
    }

    pub fn accepts_style(&self, key: &str) -> bool {
        self.valid_styles.contains(key)
    }

    pub fn variants(&self) -> &IndexMap<String, VariantDefinition> {
        &self.variants
    }

    pub fn default_props(&self) -> &Props {
        &self.default_props
    }
}

/// Builder for [`StaticConfig`].
#[derive(Debug, Default)]
pub struct StaticConfigBuilder {
    component_name: Option<String>,
    parent_names: Vec<String>,
    tag: Option<String>,
    is_text: bool,
    accepts_class_name: Option<bool>,
    extra_styles: Vec<String>,
    variants: IndexMap<String, VariantDefinition>,
    default_props: Props,
}

impl StaticConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.component_name = Some(name.into());
        self
    }

    /// Append a parent to the inheritance chain, root first.
    pub fn parent(mut self, name: impl Into<String>) -> Self {
        self.parent_names.push(name.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn text(mut self) -> Self {
        self.is_text = true;
        self
    }

    pub fn accepts_class_name(mut self, accepts: bool) -> Self {
        self.accepts_class_name = Some(accepts);
        self
    }

    /// Accept a style key beyond the base set.
    pub fn style_key(mut self, key: impl Into<String>) -> Self {
        self.extra_styles.push(key.into());
        self
    }

    pub fn variant(mut self, prop: impl Into<String>, definition: VariantDefinition) -> Self {
        self.variants.insert(prop.into(), definition);
        self
    }

    pub fn default_prop(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.default_props.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> StaticConfig {
        let mut valid_styles = base_valid_styles();
        valid_styles.extend(self.extra_styles);
        StaticConfig {
            component_name: self.component_name,
            parent_names: self.parent_names,
            tag: self.tag,
            is_text: self.is_text,
            accepts_class_name: self.accepts_class_name.unwrap_or(true),
            valid_styles,
            variants: self.variants,
            default_props: self.default_props,
        }
    }
}

/// The baseline accepted style keys, shared by every component.
fn base_valid_styles() -> IndexSet<String> {
    [
        // Layout
        "width",
        "height",
        "minWidth",
        "minHeight",
        "maxWidth",
        "maxHeight",
        "flex",
        "flexGrow",
        "flexShrink",
        "flexBasis",
        "flexDirection",
        "flexWrap",
        "alignItems",
        "alignSelf",
        "justifyContent",
        "gap",
        "rowGap",
        "columnGap",
        "position",
        "top",
        "right",
        "bottom",
        "left",
        "zIndex",
        "overflow",
        "display",
        // Spacing
        "margin",
        "marginTop",
        "marginRight",
        "marginBottom",
        "marginLeft",
        "padding",
        "paddingTop",
        "paddingRight",
        "paddingBottom",
        "paddingLeft",
        // Visual
        "backgroundColor",
        "borderColor",
        "borderWidth",
        "borderStyle",
        "borderRadius",
        "opacity",
        "shadowColor",
        "shadowRadius",
        "cursor",
        "pointerEvents",
        "transform",
        // Text
        "color",
        "fontFamily",
        "fontSize",
        "fontWeight",
        "fontStyle",
        "lineHeight",
        "letterSpacing",
        "textAlign",
        "textTransform",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
