//! The contract boundary with the component-factory layer
//!
//! A frame render is the styling half of a component render: merge the
//! component's inherited defaults under the caller's props, run the
//! splitter, and assemble the final class list. Element creation and event
//! wiring happen outside this crate.

use lattice_core::{ElementKind, Props};
use lattice_style::{
    component_class_name, font_class_name, merge_props, merged_default_props, split_styles,
    MediaState, RenderState, SplitStyles, StaticConfig, StyleRegistry,
};
use lattice_theme::Theme;

/// Split-style output plus the assembled class list for one frame.
#[derive(Clone, Debug)]
pub struct FrameRender {
    pub split: SplitStyles,
    /// `is_<name>`, `font_<family>` when present, then the atomic classes,
    /// in application order.
    pub class_list: Vec<String>,
}

impl FrameRender {
    /// The class attribute value.
    pub fn class_attr(&self) -> String {
        self.class_list.join(" ")
    }
}

/// The named base theme, or the registry's first theme when the caller
/// names none. A missing name logs and renders unthemed rather than failing.
pub(crate) fn lookup_theme<'a>(
    registry: &'a StyleRegistry,
    base_theme: Option<&str>,
) -> Option<&'a Theme> {
    match base_theme {
        Some(name) => {
            let theme = registry.theme(name);
            if theme.is_none() {
                tracing::debug!(theme = name, "unknown theme; rendering unthemed");
            }
            theme
        }
        None => registry.default_theme(),
    }
}

/// Run the style pipeline for one frame.
pub fn render_frame(
    config: &StaticConfig,
    props: &Props,
    theme: Option<&Theme>,
    state: &RenderState,
    media_state: &MediaState,
    registry: &StyleRegistry,
) -> FrameRender {
    let defaults = merged_default_props(config, registry);
    let merged = merge_props(&defaults, props, registry.shorthands());

    let element = ElementKind::tag(config.tag().unwrap_or("div").to_string());
    let split = split_styles(&merged, config, theme, state, media_state, &element, registry);

    let mut class_list = Vec::new();
    if let Some(name) = config.component_name() {
        class_list.push(component_class_name(name));
    }
    if let Some(family) = &split.font_family {
        class_list.push(font_class_name(family));
    }
    class_list.extend(split.class_names.values().cloned());

    FrameRender { split, class_list }
}
