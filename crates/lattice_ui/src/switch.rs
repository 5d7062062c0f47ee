//! Switch style frames
//!
//! A switch is a track (`Switch`) and a thumb (`SwitchThumb`). Track height
//! is 65% of the size token, width twice that; the frame adds a 2px border
//! allowance on each side. The checked state applies the `active` sub-theme
//! and translates the thumb by `width - height`.

use std::sync::OnceLock;

use lattice_core::{style_map, Props, StyleMap, StyleValue};
use lattice_style::{
    MediaState, RenderState, StaticConfig, StyleRegistry, Variant, VariantContext,
    VariantDefinition,
};
use lattice_theme::Theme;

use crate::frame::{lookup_theme, render_frame, FrameRender};
use crate::sizing::{switch_height, switch_width};

static SWITCH_FRAME: OnceLock<StaticConfig> = OnceLock::new();
static SWITCH_THUMB: OnceLock<StaticConfig> = OnceLock::new();

/// The `Switch` track frame configuration, built once at first use.
pub fn switch_frame_config() -> &'static StaticConfig {
    SWITCH_FRAME.get_or_init(|| {
        StaticConfig::builder("Switch")
            .tag("button")
            .variant(
                "unstyled",
                VariantDefinition::new().arm(
                    "false",
                    Variant::Literal(style_map! {
                        "focusStyle" => StyleValue::Map(style_map! {
                            "borderColor" => "$borderColorFocus",
                        }),
                    }),
                ),
            )
            .variant(
                "size",
                VariantDefinition::new().arm(
                    "...size",
                    Variant::Computed(std::sync::Arc::new(
                        |value: &StyleValue, ctx: &VariantContext<'_>| -> StyleMap {
                            let height = switch_height(value, ctx.tokens) + 4.0;
                            let width = switch_width(value, ctx.tokens) + 4.0;
                            style_map! {
                                "height" => height,
                                "minHeight" => height,
                                "width" => width,
                            }
                        },
                    )),
                ),
            )
            .default_prop("unstyled", false)
            .default_prop("size", "$true")
            .build()
    })
}

/// The `SwitchThumb` frame configuration.
pub fn switch_thumb_config() -> &'static StaticConfig {
    SWITCH_THUMB.get_or_init(|| {
        StaticConfig::builder("SwitchThumb")
            .variant(
                "unstyled",
                VariantDefinition::new().arm(
                    "false",
                    Variant::Literal(style_map! {
                        "backgroundColor" => "$background",
                        "borderRadius" => 1000,
                    }),
                ),
            )
            .variant(
                "size",
                VariantDefinition::new().arm(
                    "...size",
                    Variant::Computed(std::sync::Arc::new(
                        |value: &StyleValue, ctx: &VariantContext<'_>| -> StyleMap {
                            let size = switch_height(value, ctx.tokens);
                            style_map! {
                                "height" => size,
                                "width" => size,
                            }
                        },
                    )),
                ),
            )
            .default_prop("unstyled", false)
            .default_prop("size", "$true")
            .build()
    })
}

/// Styling output for one switch render.
#[derive(Clone, Debug)]
pub struct SwitchRender {
    pub frame: FrameRender,
    pub thumb: FrameRender,
    /// `checked` or `unchecked`, forwarded as `data-state`.
    pub data_state: &'static str,
    /// Thumb x translation in logical pixels.
    pub thumb_offset: f32,
}

/// Switch style builder. Interaction wiring lives in the host layer; this
/// builder owns the declarative styling surface.
#[derive(Clone, Debug)]
pub struct Switch {
    checked: bool,
    disabled: bool,
    unstyled: bool,
    size: StyleValue,
    extra: Props,
}

impl Switch {
    pub fn new() -> Self {
        Self {
            checked: false,
            disabled: false,
            unstyled: false,
            size: StyleValue::from("$true"),
            extra: Props::new(),
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn unstyled(mut self, unstyled: bool) -> Self {
        self.unstyled = unstyled;
        self
    }

    pub fn size(mut self, size: impl Into<StyleValue>) -> Self {
        self.size = size.into();
        self
    }

    /// Forward an arbitrary prop to the frame.
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Resolve styling with a default (mounted, idle) render state.
    pub fn render(
        &self,
        registry: &StyleRegistry,
        base_theme: Option<&str>,
        media_state: &MediaState,
    ) -> SwitchRender {
        self.render_with_state(registry, base_theme, media_state, &RenderState::default())
    }

    /// Resolve styling against explicit interaction state.
    pub fn render_with_state(
        &self,
        registry: &StyleRegistry,
        base_theme: Option<&str>,
        media_state: &MediaState,
        state: &RenderState,
    ) -> SwitchRender {
        let theme = self.active_theme(registry, base_theme);
        let data_state = if self.checked { "checked" } else { "unchecked" };

        let mut frame_props = Props::new();
        frame_props.insert("unstyled".into(), StyleValue::Bool(self.unstyled));
        frame_props.insert("size".into(), self.size.clone());
        frame_props.insert("data-state".into(), StyleValue::from(data_state));
        if self.disabled {
            frame_props.insert("data-disabled".into(), StyleValue::from(""));
        }
        for (key, value) in &self.extra {
            frame_props.insert(key.clone(), value.clone());
        }

        let frame = render_frame(
            switch_frame_config(),
            &frame_props,
            theme,
            state,
            media_state,
            registry,
        );

        let thumb_offset = if self.checked {
            switch_width(&self.size, registry.tokens()) - switch_height(&self.size, registry.tokens())
        } else {
            0.0
        };

        let mut thumb_props = Props::new();
        thumb_props.insert("unstyled".into(), StyleValue::Bool(self.unstyled));
        thumb_props.insert("size".into(), self.size.clone());
        thumb_props.insert("data-state".into(), StyleValue::from(data_state));
        if thumb_offset != 0.0 {
            thumb_props.insert(
                "transform".into(),
                StyleValue::from(format!("translateX({thumb_offset}px)")),
            );
        }

        let thumb = render_frame(
            switch_thumb_config(),
            &thumb_props,
            theme,
            state,
            media_state,
            registry,
        );

        SwitchRender {
            frame,
            thumb,
            data_state,
            thumb_offset,
        }
    }

    fn active_theme<'a>(
        &self,
        registry: &'a StyleRegistry,
        base_theme: Option<&str>,
    ) -> Option<&'a Theme> {
        let base = lookup_theme(registry, base_theme)?;
        if self.checked {
            registry.themes().component_theme(base.name(), "active")
        } else {
            Some(base)
        }
    }
}

impl Default for Switch {
    fn default() -> Self {
        Self::new()
    }
}
