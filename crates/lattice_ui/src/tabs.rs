//! Tabs style frames
//!
//! Four frames: the root (`Tabs`), the trigger strip (`TabsList`), the
//! triggers themselves (`TabsTrigger`), and the panel (`TabsContent`).
//! Selected triggers apply the `active` sub-theme and report
//! `data-state="active"`; orientation flows to `data-orientation` on the
//! root and content.

use std::sync::OnceLock;

use lattice_core::{style_map, Props, StyleMap, StyleValue};
use lattice_style::{
    MediaState, RenderState, StaticConfig, StyleRegistry, Variant, VariantContext,
    VariantDefinition,
};

use crate::frame::{lookup_theme, render_frame, FrameRender};
use crate::sizing::button_sized;

static TABS_FRAME: OnceLock<StaticConfig> = OnceLock::new();
static TABS_LIST: OnceLock<StaticConfig> = OnceLock::new();
static TABS_TRIGGER: OnceLock<StaticConfig> = OnceLock::new();
static TABS_CONTENT: OnceLock<StaticConfig> = OnceLock::new();

/// Root frame configuration.
pub fn tabs_frame_config() -> &'static StaticConfig {
    TABS_FRAME.get_or_init(|| {
        StaticConfig::builder("Tabs")
            .default_prop("flexDirection", "column")
            .build()
    })
}

/// Trigger-strip frame configuration.
pub fn tabs_list_config() -> &'static StaticConfig {
    TABS_LIST.get_or_init(|| {
        StaticConfig::builder("TabsList")
            .default_prop("flexDirection", "row")
            .build()
    })
}

/// Trigger frame configuration.
pub fn tabs_trigger_config() -> &'static StaticConfig {
    TABS_TRIGGER.get_or_init(|| {
        StaticConfig::builder("TabsTrigger")
            .tag("button")
            .variant(
                "size",
                VariantDefinition::new().arm(
                    "...size",
                    Variant::Computed(std::sync::Arc::new(
                        |value: &StyleValue, ctx: &VariantContext<'_>| -> StyleMap {
                            button_sized(value, ctx.tokens)
                        },
                    )),
                ),
            )
            .variant(
                "disabled",
                VariantDefinition::new().arm(
                    "true",
                    Variant::Literal(style_map! {"pointerEvents" => "none"}),
                ),
            )
            .variant(
                "theme",
                VariantDefinition::new().arm(
                    "Button",
                    Variant::Literal(style_map! {
                        "backgroundColor" => "$background",
                        "borderWidth" => 1,
                        "borderColor" => "transparent",
                        "pressStyle" => StyleValue::Map(style_map! {
                            "borderColor" => "transparent",
                        }),
                        "hoverStyle" => StyleValue::Map(style_map! {
                            "borderColor" => "transparent",
                        }),
                        "focusStyle" => StyleValue::Map(style_map! {
                            "borderColor" => "$borderColorFocus",
                        }),
                    }),
                ),
            )
            .default_prop("justifyContent", "center")
            .default_prop("alignItems", "center")
            .default_prop("flexWrap", "nowrap")
            .default_prop("flexDirection", "row")
            .default_prop("cursor", "pointer")
            .build()
    })
}

/// Panel frame configuration.
pub fn tabs_content_config() -> &'static StaticConfig {
    TABS_CONTENT.get_or_init(|| StaticConfig::builder("TabsContent").build())
}

/// Layout direction of the trigger strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TabsOrientation {
    #[default]
    Horizontal,
    Vertical,
}

impl TabsOrientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Styling output for the tabs root and list.
#[derive(Clone, Debug)]
pub struct TabsRender {
    pub root: FrameRender,
    pub list: FrameRender,
    pub data_orientation: &'static str,
}

/// Tabs root style builder.
#[derive(Clone, Debug, Default)]
pub struct Tabs {
    orientation: TabsOrientation,
    extra: Props,
}

impl Tabs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orientation(mut self, orientation: TabsOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn render(
        &self,
        registry: &StyleRegistry,
        base_theme: Option<&str>,
        media_state: &MediaState,
    ) -> TabsRender {
        let theme = lookup_theme(registry, base_theme);
        let data_orientation = self.orientation.as_str();
        let state = RenderState::default();

        let mut root_props = Props::new();
        root_props.insert(
            "data-orientation".into(),
            StyleValue::from(data_orientation),
        );
        for (key, value) in &self.extra {
            root_props.insert(key.clone(), value.clone());
        }
        if self.orientation == TabsOrientation::Vertical {
            root_props.insert("flexDirection".into(), StyleValue::from("row"));
        }

        let root = render_frame(
            tabs_frame_config(),
            &root_props,
            theme,
            &state,
            media_state,
            registry,
        );

        let mut list_props = Props::new();
        if self.orientation == TabsOrientation::Vertical {
            list_props.insert("flexDirection".into(), StyleValue::from("column"));
        }
        let list = render_frame(
            tabs_list_config(),
            &list_props,
            theme,
            &state,
            media_state,
            registry,
        );

        TabsRender {
            root,
            list,
            data_orientation,
        }
    }
}

/// Styling output for one trigger.
#[derive(Clone, Debug)]
pub struct TabsTriggerRender {
    pub frame: FrameRender,
    /// `active` or `inactive`, forwarded as `data-state`.
    pub data_state: &'static str,
}

/// Trigger style builder.
#[derive(Clone, Debug)]
pub struct TabsTrigger {
    value: String,
    selected: bool,
    disabled: bool,
    button_theme: bool,
    size: StyleValue,
    extra: Props,
}

impl TabsTrigger {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            selected: false,
            disabled: false,
            button_theme: false,
            size: StyleValue::from("$true"),
            extra: Props::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Style the trigger like a button (border, background, focus ring).
    pub fn button_theme(mut self, enabled: bool) -> Self {
        self.button_theme = enabled;
        self
    }

    pub fn size(mut self, size: impl Into<StyleValue>) -> Self {
        self.size = size.into();
        self
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn render(
        &self,
        registry: &StyleRegistry,
        base_theme: Option<&str>,
        media_state: &MediaState,
    ) -> TabsTriggerRender {
        self.render_with_state(registry, base_theme, media_state, &RenderState::default())
    }

    pub fn render_with_state(
        &self,
        registry: &StyleRegistry,
        base_theme: Option<&str>,
        media_state: &MediaState,
        state: &RenderState,
    ) -> TabsTriggerRender {
        let base = lookup_theme(registry, base_theme);
        let theme = match (self.selected, base) {
            (true, Some(base)) => registry.themes().component_theme(base.name(), "active"),
            (_, base) => base,
        };
        let data_state = if self.selected { "active" } else { "inactive" };

        let mut props = Props::new();
        props.insert("size".into(), self.size.clone());
        if self.button_theme {
            props.insert("theme".into(), StyleValue::from("Button"));
        }
        if self.disabled {
            props.insert("disabled".into(), StyleValue::Bool(true));
            props.insert("data-disabled".into(), StyleValue::from(""));
        }
        props.insert("data-state".into(), StyleValue::from(data_state));
        props.insert("id".into(), StyleValue::from(self.trigger_id()));
        for (key, value) in &self.extra {
            props.insert(key.clone(), value.clone());
        }

        let frame = render_frame(
            tabs_trigger_config(),
            &props,
            theme,
            state,
            media_state,
            registry,
        );

        TabsTriggerRender { frame, data_state }
    }

    fn trigger_id(&self) -> String {
        format!("tabs-trigger-{}", self.value)
    }
}
