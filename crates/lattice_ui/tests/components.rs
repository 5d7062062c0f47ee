//! Switch and Tabs styling output through the full engine.

use lattice_core::StyleValue;
use lattice_style::{RegistryConfig, RenderState, StyleRegistry};
use lattice_theme::ThemeDefinition;
use lattice_ui::{Switch, Tabs, TabsOrientation, TabsTrigger};

const DEF: &str = r##"
    [tokens.size]
    true = 44
    4 = 40

    [tokens.space]
    true = 12
    4 = 16

    [themes.light]
    background = "#ffffff"
    color = "#111111"
    borderColorFocus = "#0000ff"

    [themes.dark]
    background = "#111111"
    color = "#ffffff"
    borderColorFocus = "#00ffff"

    [themes.light_active]
    background = "#00aa00"
"##;

fn registry() -> StyleRegistry {
    let (tokens, themes) = ThemeDefinition::from_toml_str(DEF)
        .expect("definition parses")
        .build()
        .expect("definition builds");
    StyleRegistry::new(RegistryConfig {
        tokens,
        themes,
        ..RegistryConfig::default()
    })
}

fn inline_state() -> RenderState {
    RenderState {
        no_class_names: true,
        ..RenderState::default()
    }
}

#[test]
fn switch_track_sizes_from_the_size_token() {
    let registry = registry();
    let media = registry.breakpoints().media_state(1024.0);

    let render = Switch::new().size("$4").render_with_state(
        &registry,
        Some("light"),
        &media,
        &inline_state(),
    );

    // 40 * 0.65 = 26, plus the 4px border allowance.
    assert_eq!(render.frame.split.style["height"], StyleValue::Number(30.0));
    assert_eq!(
        render.frame.split.style["minHeight"],
        StyleValue::Number(30.0)
    );
    assert_eq!(render.frame.split.style["width"], StyleValue::Number(56.0));

    // Thumb is a square the size of the bare track height.
    assert_eq!(render.thumb.split.style["height"], StyleValue::Number(26.0));
    assert_eq!(render.thumb.split.style["width"], StyleValue::Number(26.0));
}

#[test]
fn checked_switch_translates_thumb_and_applies_active_theme() {
    let registry = registry();
    let media = registry.breakpoints().media_state(1024.0);

    let unchecked = Switch::new().size("$4").render_with_state(
        &registry,
        Some("light"),
        &media,
        &inline_state(),
    );
    assert_eq!(unchecked.data_state, "unchecked");
    assert_eq!(unchecked.thumb_offset, 0.0);

    let checked = Switch::new().size("$4").checked(true).render_with_state(
        &registry,
        Some("light"),
        &media,
        &inline_state(),
    );
    assert_eq!(checked.data_state, "checked");
    // width - height = 52 - 26.
    assert_eq!(checked.thumb_offset, 26.0);
    assert_eq!(
        checked.thumb.split.style["transform"],
        StyleValue::from("translateX(26px)")
    );

    // The active sub-theme exists, so the thumb background stays a live
    // reference into it rather than the base background.
    assert_eq!(
        checked.thumb.split.style["backgroundColor"],
        StyleValue::from("var(--background)")
    );
}

#[test]
fn switch_carries_component_class_and_data_state() {
    let registry = registry();
    let media = registry.breakpoints().media_state(1024.0);

    let render = Switch::new().render(&registry, Some("light"), &media);

    assert_eq!(render.frame.class_list[0], "is_Switch");
    assert_eq!(render.thumb.class_list[0], "is_SwitchThumb");
    assert_eq!(
        render.frame.split.view_props["data-state"],
        StyleValue::from("unchecked")
    );
    // Class-eligible render: no inline styles remain.
    assert!(render.frame.split.style.is_empty());
    assert!(!render.frame.split.class_names.is_empty());
}

#[test]
fn styled_switch_declares_focus_ring() {
    let registry = registry();
    let media = registry.breakpoints().media_state(1024.0);

    let render = Switch::new().render_with_state(
        &registry,
        Some("light"),
        &media,
        &inline_state(),
    );

    assert_eq!(
        render.frame.split.pseudos.focus["borderColor"],
        StyleValue::from("var(--borderColorFocus)")
    );
}

#[test]
fn unstyled_switch_skips_cosmetics() {
    let registry = registry();
    let media = registry.breakpoints().media_state(1024.0);

    let render = Switch::new().unstyled(true).render_with_state(
        &registry,
        Some("light"),
        &media,
        &inline_state(),
    );

    assert!(render.frame.split.pseudos.focus.is_empty());
    assert!(!render.thumb.split.style.contains_key("backgroundColor"));
    // Size math still applies - unstyled drops cosmetics, not layout.
    assert!(render.frame.split.style.contains_key("height"));
}

#[test]
fn disabled_switch_flags_the_element() {
    let registry = registry();
    let media = registry.breakpoints().media_state(1024.0);

    let render = Switch::new().disabled(true).render_with_state(
        &registry,
        Some("light"),
        &media,
        &inline_state(),
    );
    assert_eq!(
        render.frame.split.view_props["data-disabled"],
        StyleValue::from("")
    );
}

#[test]
fn tabs_root_reports_orientation() {
    let registry = registry();
    let media = registry.breakpoints().media_state(1024.0);

    let tabs = Tabs::new()
        .orientation(TabsOrientation::Vertical)
        .render(&registry, Some("light"), &media);

    assert_eq!(tabs.data_orientation, "vertical");
    assert_eq!(
        tabs.root.split.view_props["data-orientation"],
        StyleValue::from("vertical")
    );
    assert_eq!(tabs.root.class_list[0], "is_Tabs");
    assert_eq!(tabs.list.class_list[0], "is_TabsList");
}

#[test]
fn trigger_sizes_like_a_button_and_respects_disabled() {
    let registry = registry();
    let media = registry.breakpoints().media_state(1024.0);

    let render = TabsTrigger::new("account")
        .size("$4")
        .disabled(true)
        .render_with_state(&registry, Some("light"), &media, &inline_state());

    // height 40, padding from the space table, radius = height / 4.
    assert_eq!(render.frame.split.style["height"], StyleValue::Number(40.0));
    assert_eq!(
        render.frame.split.style["paddingLeft"],
        StyleValue::Number(16.0)
    );
    assert_eq!(
        render.frame.split.style["borderRadius"],
        StyleValue::Number(10.0)
    );
    assert_eq!(
        render.frame.split.style["pointerEvents"],
        StyleValue::from("none")
    );
    assert_eq!(render.data_state, "inactive");
}

#[test]
fn button_themed_trigger_declares_interaction_borders() {
    let registry = registry();
    let media = registry.breakpoints().media_state(1024.0);

    let render = TabsTrigger::new("account")
        .button_theme(true)
        .render_with_state(&registry, Some("light"), &media, &inline_state());

    assert_eq!(
        render.frame.split.style["borderColor"],
        StyleValue::from("transparent")
    );
    assert_eq!(
        render.frame.split.pseudos.focus["borderColor"],
        StyleValue::from("var(--borderColorFocus)")
    );
    assert_eq!(
        render.frame.split.pseudos.hover["borderColor"],
        StyleValue::from("transparent")
    );
}

#[test]
fn selected_trigger_reports_active_state() {
    let registry = registry();
    let media = registry.breakpoints().media_state(1024.0);

    let render = TabsTrigger::new("account")
        .selected(true)
        .render(&registry, Some("light"), &media);

    assert_eq!(render.data_state, "active");
    assert_eq!(
        render.frame.split.view_props["data-state"],
        StyleValue::from("active")
    );
    assert_eq!(
        render.frame.split.view_props["id"],
        StyleValue::from("tabs-trigger-account")
    );
}
