//! Theme rule generation, verified by simulating CSS cascade resolution
//! against the generated selector strings.

use lattice_core::StyleValue;
use lattice_theme::{
    theme_css_rules, Theme, ThemeConfig, ThemeDefinition, Themes, Tokens, Variable,
};

fn build(def: &str) -> (Tokens, Themes) {
    ThemeDefinition::from_toml_str(def)
        .expect("definition parses")
        .build()
        .expect("definition builds")
}

fn rules_for(
    config: &ThemeConfig,
    themes: &Themes,
    tokens: &Tokens,
    name: &str,
) -> Vec<String> {
    theme_css_rules(
        config,
        themes,
        name,
        themes.get(name).expect("theme exists"),
        &[name.to_string()],
        tokens,
    )
}

// ---------------------------------------------------------------------------
// Minimal cascade simulator: descendant matching over class lists, class-level
// specificity, later rule wins at equal specificity, custom properties
// inherit from the nearest matched ancestor.
// ---------------------------------------------------------------------------

const ROOT: &str = "__root__";

struct Sheet {
    // (selector, declaration block, rule order)
    entries: Vec<(String, String, usize)>,
}

impl Sheet {
    fn new(rule_sets: &[String]) -> Self {
        let mut entries = Vec::new();
        for (order, rule) in rule_sets.iter().enumerate() {
            // Top-level rules only; @media blocks are for no-JS fallback and
            // excluded from the cascade check.
            if rule.starts_with("@media") {
                continue;
            }
            let (selectors, block) = rule.split_once(" {").expect("rule shape");
            let block = block.trim_end_matches('}').to_string();
            for selector in selectors.split(", ") {
                entries.push((selector.to_string(), block.clone(), order));
            }
        }
        Self { entries }
    }

    /// The winning declaration block for `path` (root-first class lists), or
    /// the nearest ancestor's, mimicking custom-property inheritance.
    fn resolve(&self, path: &[Vec<&str>]) -> Option<String> {
        for end in (1..=path.len()).rev() {
            let scope = &path[..end];
            let mut best: Option<(usize, usize, &str)> = None;
            for (selector, block, order) in &self.entries {
                if !matches(selector, scope) {
                    continue;
                }
                let key = (specificity(selector), *order, block.as_str());
                if best.map_or(true, |b| (key.0, key.1) >= (b.0, b.1)) {
                    best = Some(key);
                }
            }
            if let Some((_, _, block)) = best {
                return Some(block.to_string());
            }
        }
        None
    }
}

fn compound_matches(compound: &str, classes: &[&str]) -> bool {
    let mut rest = compound;
    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix(":root") {
            if !classes.contains(&ROOT) {
                return false;
            }
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix('.') {
            let end = tail
                .find(|c| c == '.' || c == ':')
                .unwrap_or(tail.len());
            if !classes.contains(&&tail[..end]) {
                return false;
            }
            rest = &tail[end..];
        } else {
            return false;
        }
    }
    true
}

fn matches(selector: &str, path: &[Vec<&str>]) -> bool {
    let compounds: Vec<&str> = selector.split_whitespace().collect();
    let (target, ancestors) = match path.split_last() {
        Some(split) => split,
        None => return false,
    };
    let (last, outer) = match compounds.split_last() {
        Some(split) => split,
        None => return false,
    };
    if !compound_matches(last, &target.iter().copied().collect::<Vec<_>>()) {
        return false;
    }
    // Each remaining compound must match successively deeper ancestors.
    let mut from = 0;
    for compound in outer {
        let mut found = false;
        for (i, element) in ancestors.iter().enumerate().skip(from) {
            if compound_matches(compound, &element.iter().copied().collect::<Vec<_>>()) {
                from = i + 1;
                found = true;
                break;
            }
        }
        if !found {
            return false;
        }
    }
    true
}

fn specificity(selector: &str) -> usize {
    selector.matches(":root").count() + selector.matches('.').count()
}

// ---------------------------------------------------------------------------

const THREE_THEMES: &str = r##"
    [themes.light]
    background = "#ffffff"
    color = "#111111"

    [themes.dark]
    background = "#111111"
    color = "#ffffff"

    [themes.dark_Button]
    background = "#333333"
    color = "#ffffff"
"##;

#[test]
fn sub_theme_wins_three_levels_deep() {
    let (tokens, themes) = build(THREE_THEMES);
    let config = ThemeConfig::default();

    let mut sheet_rules = Vec::new();
    for name in ["light", "dark", "dark_Button"] {
        sheet_rules.extend(rules_for(&config, &themes, &tokens, name));
    }
    let sheet = Sheet::new(&sheet_rules);

    // html > .t_dark > .t_light > .t_dark > button.t_Button
    let button_path = vec![
        vec![ROOT],
        vec!["t_dark"],
        vec!["t_light"],
        vec!["t_dark"],
        vec!["t_Button"],
    ];
    let block = sheet.resolve(&button_path).expect("button resolves a rule");
    assert!(
        block.contains("--background:#333333;"),
        "dark_Button variables must win at depth 3, got: {block}"
    );

    // A plain element under the innermost dark provider resolves dark.
    let plain_path = vec![
        vec![ROOT],
        vec!["t_dark"],
        vec!["t_light"],
        vec!["t_dark"],
        vec![],
    ];
    let block = sheet.resolve(&plain_path).expect("plain element inherits");
    assert!(
        block.contains("--background:#111111;"),
        "innermost dark provider must win, got: {block}"
    );

    // One level shallower, light wins.
    let light_path = vec![vec![ROOT], vec!["t_dark"], vec!["t_light"], vec![]];
    let block = sheet.resolve(&light_path).expect("light element inherits");
    assert!(block.contains("--background:#ffffff;"));
}

#[test]
fn ladder_selectors_reach_configured_depth() {
    let (tokens, themes) = build(THREE_THEMES);
    let config = ThemeConfig::default();

    let rules = rules_for(&config, &themes, &tokens, "dark_Button");
    let base_rule = &rules[0];

    assert!(base_rule.contains(":root .t_dark_Button"));
    assert!(base_rule.contains(":root .t_dark .t_Button"));
    assert!(base_rule.contains(":root .t_light .t_dark .t_Button"));
    // Odd-depth reorder at depth 3.
    assert!(base_rule.contains(":root .t_dark .t_light .t_dark .t_Button"));
}

#[test]
fn theme_root_names_get_double_root_selector() {
    let (tokens, themes) = build(
        r##"
        [themes.light]
        background = "#ffffff"

        [themes.dark]
        background = "#111111"

        [themes.blue]
        background = "#0000ff"
    "##,
    );
    let config = ThemeConfig::default();

    let rules = rules_for(&config, &themes, &tokens, "blue");
    assert!(rules[0].contains(":root:root .t_blue"));
}

#[test]
fn without_dark_light_rules_are_flat() {
    let (tokens, themes) = build(
        r##"
        [themes.corporate]
        background = "#fafafa"
    "##,
    );
    let config = ThemeConfig::default();

    let rules = rules_for(&config, &themes, &tokens, "corporate");
    assert_eq!(
        rules[0],
        ":root .t_corporate {--background:#fafafa;}".to_string()
    );
}

#[test]
fn token_aliased_values_emit_variable_references() {
    let (tokens, themes) = build(
        r##"
        [tokens.color]
        white = "#ffffff"

        [themes.light]
        background = "$color.white"
    "##,
    );
    let config = ThemeConfig {
        should_add_prefers_color_themes: false,
        ..ThemeConfig::default()
    };

    let rules = rules_for(&config, &themes, &tokens, "light");
    assert!(
        rules[0].contains("--background:var(--color-white);"),
        "aliased theme values must stay live: {}",
        rules[0]
    );
}

#[test]
fn prefers_color_scheme_block_carries_body_rule() {
    let (tokens, themes) = build(THREE_THEMES);
    let config = ThemeConfig::default();

    let rules = rules_for(&config, &themes, &tokens, "dark");
    assert_eq!(rules.len(), 2);
    let media = &rules[1];
    assert!(media.starts_with("@media(prefers-color-scheme:dark){"));
    assert!(media.contains("body{background:var(--background);color:var(--color);}"));
    // Base dark selector drops to :root inside the media block.
    assert!(media.contains(":root {") || media.contains(":root,") || media.contains(":root "));
}

#[test]
fn generation_is_deterministic() {
    let (tokens, themes) = build(THREE_THEMES);
    let config = ThemeConfig::default();

    let a = rules_for(&config, &themes, &tokens, "dark_Button");
    let b = rules_for(&config, &themes, &tokens, "dark_Button");
    assert_eq!(a, b);
}

#[test]
fn missing_theme_resolves_to_empty_variable_block() {
    // An empty theme is a valid input; rule generation proceeds with an
    // empty declaration block rather than failing.
    let (tokens, themes) = build(THREE_THEMES);
    let config = ThemeConfig {
        should_add_prefers_color_themes: false,
        ..ThemeConfig::default()
    };
    let empty = Theme::new("ghost");
    let rules = theme_css_rules(
        &config,
        &themes,
        "ghost",
        &empty,
        &["ghost".to_string()],
        &tokens,
    );
    assert_eq!(rules[0], ":root .t_ghost, :root :root:root .t_ghost {}");
}

#[test]
fn variables_round_trip_through_theme_map() {
    let mut theme = Theme::new("light");
    theme.insert("accent", Variable::new("accent", StyleValue::from("#00ff00")));
    assert_eq!(
        theme.get("accent").unwrap().reference(),
        "var(--accent)"
    );
}
