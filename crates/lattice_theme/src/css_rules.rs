//! Theme selector-rule generation
//!
//! Component-scoped sub-themes (`dark_Button`) must override the general
//! theme (`dark`) regardless of how deeply theme-providing wrappers nest in
//! the DOM. A single selector cannot guarantee that cascade order, so rule
//! generation emits a family of selectors at increasing nesting depth: the
//! innermost applicable rule wins for any provider arrangement up to the
//! configured depth.
//!
//! Everything here is pure and deterministic over its inputs, and safe to
//! memoize by `(theme name, theme contents, names, config)`.

use indexmap::IndexSet;
use smallvec::SmallVec;

use crate::hash::simple_hash;
use crate::theme::{Theme, ThemeConfig, Themes, THEME_CLASSNAME_PREFIX};
use crate::tokens::Tokens;

const DARK_SELECTOR: &str = ".t_dark";
const LIGHT_SELECTOR: &str = ".t_light";

/// One ancestor chain of theme class selectors, innermost last.
pub type SelectorChain = SmallVec<[String; 4]>;

/// The alternating stronger/weaker ancestor chains for one light/dark
/// ladder, up to `round(max_depth * 1.5)` levels deep.
///
/// The branching here models light-inside-dark-inside-light nesting and is
/// the most bug-prone part of rule generation, so it is kept as a pure
/// function and pinned directly by tests:
/// - even depths chain strictly alternating ancestors
/// - odd depths of 3 or more drop the leading ancestor and repeat the second
///   at the end, modeling re-entry into the outer scheme
/// - odd depths below 3 are skipped; generated CSS depends on this exact
///   behavior, so it is preserved as-is and pinned by a test oracle
pub fn nesting_selectors(stronger: &str, weaker: &str, max_depth: usize) -> Vec<SelectorChain> {
    let num_selectors = ((max_depth as f32) * 1.5).round() as usize;
    let mut chains = Vec::new();

    for depth in 0..num_selectors {
        let is_odd = depth % 2 == 1;
        if is_odd && depth < 3 {
            continue;
        }

        let parents: Vec<String> = (0..=depth)
            .map(|psi| {
                let name = if psi % 2 == 0 { stronger } else { weaker };
                format!(".{THEME_CLASSNAME_PREFIX}{name}")
            })
            .collect();

        let mut chain: Vec<String> = if parents.len() > 1 {
            parents[1..].to_vec()
        } else {
            parents
        };

        if is_odd {
            let second = chain[1].clone();
            let mut reordered: Vec<String> = chain[1..].to_vec();
            reordered.push(second);
            chain = reordered;
        }

        chains.push(SelectorChain::from_vec(chain));
    }

    chains
}

/// Generate the CSS rule blocks for one theme.
///
/// `names` are the class names the theme answers to (a theme may have
/// aliases). Output order matters: rules are injected in generation order and
/// later rules must be able to override earlier ones at equal specificity.
pub fn theme_css_rules(
    config: &ThemeConfig,
    themes: &Themes,
    theme_name: &str,
    theme: &Theme,
    names: &[String],
    tokens: &Tokens,
) -> Vec<String> {
    let mut rule_sets = Vec::new();
    let has_dark_light = themes.has_dark_light();
    let cnp = format!(".{THEME_CLASSNAME_PREFIX}");

    // Variable declaration block. Values that alias a token resolve to that
    // token's variable reference so inheritance stays live.
    let mut vars = String::new();
    for (key, variable) in theme.iter() {
        let value = match tokens.lookup_alias(&variable.val) {
            Some(alias) => alias.reference(),
            None => variable.val.css_text(),
        };
        vars.push_str(&format!("--{}:{};", simple_hash(key, 40), value));
    }

    let is_dark_or_light_base = theme_name == "dark" || theme_name == "light";

    let mut selectors: IndexSet<String> = names.iter().map(|name| format!("{cnp}{name}")).collect();

    // Class names do not encode dark/light, so sub-theme precedence is a
    // specificity war; only fought when both base schemes exist.
    if has_dark_light {
        for sub_name in names {
            let is_dark = theme_name == "dark" || sub_name.starts_with("dark_");

            if !(is_dark || sub_name.starts_with("light_")) {
                // Theme-root name: one :root:root selector outranks every
                // light/dark ladder selector generated below.
                selectors.insert(format!(":root:root {cnp}{sub_name}"));
                continue;
            }

            let scheme_prefix = if is_dark { "dark_" } else { "light_" };
            let child_selector = format!("{cnp}{}", sub_name.replacen(scheme_prefix, "", 1));

            let orders: [[&str; 2]; 2] = [
                if is_dark {
                    ["dark", "light"]
                } else {
                    ["light", "dark"]
                },
                if is_dark {
                    ["dark", "sub_theme"]
                } else {
                    ["light", "sub_theme"]
                },
            ];

            for order in orders {
                let [mut stronger, mut weaker] = order;
                if is_dark_or_light_base {
                    std::mem::swap(&mut stronger, &mut weaker);
                }

                for chain in nesting_selectors(stronger, weaker, config.max_dark_light_nesting) {
                    let last_parent = chain.last().map(String::as_str).unwrap_or("");
                    let next_child = if child_selector == last_parent {
                        ""
                    } else {
                        child_selector.as_str()
                    };
                    let joined = chain.join(" ");
                    selectors.insert(format!("{joined} {next_child}").trim().to_string());
                }
            }
        }
    }

    let selectors_string = selectors
        .iter()
        .map(|x| {
            let root_sep = if is_base_theme(x) && config.theme_class_name_on_root {
                ""
            } else {
                " "
            };
            format!(":root{root_sep}{x}")
        })
        .collect::<Vec<_>>()
        .join(", ");

    rule_sets.push(format!("{selectors_string} {{{vars}}}"));

    // SSR / no-JS fallback: the same variables at reduced specificity inside
    // a prefers-color-scheme block, plus a body color rule.
    if config.should_add_prefers_color_themes {
        let body_rules = match (theme.get("background"), theme.get("color")) {
            (Some(bg), Some(fg)) => {
                format!("body{{background:{};color:{};}}", bg.reference(), fg.reference())
            }
            _ => String::new(),
        };
        let base_name = if theme_name.starts_with("dark") {
            "dark"
        } else {
            "light"
        };
        let less_specific_selectors = selectors
            .iter()
            .filter_map(|x| {
                if x == DARK_SELECTOR || x == LIGHT_SELECTOR {
                    return Some(":root".to_string());
                }
                let stripped = x
                    .strip_prefix(".t_dark ")
                    .or_else(|| x.strip_prefix(".t_light "))
                    .unwrap_or(x)
                    .trim()
                    .to_string();
                (!stripped.is_empty()).then_some(stripped)
            })
            .collect::<Vec<_>>()
            .join(", ");
        let theme_rules = format!("{less_specific_selectors} {{{vars}}}");
        rule_sets.push(format!(
            "@media(prefers-color-scheme:{base_name}){{\n  {body_rules}\n  {theme_rules}\n}}"
        ));
    }

    rule_sets
}

fn is_base_theme(selector: &str) -> bool {
    selector == DARK_SELECTOR
        || selector == LIGHT_SELECTOR
        || selector.starts_with(".t_dark ")
        || selector.starts_with(".t_light ")
}
