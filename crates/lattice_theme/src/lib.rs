//! Lattice Theme System
//!
//! Design tokens, CSS variables, and the theme selector-rule generator.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Design tokens**: symbolic references (`$space.4`, `$color.primary`)
//!   resolved per category against the active theme
//! - **Variables**: stable hashed CSS custom-property names, so the same
//!   logical token always produces the same `--name` across builds
//! - **Themes and sub-themes**: `dark`, `light_blue`, `dark_Button` compose
//!   by name, with component-scoped themes overriding their base
//! - **Selector-rule generation**: the nested-specificity CSS that lets
//!   sub-themes win over base themes at any DOM nesting depth
//! - **TOML definitions**: declarative token/theme tables loaded at startup
//!
//! # Quick Start
//!
//! ```rust
//! use lattice_theme::{ThemeDefinition, resolve, TokenCategory, VariableAccess};
//! use lattice_core::StyleValue;
//!
//! let def = ThemeDefinition::from_toml_str(r##"
//!     [tokens.color]
//!     white = "#ffffff"
//!
//!     [themes.light]
//!     background = "$color.white"
//! "##).unwrap();
//! let (tokens, themes) = def.build().unwrap();
//!
//! let access = VariableAccess::default();
//! let theme = themes.get("light").unwrap();
//! let out = resolve(
//!     &StyleValue::from("$background"),
//!     TokenCategory::Color,
//!     Some(theme),
//!     &tokens,
//!     &access,
//! );
//! assert!(out.is_variable);
//! ```

pub mod css_rules;
pub mod definition;
pub mod hash;
pub mod resolve;
pub mod theme;
pub mod tokens;
pub mod variable;

pub use css_rules::{nesting_selectors, theme_css_rules};
pub use definition::{ThemeDefinition, ThemeError};
pub use hash::simple_hash;
pub use resolve::{resolve, resolve_literal, Resolved};
pub use theme::{Theme, ThemeConfig, Themes, THEME_CLASSNAME_PREFIX};
pub use tokens::{TokenCategory, Tokens};
pub use variable::{Variable, VariableAccess};
