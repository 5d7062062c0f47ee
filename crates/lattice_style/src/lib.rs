//! Lattice Style Engine
//!
//! The per-render style pipeline: merged props go in, platform output comes
//! out - CSS class names on web, plain style objects on native.
//!
//! # Overview
//!
//! - **StaticConfig**: immutable per-component-type descriptor of accepted
//!   style keys, variants, and default props
//! - **Variants**: named mappings from a prop value to a partial style
//!   patch, literal or computed
//! - **Default-prop inheritance**: parent-chain merge with a process-wide
//!   memoized cache
//! - **Media resolution**: array-form and named-breakpoint responsive values
//! - **The splitter**: partitions resolved styles into static
//!   class-name-eligible properties, dynamic inline properties, and
//!   pseudo-state blocks
//!
//! # Quick Start
//!
//! ```rust
//! use lattice_core::{ElementKind, Props, StyleValue};
//! use lattice_style::{split_styles, RegistryConfig, RenderState, StaticConfig, StyleRegistry};
//!
//! let registry = StyleRegistry::new(RegistryConfig::default());
//! let config = StaticConfig::builder("Box").build();
//!
//! let mut props = Props::new();
//! props.insert("backgroundColor".into(), StyleValue::from("red"));
//!
//! let out = split_styles(
//!     &props,
//!     &config,
//!     None,
//!     &RenderState::default(),
//!     &registry.breakpoints().media_state(1024.0),
//!     &ElementKind::tag("div"),
//!     &registry,
//! );
//! assert_eq!(out.class_names.get("backgroundColor").unwrap(), "_backgroundColor-red");
//! ```

pub mod config;
pub mod default_props;
pub mod media;
pub mod props;
pub mod registry;
pub mod split;

pub use config::{
    StaticConfig, StaticConfigBuilder, Variant, VariantContext, VariantDefinition, VariantFn,
};
pub use default_props::merged_default_props;
pub use media::{Breakpoints, HasMedia, MediaState};
pub use props::{merge_props, Shorthands};
pub use registry::{RegistryConfig, StyleRegistry};
pub use split::{
    component_class_name, font_class_name, split_styles, PseudoStyles, RenderState, SplitStyles,
};
