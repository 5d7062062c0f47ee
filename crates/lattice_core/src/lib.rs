//! Lattice Core Value Model
//!
//! This crate provides the foundational value types shared by the Lattice
//! styling engine:
//!
//! - **Style values**: a tagged scalar/list/map union covering every prop
//!   shape the engine accepts (literals, token references, responsive
//!   arrays, pseudo-style blocks)
//! - **Ordered maps**: insertion-order-preserving prop and style maps, since
//!   merge correctness depends on declaration order
//! - **Interaction state**: the hover/press/focus flags a render pass
//!   resolves pseudo styles against
//!
//! # Example
//!
//! ```rust
//! use lattice_core::{Props, StyleValue};
//!
//! let mut props = Props::new();
//! props.insert("backgroundColor".into(), StyleValue::from("$color.primary"));
//! props.insert("width".into(), StyleValue::from(200.0));
//!
//! // Later writes win on shared keys, earlier insertion order is kept.
//! props.insert("backgroundColor".into(), StyleValue::from("red"));
//! assert_eq!(props.get_index(0).unwrap().0, "backgroundColor");
//! ```

pub mod element;
pub mod state;
pub mod value;

pub use element::ElementKind;
pub use state::{InteractionState, Platform, PseudoState};
pub use value::{Props, StyleMap, StyleValue};
