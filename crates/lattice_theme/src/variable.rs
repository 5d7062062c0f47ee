//! CSS variables with build-stable identifiers

use std::sync::atomic::{AtomicBool, Ordering};

use lattice_core::StyleValue;

use crate::hash::simple_hash;

/// Length cap for hashed variable identifiers.
const VARIABLE_NAME_LEN: usize = 40;

/// A named holder for a token's resolved value, exposed as a CSS custom
/// property on web.
///
/// The identifier is derived deterministically from the creation key, so the
/// same logical token always yields the same `--name` across builds. Multiple
/// tokens may alias one variable; aliasing is tracked by value in
/// [`crate::Tokens`].
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    /// The logical key this variable was created for (`space-4`, `background`).
    pub key: String,
    /// Hashed identifier, without the `--` prefix.
    pub name: String,
    /// Current value.
    pub val: StyleValue,
}

impl Variable {
    pub fn new(key: impl Into<String>, val: impl Into<StyleValue>) -> Self {
        let key = key.into();
        let name = simple_hash(&key, VARIABLE_NAME_LEN);
        Self {
            key,
            name,
            val: val.into(),
        }
    }

    /// The custom-property declaration name, e.g. `--background`.
    pub fn css_name(&self) -> String {
        format!("--{}", self.name)
    }

    /// The CSS-level reference to this variable, e.g. `var(--background)`.
    ///
    /// This is what resolution emits instead of the literal value, so output
    /// stays live under theme changes rather than frozen to a resolve-time
    /// snapshot.
    pub fn reference(&self) -> String {
        format!("var(--{})", self.name)
    }
}

/// Pass-wide "did resolve a live variable" flag.
///
/// One coarse signal per style-split pass, not a per-property flag: the
/// splitter resets it at the start of a pass, the resolver marks it on any
/// live theme-variable hit, and the render layer reads it once at the end to
/// decide whether to resubscribe to theme changes.
#[derive(Debug, Default)]
pub struct VariableAccess(AtomicBool);

impl VariableAccess {
    /// Clear the flag at the start of a split pass.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Record that a live variable was resolved during this pass.
    pub fn mark(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether any live variable was resolved since the last reset.
    pub fn did_access(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
