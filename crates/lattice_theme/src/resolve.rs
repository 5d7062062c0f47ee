//! Token reference resolution

use lattice_core::StyleValue;

use crate::theme::Theme;
use crate::tokens::{TokenCategory, Tokens};
use crate::variable::VariableAccess;

/// Result of resolving one value.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    pub value: StyleValue,
    pub is_variable: bool,
}

impl Resolved {
    fn literal(value: StyleValue) -> Self {
        Self {
            value,
            is_variable: false,
        }
    }
}

/// Resolve a value against the active theme and token tables.
///
/// Lookup order:
/// 1. the active theme's own keys (`$background`, `$borderColorFocus`)
/// 2. an explicit category path (`$space.4`)
/// 3. the category table matching the style key being resolved (`$4`)
///
/// A recognized reference resolves to the variable's CSS-level reference
/// (`var(--name)`), not its literal value, so the output stays live under
/// theme changes. Unrecognized references and non-token values pass through
/// unchanged.
///
/// Resolving a theme variable marks `access` - the pass-wide signal that this
/// render depends on live theme state. Token-table hits do not mark: token
/// values are process-constant, only theme values change under a live swap.
pub fn resolve(
    value: &StyleValue,
    category: TokenCategory,
    theme: Option<&Theme>,
    tokens: &Tokens,
    access: &VariableAccess,
) -> Resolved {
    let Some(name) = token_name(value) else {
        return Resolved::literal(value.clone());
    };

    if let Some(theme) = theme {
        if let Some(variable) = theme.get(name) {
            access.mark();
            return Resolved {
                value: StyleValue::Str(variable.reference()),
                is_variable: true,
            };
        }
    }

    if let Some(variable) = tokens.resolve_ref(name, category) {
        return Resolved {
            value: StyleValue::Str(variable.reference()),
            is_variable: true,
        };
    }

    Resolved::literal(value.clone())
}

/// Resolve a reference to its literal value, for callers doing math on token
/// values (native layout, size variants). No liveness marking, no `var()`
/// indirection.
pub fn resolve_literal(
    value: &StyleValue,
    category: TokenCategory,
    theme: Option<&Theme>,
    tokens: &Tokens,
) -> StyleValue {
    let Some(name) = token_name(value) else {
        return value.clone();
    };

    if let Some(variable) = theme.and_then(|t| t.get(name)) {
        return variable.val.clone();
    }
    if let Some(variable) = tokens.resolve_ref(name, category) {
        return variable.val.clone();
    }
    value.clone()
}

fn token_name(value: &StyleValue) -> Option<&str> {
    match value {
        StyleValue::Str(s) => s.strip_prefix('$').filter(|rest| !rest.is_empty()),
        _ => None,
    }
}
