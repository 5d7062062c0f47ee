//! Concrete element targets for a render pass

use std::borrow::Cow;

/// The element a component resolves to for one render.
///
/// Plain tags (`div`, `button`, `span`) can carry class names on the web
/// renderer. Opaque component references cannot be assumed to forward a
/// `className`, so styles for them always stay inline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// A platform tag name.
    Tag(Cow<'static, str>),
    /// A wrapped component, identified by name for diagnostics.
    Component(Cow<'static, str>),
}

impl ElementKind {
    pub fn tag(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Tag(name.into())
    }

    pub fn component(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Component(name.into())
    }

    /// Whether the element is a plain tag that accepts a class attribute.
    pub fn accepts_class_name(&self) -> bool {
        matches!(self, Self::Tag(_))
    }

    /// Display name for logs.
    pub fn name(&self) -> &str {
        match self {
            Self::Tag(name) | Self::Component(name) => name,
        }
    }
}

impl Default for ElementKind {
    fn default() -> Self {
        Self::Tag(Cow::Borrowed("div"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_tags_accept_class_names() {
        assert!(ElementKind::tag("button").accepts_class_name());
        assert!(!ElementKind::component("AnimatedView").accepts_class_name());
    }
}
