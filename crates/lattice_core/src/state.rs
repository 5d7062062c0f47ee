//! Interaction state and render-target platform

/// Target renderer for a style pass.
///
/// The web renderer can compile static style properties into CSS class
/// names; the native renderer always receives plain style objects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Platform {
    #[default]
    Web,
    Native,
}

/// Per-instance interaction flags, read by the splitter to decide which
/// pseudo-style blocks are currently active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InteractionState {
    pub hover: bool,
    pub press: bool,
    pub press_in: bool,
    pub focus: bool,
    pub unmounted: bool,
}

impl InteractionState {
    /// Initial state for components that animate in: still unmounted.
    pub const UNMOUNTED: Self = Self {
        hover: false,
        press: false,
        press_in: false,
        focus: false,
        unmounted: true,
    };

    /// Initial state for components mounted immediately.
    pub const MOUNTED: Self = Self {
        hover: false,
        press: false,
        press_in: false,
        focus: false,
        unmounted: false,
    };
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::MOUNTED
    }
}

/// The reserved pseudo-style namespaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PseudoState {
    Hover,
    Press,
    Focus,
    Enter,
    Exit,
}

impl PseudoState {
    /// Every pseudo state, in application order (later overrides earlier).
    pub const ALL: [PseudoState; 5] = [
        PseudoState::Hover,
        PseudoState::Press,
        PseudoState::Focus,
        PseudoState::Enter,
        PseudoState::Exit,
    ];

    /// The prop key this pseudo block is declared under.
    pub fn prop_key(self) -> &'static str {
        match self {
            Self::Hover => "hoverStyle",
            Self::Press => "pressStyle",
            Self::Focus => "focusStyle",
            Self::Enter => "enterStyle",
            Self::Exit => "exitStyle",
        }
    }

    /// Parse a prop key into a pseudo state.
    pub fn from_prop_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.prop_key() == key)
    }

    /// CSS selector suffix for class-based application.
    ///
    /// Enter/exit have no CSS equivalent; they are driven by mount state at
    /// runtime and never compile to classes.
    pub fn css_selector(self) -> Option<&'static str> {
        match self {
            Self::Hover => Some(":hover"),
            Self::Press => Some(":active"),
            Self::Focus => Some(":focus-visible"),
            Self::Enter | Self::Exit => None,
        }
    }

    /// Whether this pseudo block applies under the given interaction state.
    ///
    /// `is_exiting` is tracked by the caller (presence/unmount handling),
    /// not by the interaction flags.
    pub fn is_active(self, state: &InteractionState, is_exiting: bool) -> bool {
        match self {
            Self::Hover => state.hover,
            Self::Press => state.press,
            Self::Focus => state.focus,
            Self::Enter => state.unmounted,
            Self::Exit => is_exiting,
        }
    }
}
