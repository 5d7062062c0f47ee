//! Lattice Styled Primitives
//!
//! Switch and Tabs, expressed as *style frames*: static configurations plus
//! builders that run the style engine and return split-style output. Event
//! wiring, focus management, and accessibility semantics belong to the host
//! component layer; this crate owns what the primitives look like.
//!
//! # Example
//!
//! ```rust
//! use lattice_style::{RegistryConfig, StyleRegistry};
//! use lattice_ui::Switch;
//!
//! let registry = StyleRegistry::new(RegistryConfig::default());
//! let media = registry.breakpoints().media_state(1024.0);
//!
//! let render = Switch::new().checked(true).render(&registry, None, &media);
//! assert_eq!(render.data_state, "checked");
//! assert!(render.frame.class_list.contains(&"is_Switch".to_string()));
//! ```

pub mod frame;
pub mod sizing;
pub mod switch;
pub mod tabs;

pub use frame::{render_frame, FrameRender};
pub use sizing::{button_sized, size_value, switch_height, switch_width};
pub use switch::{switch_frame_config, switch_thumb_config, Switch, SwitchRender};
pub use tabs::{
    tabs_content_config, tabs_frame_config, tabs_list_config, tabs_trigger_config, Tabs,
    TabsOrientation, TabsRender, TabsTrigger, TabsTriggerRender,
};
