//! Input-driven navigation for retained-mode UI elements.
//!
//! Style/theme loading and the platform input plumbing live outside this
//! crate; this module is the dispatch core that turns already-decoded
//! navigation inputs and hotkeys into element highlights.

pub mod navigation;

pub use navigation::{NavigationInput, UiNavigation};
