//! # physicalc-tui
//!
//! Interactive slider dashboard using ratatui with Elm architecture. The
//! app model owns all authoritative input values; the slider widgets are
//! fully controlled and only propose new values.

pub mod footer;
pub mod format;
pub mod header;
pub mod keymap;
pub mod model;
pub mod results;
pub mod slider;
pub mod styles;

pub use keymap::{map_key, KeyAction};
pub use model::PlannerApp;
pub use slider::SliderState;
