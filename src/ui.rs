//! Terminal UI for fm.
//!
//! - [render]: the per-frame entry point and screen layout.
//! - [widgets]: status bar, pane block and placeholder helpers.
//! - [icons]: Nerd Font glyph lookup for entries.

pub mod icons;
pub mod render;
pub mod widgets;

pub use render::render;
