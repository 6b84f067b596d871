//! Configuration for fm.
//!
//! Settings are read once at startup from `fm.toml` (see [load]) and are
//! never mutated while the terminal is running.
//!
//! - [general]: listing preferences, trash, logging and mouse switches.
//! - [display]: icons, selection marker and borders.
//! - [theme]: color pairs for the list pane and the four status bar columns.
//! - [input]: key bindings and the editor command.

pub mod display;
pub mod general;
pub mod input;
pub mod load;
pub mod theme;

pub use display::Display;
pub use general::General;
pub use input::{Editor, Keys};
pub use load::{Config, RawConfig};
pub use theme::{ColorPair, StatusBarTheme, Theme};
