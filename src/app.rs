//! Application state and navigation for fm.
//!
//! - [cursor], [viewport] and [scroll]: value types for the selection and the visible
//!   window, and the reconciliation that keeps them consistent.
//! - [nav]: the listing of the current directory with its cursor and viewport.
//! - [command]: the command bar mini-language.
//! - [move_mode]: the mark-then-move state machine.
//! - [status]: derivation of the status bar.
//! - [actions], [keymap], [handlers] and [state]: input handling around [AppState].

pub mod actions;
pub mod command;
pub mod cursor;
pub mod handlers;
pub mod keymap;
pub mod move_mode;
pub mod nav;
pub mod scroll;
pub mod state;
pub mod status;
pub mod viewport;

pub use cursor::Cursor;
pub use move_mode::{MoveItem, MoveState};
pub use nav::NavState;
pub use state::{AppState, KeypressResult};
pub use status::{StatusLine, StatusText};
pub use viewport::Viewport;
