//! Miscellaneous utility functions for fm.
//!
//! - [cli]: argument parsing and help output.
//! - [helpers]: color parsing, editor launching, unused path generation and
//!   "~" shortening/expansion used by the status line and the `cd` command.

pub mod cli;
pub mod helpers;

pub use helpers::{
    copy_recursive, expand_home_path, get_home, get_unused_path, is_plain_name, open_in_editor,
    parse_color, resolve_dir, shorten_home_path,
};
