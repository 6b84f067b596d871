//! Core runtime logic for fm.
//!
//! This module contains the non-UI "engine" pieces used by the application:
//! - [fm]: directory listing and the [DirectoryProvider] seam (see [browse_dir], [FileEntry]).
//! - [formatter]: sorting, filtering and display formatting of entries.
//! - [worker]: background directory loads and file operations, reported back over channels.
//! - [terminal]: terminal setup/teardown and the main crossterm/ratatui event loop.

pub mod fm;
pub mod formatter;
pub mod terminal;
pub mod worker;

pub use fm::{DirectoryProvider, EntryMeta, FileEntry, LocalFs, browse_dir};
pub use formatter::{
    Formatter, format_attributes, format_file_size, sanitize_to_exact_width, truncate_with_tail,
};
pub use worker::{FileOperations, Workers};
