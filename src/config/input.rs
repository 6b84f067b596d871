//! Input configuration options for fm
//!
//! This module defines the key bindings and the editor command which are read
//! from the fm.toml configuration file.

use serde::Deserialize;

/// Input configuration options of all actions
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Keys {
    open_file: Vec<String>,
    go_up: Vec<String>,
    go_down: Vec<String>,
    page_up: Vec<String>,
    page_down: Vec<String>,
    go_to_top: Vec<String>,
    go_to_bottom: Vec<String>,
    go_parent: Vec<String>,
    go_into_dir: Vec<String>,
    go_to_home: Vec<String>,
    refresh: Vec<String>,
    toggle_hidden: Vec<String>,
    command: Vec<String>,
    delete: Vec<String>,
    rename: Vec<String>,
    create: Vec<String>,
    create_directory: Vec<String>,
    mark_move: Vec<String>,
    commit_move: Vec<String>,
    cancel: Vec<String>,
    quit: Vec<String>,
}

/// Editor configuration options
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Editor {
    cmd: String,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(
    open_file,
    go_up,
    go_down,
    page_up,
    page_down,
    go_to_top,
    go_to_bottom,
    go_parent,
    go_into_dir,
    go_to_home,
    refresh,
    toggle_hidden,
    command,
    delete,
    rename,
    create,
    create_directory,
    mark_move,
    commit_move,
    cancel,
    quit,
);

/// Default input configuration options
impl Default for Keys {
    fn default() -> Self {
        Keys {
            open_file: vec!["Enter".into()],
            go_up: vec!["k".into(), "Up".into()],
            go_down: vec!["j".into(), "Down".into()],
            page_up: vec!["PageUp".into(), "Ctrl+u".into()],
            page_down: vec!["PageDown".into(), "Ctrl+d".into()],
            go_to_top: vec!["g".into(), "Home".into()],
            go_to_bottom: vec!["G".into(), "End".into()],
            go_parent: vec!["h".into(), "Left".into(), "Backspace".into()],
            go_into_dir: vec!["l".into(), "Right".into()],
            go_to_home: vec!["~".into()],
            refresh: vec!["Ctrl+r".into()],
            toggle_hidden: vec![".".into()],

            command: vec![":".into()],
            delete: vec!["d".into()],
            rename: vec!["r".into()],
            create: vec!["n".into()],
            create_directory: vec!["Shift+n".into()],
            mark_move: vec!["m".into()],
            commit_move: vec!["p".into()],

            cancel: vec!["Esc".into()],
            quit: vec!["q".into()],
        }
    }
}

/// Public methods for accessing editor configuration options
impl Editor {
    #[inline]
    pub fn cmd(&self) -> &str {
        let trimmed = self.cmd.trim();
        if trimmed.is_empty() { "vi" } else { trimmed }
    }
}

/// Default editor configuration options
///
/// Uses `$EDITOR` when set.
impl Default for Editor {
    fn default() -> Self {
        let cmd = std::env::var("EDITOR").unwrap_or_else(|_| "nvim".into());
        Editor { cmd }
    }
}
