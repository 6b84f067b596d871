//! The main config loading module for fm.
//!
//! Handles loading and deserializing settings from `fm.toml`.
//!
//! Provides and manages the main [Config] struct, as well as the internal [RawConfig] used for parsing.
//!
//! Also implements default config generation for `fm --init`.

use crate::config::{Display, Editor, General, Keys, Theme};
use crate::error::{FmError, FmResult};
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};

/// Env var pointing at a config file, checked before the XDG location.
pub const CONFIG_ENV: &str = "FM_CONFIG";

/// Raw configuration as read from the toml file
/// This struct is deserialized directly from the toml file.
/// It is then converted into the main [Config] struct.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
    theme: Theme,
    editor: Editor,
    keys: Keys,
}

/// Main configuration struct for fm
/// This struct holds the processed configuration options used by fm.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    general: General,
    display: Display,
    theme: Theme,
    editor: Editor,
    keys: Keys,
}

/// Conversion from RawConfig to Config
impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            display: raw.display,
            theme: raw.theme,
            editor: raw.editor,
            keys: raw.keys,
        }
    }
}

/// Public methods for loading and accessing the configuration
impl Config {
    /// Load configuration from the default path
    /// If the file does not exist or fails to parse, returns the default configuration.
    ///
    /// Called by entry point to load config at startup.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            eprintln!(
                "No fm.toml config file found. Using internal defaults. (Tip: run 'fm --init' to generate a config file.)"
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                Self::default()
            }
        }
    }

    /// Reads and parses the config file at `path`.
    pub fn load_from(path: &Path) -> FmResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| FmError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses config file contents.
    pub fn parse(content: &str) -> FmResult<Self> {
        let raw: RawConfig = toml::from_str(content)?;
        Ok(raw.into())
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Determine the default configuration file path.
    /// Checks the FM_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/fm/fm.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("fm/fm.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/fm/fm.toml");
        }
        PathBuf::from("fm.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}

const DEFAULT_TOML: &str = r##"# fm.toml - default configuration for fm

# Note:
# Commented values are the internal defaults of fm
# Use hex codes (eg. "#RRGGBB") or terminal colors ("cyan")

[general]
# dirs_first = true
# show_hidden = false
# case_insensitive = true
# move_to_trash = true
# Writes debug.log to the directory fm was started from.
# The filter can be changed with FM_LOG (eg. FM_LOG=fm_tui=trace).
# enable_logging = false
# enable_mouse_wheel = true

[display]
# icons = false
# selection_marker = true
# borders = "unified"       # "unified" or "none"
# border_shape = "square"   # "square", "rounded", "double" or "thick"

[theme]
# selection_icon = "> "

# [theme.selection]
# bg = "236"

# [theme.entry]
# fg = "default"
# bg = "default"

# [theme.directory]
# fg = "blue"

# [theme.accent]
# fg = "238"

# [theme.path]
# fg = "magenta"

# [theme.status_bar.selected_file]
# fg = "#ffffdf"
# bg = "#f25d94"

# [theme.status_bar.status]
# fg = "#ffffdf"
# bg = "#3c3836"

# [theme.status_bar.file_count]
# fg = "#ffffdf"
# bg = "#a550df"

# [theme.status_bar.logo]
# fg = "#ffffdf"
# bg = "#6124df"

# [editor]
# cmd = "nvim"

# [keys]
# open_file = ["Enter"]
# go_up = ["k", "Up"]
# go_down = ["j", "Down"]
# page_up = ["PageUp", "Ctrl+u"]
# page_down = ["PageDown", "Ctrl+d"]
# go_to_top = ["g", "Home"]
# go_to_bottom = ["G", "End"]
# go_parent = ["h", "Left", "Backspace"]
# go_into_dir = ["l", "Right"]
# go_to_home = ["~"]
# refresh = ["Ctrl+r"]
# toggle_hidden = ["."]
# command = [":"]
# delete = ["d"]
# rename = ["r"]
# create = ["n"]
# create_directory = ["Shift+n"]
# mark_move = ["m"]
# commit_move = ["p"]
# cancel = ["Esc"]
# quit = ["q"]
"##;
