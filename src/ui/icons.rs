//! Nerd Font glyphs for directory rows and the status bar logo.
//!
//! Lookups go by exact file name first, then by extension. Extensions are
//! matched case-insensitively.

use crate::core::FileEntry;

use phf::phf_map;

/// Glyph for directories, also used by the status bar logo.
pub const DIR_ICON: &str = "\u{e5ff}";
pub const FILE_ICON: &str = "\u{f0f6}";
pub const SYMLINK_DIR_ICON: &str = "\u{f482}";
pub const SYMLINK_FILE_ICON: &str = "\u{f481}";

/// File extension to icon mapping
static EXT_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "rs" => "\u{e7a8}",
    "py" => "\u{e606}",
    "js" => "\u{e74e}",
    "ts" => "\u{e628}",
    "md" => "\u{f48a}",
    "html" => "\u{e736}",
    "css" => "\u{e749}",
    "json" => "\u{e60b}",
    "toml" => "\u{e615}",
    "yml" => "\u{e615}",
    "yaml" => "\u{e615}",
    "ini" => "\u{e615}",
    "sh" => "\u{e795}",
    "go" => "\u{e627}",
    "c" => "\u{e61e}",
    "cpp" => "\u{e61d}",
    "h" => "\u{f0fd}",
    "lua" => "\u{e620}",
    "lock" => "\u{f023}",
    "zip" => "\u{f1c6}",
    "tar" => "\u{f1c6}",
    "gz" => "\u{f1c6}",
    "mp3" => "\u{f001}",
    "mp4" => "\u{f008}",
    "png" => "\u{f03e}",
    "jpg" => "\u{f03e}",
    "jpeg" => "\u{f03e}",
    "gif" => "\u{f03e}",
    "svg" => "\u{f03e}",
    "pdf" => "\u{f1c1}",
    "txt" => "\u{f0f6}",
    "log" => "\u{f1ea}",
};

/// Special file names
static SPECIAL_FILE_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "Cargo.toml" => "\u{e7a8}",
    "Cargo.lock" => "\u{f023}",
    "Makefile" => "\u{e779}",
    "Dockerfile" => "\u{e7b0}",
    "LICENSE" => "\u{f02d}",
    "README.md" => "\u{f48a}",
    ".gitignore" => "\u{e702}",
};

/// Returns the glyph drawn in front of `entry` when icons are enabled.
pub fn nerd_font_icon(entry: &FileEntry) -> &'static str {
    if entry.is_symlink() {
        return if entry.is_dir() {
            SYMLINK_DIR_ICON
        } else {
            SYMLINK_FILE_ICON
        };
    }
    if entry.is_dir() {
        return DIR_ICON;
    }

    let name = entry.name_str();
    if let Some(icon) = SPECIAL_FILE_ICON_MAP.get(name.as_ref()) {
        return icon;
    }

    if let Some(dot_idx) = name.rfind('.')
        && dot_idx > 0
        && dot_idx < name.len() - 1
    {
        let ext = &name[dot_idx + 1..];
        if let Some(icon) = EXT_ICON_MAP.get(ext) {
            return icon;
        }
        if let Some(icon) = EXT_ICON_MAP.get(ext.to_ascii_lowercase().as_str()) {
            return icon;
        }
    }

    FILE_ICON
}
