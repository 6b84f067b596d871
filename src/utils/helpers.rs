//! Helpers for fm.
//!
//! Utility functions used throughout fm:
//! - Color parsing from strings, hex codes or palette indices
//! - Opening a file in the user's chosen editor
//! - Generating unused filenames to prevent accidental overwrite
//! - Displaying home directories as "~" in file paths and expanding them back
//! - Recursive copy for moves across filesystems

use crate::config::Editor;

use ratatui::style::Color;
use tracing::debug;

use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use std::{fs, io};

/// Parses a string (color name, hex or palette index) into a ratatui::style::color
///
/// Supports standard names (red, green, etc.), hex values (#RRGGBB or #RGB)
/// and 256-color palette indices ("236").
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        _ => {
            if let Ok(index) = s.parse::<u8>() {
                return Color::Indexed(index);
            }
            if let Some(color) = s.strip_prefix('#') {
                let expanded = match color.len() {
                    6 => color.to_string(),
                    3 => color.chars().flat_map(|c| [c, c]).collect(),
                    _ => String::new(),
                };
                if let Ok(rgb) = u32::from_str_radix(&expanded, 16) {
                    return Color::Rgb(
                        ((rgb >> 16) & 0xFF) as u8,
                        ((rgb >> 8) & 0xFF) as u8,
                        (rgb & 0xFF) as u8,
                    );
                }
            }
            // fallback
            Color::Reset
        }
    }
}

/// Opens a specified file in the configured editor ("nvim" or "vim" etc.).
///
/// Temporary disables raw mode and exits alternate sceen while the editor runs.
/// On return, restores raw mode and alternate sceen.
pub fn open_in_editor(editor: &Editor, file_path: &Path) -> io::Result<()> {
    use crossterm::{
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    };

    debug!(editor = editor.cmd(), path = %file_path.display(), "opening editor");
    let mut stdout = io::stdout();
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    let status = std::process::Command::new(editor.cmd())
        .arg(file_path)
        .status();

    execute!(io::stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;
    status.map(|_| ())
}

/// Finds the next available filename by appending _1, _2, etc. if the target exists
///
/// Example: "notes.txt" -> "notes_1.txt"
pub fn get_unused_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let name = path.file_name().unwrap_or_default();

    let stem = Path::new(name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let ext = Path::new(name)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut counter = 1;
    loop {
        let target = parent.join(format!("{}_{}{}", stem, counter, ext));
        if !target.exists() {
            return target;
        }
        counter += 1;
    }
}

pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Shortens the home directory prefix of `path` to "~".
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = get_home()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~{}{}", MAIN_SEPARATOR, stripped.display());
    }
    path.display().to_string()
}

/// Expands a leading "~" to the home directory. Other paths are returned as given.
pub fn expand_home_path(input: &str) -> PathBuf {
    let rest = match input.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', MAIN_SEPARATOR]) => rest,
        _ => return PathBuf::from(input),
    };
    match get_home() {
        Some(home) => home.join(rest.trim_start_matches(['/', MAIN_SEPARATOR])),
        None => PathBuf::from(input),
    }
}

/// Resolves a user-supplied directory against `base`.
///
/// Expands "~", joins relative paths onto `base` and canonicalizes when possible.
pub fn resolve_dir(input: &str, base: &Path) -> PathBuf {
    let expanded = expand_home_path(input);
    let joined = if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    };
    fs::canonicalize(&joined).unwrap_or(joined)
}

/// True when `name` is a single path component naming an entry in its directory.
///
/// Rejects "", "." and "..", and anything containing a separator.
pub fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', MAIN_SEPARATOR])
}

/// Recursively copies files and directories from `src` to `dest`.
///
/// If `src` is a directory, it creates the directory at `dest` and copies all its contents recursively.
pub fn copy_recursive(src: &Path, dest: &Path) -> io::Result<()> {
    if src.is_dir() {
        fs::create_dir_all(dest)?;
        for entry in fs::read_dir(src)? {
            let entry = entry?;
            copy_recursive(&entry.path(), &dest.join(entry.file_name()))?;
        }
    } else {
        fs::copy(src, dest)?;
    }
    Ok(())
}

/// Helper utils integration tests
#[cfg(test)]
mod tests {
    use super::*;

    use std::error;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_path_collision_increments() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("data.csv");

        assert_eq!(get_unused_path(&path), path);

        File::create(&path)?;
        assert_eq!(get_unused_path(&path), dir.path().join("data_1.csv"));

        File::create(dir.path().join("data_1.csv"))?;
        assert_eq!(get_unused_path(&path), dir.path().join("data_2.csv"));
        Ok(())
    }

    #[test]
    fn test_get_unused_path_hidden_file() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let dot_file = dir.path().join(".gitignore");

        File::create(&dot_file)?;
        let path = get_unused_path(&dot_file);

        let fname = path
            .file_name()
            .ok_or("No file name in path")?
            .to_str()
            .ok_or("File name not valid UTF-8")?;
        assert_eq!(fname, ".gitignore_1");
        Ok(())
    }

    #[test]
    fn test_get_unused_path_no_extension() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let folder_path = dir.path().join("my_folder");

        fs::create_dir(&folder_path)?;
        assert_eq!(get_unused_path(&folder_path), dir.path().join("my_folder_1"));
        Ok(())
    }

    #[test]
    fn test_parse_color_forms() {
        assert_eq!(parse_color("Cyan"), Color::Cyan);
        assert_eq!(parse_color("#ff8000"), Color::Rgb(255, 128, 0));
        assert_eq!(parse_color("#f80"), Color::Rgb(255, 136, 0));
        assert_eq!(parse_color("236"), Color::Indexed(236));
        assert_eq!(parse_color("#12"), Color::Reset);
        assert_eq!(parse_color("not-a-color"), Color::Reset);
    }

    #[test]
    fn test_home_shortening_round_trip() -> Result<(), Box<dyn error::Error>> {
        let Some(home) = get_home() else {
            return Ok(());
        };
        let inside = home.join("projects").join("fm");
        let short = shorten_home_path(&inside);
        assert!(short.starts_with('~'), "got {short}");
        assert_eq!(expand_home_path(&short), inside);
        assert_eq!(expand_home_path("~"), home);
        assert_eq!(shorten_home_path(&home), "~");
        Ok(())
    }

    #[test]
    fn test_expand_leaves_other_paths() {
        assert_eq!(expand_home_path("~user/x"), PathBuf::from("~user/x"));
        assert_eq!(expand_home_path("rel/dir"), PathBuf::from("rel/dir"));
    }

    #[test]
    fn test_resolve_dir_relative_and_absolute() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("child"))?;
        let base = fs::canonicalize(dir.path())?;

        assert_eq!(resolve_dir("child", &base), base.join("child"));
        assert_eq!(resolve_dir("child/..", &base), base);
        let abs = base.join("child");
        assert_eq!(resolve_dir(&abs.to_string_lossy(), Path::new("/")), abs);
        Ok(())
    }

    #[test]
    fn test_plain_names_only() {
        for ok in ["notes.txt", ".hidden", "a b", "..."] {
            assert!(is_plain_name(ok), "{ok} should be accepted");
        }
        for bad in ["", ".", "..", "../x", "a/b", "/abs"] {
            assert!(!is_plain_name(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_copy_recursive_tree() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("nested"))?;
        fs::write(src.join("a.txt"), "a")?;
        fs::write(src.join("nested/b.txt"), "b")?;

        let dest = dir.path().join("dest");
        copy_recursive(&src, &dest)?;
        assert_eq!(fs::read_to_string(dest.join("a.txt"))?, "a");
        assert_eq!(fs::read_to_string(dest.join("nested/b.txt"))?, "b");
        Ok(())
    }
}
