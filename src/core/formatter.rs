//! Sorting, filtering, and display formatting for file entries in fm.
//!
//! The [Formatter] struct holds the rules for sorting and filtering entries,
//! based on user preferences from the fm.toml configuration.
//!
//! Also formats sizes and permission strings for the status line, and fits
//! text to a column width for the list pane and status bar.

use crate::core::FileEntry;

use humansize::{DECIMAL, format_size};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use std::cmp::Ordering;
use std::fs::Metadata;

/// Formatter struct to handle sorting and filtering of file entries
/// based on user preferences.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    dirs_first: bool,
    show_hidden: bool,
    case_insensitive: bool,
}

impl Formatter {
    pub fn new(dirs_first: bool, show_hidden: bool, case_insensitive: bool) -> Self {
        Self {
            dirs_first,
            show_hidden,
            case_insensitive,
        }
    }

    /// Sorts the given file entries in place according to the formatter's settings.
    ///
    /// The sort is stable, so entries comparing equal keep the provider's order.
    pub fn sort_entries(&self, entries: &mut [FileEntry]) {
        entries.sort_by(|a, b| {
            if self.dirs_first {
                match (a.is_dir(), b.is_dir()) {
                    (true, false) => return Ordering::Less,
                    (false, true) => return Ordering::Greater,
                    _ => {}
                }
            }
            if self.case_insensitive {
                a.name_str()
                    .to_lowercase()
                    .cmp(&b.name_str().to_lowercase())
            } else {
                a.name_str().cmp(&b.name_str())
            }
        });
    }

    /// Filters the given file entries in place according to the formatter's settings,
    /// then sorts them.
    pub fn filter_entries(&self, entries: &mut Vec<FileEntry>) {
        if !self.show_hidden {
            entries.retain(|e| !e.is_hidden());
        }
        self.sort_entries(entries);
    }
}

/// Formats the file attributes in a unix-like format.
///
/// On Unix: Returns a string like 'drwxr-xr-x'.
/// On Windows: Returns a short string showing file type and attributes like:
/// (`d`, `l`, `h` for hidden, `s` for system, `a` for archive, `r` for read-only).
pub fn format_attributes(meta: &Metadata) -> String {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let file_type = meta.file_type();
        let first = if file_type.is_dir() {
            'd'
        } else if file_type.is_symlink() {
            'l'
        } else {
            '-'
        };
        let mode = meta.permissions().mode();
        let mut chars = [first, '-', '-', '-', '-', '-', '-', '-', '-', '-'];
        for (i, shift) in [6u32, 3, 0].into_iter().enumerate() {
            let base = 1 + i * 3;
            if (mode >> (shift + 2)) & 1 != 0 {
                chars[base] = 'r';
            }
            if (mode >> (shift + 1)) & 1 != 0 {
                chars[base + 1] = 'w';
            }
            if (mode >> shift) & 1 != 0 {
                chars[base + 2] = 'x';
            }
        }
        chars.iter().collect()
    }
    #[cfg(windows)]
    {
        use std::os::windows::fs::MetadataExt;
        let attr = meta.file_attributes();
        let mut out = String::with_capacity(5);
        out.push(if attr & 0x10 != 0 {
            'd'
        } else if attr & 0x400 != 0 {
            'l'
        } else {
            '-'
        });
        out.push(if attr & 0x02 != 0 { 'h' } else { '-' });
        out.push(if attr & 0x04 != 0 { 's' } else { '-' });
        out.push(if attr & 0x20 != 0 { 'a' } else { '-' });
        out.push(if attr & 0x01 != 0 { 'r' } else { '-' });
        out
    }
}

/// Formats a byte count into a human-readable string ("1.20 kB").
pub fn format_file_size(size: u64) -> String {
    format_size(size, DECIMAL)
}

/// Truncates `text` to at most `max_width` display columns.
///
/// When the text does not fit, as many leading characters as possible are kept
/// and `tail` is appended; the result including the tail never exceeds `max_width`.
pub fn truncate_with_tail(text: &str, max_width: usize, tail: &str) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let tail_width = tail.width();
    if tail_width >= max_width {
        return tail.chars().take(max_width).collect();
    }

    let budget = max_width - tail_width;
    let mut out = String::with_capacity(max_width);
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(tail);
    out
}

/// Cleans `line` for a fixed-width cell by removing control characters,
/// expanding tabs to 4 spaces, and truncating or padding the string to fit exactly.
pub fn sanitize_to_exact_width(line: &str, pane_width: usize) -> String {
    let mut out = String::with_capacity(pane_width);
    let mut current_w = 0;

    for ch in line.chars() {
        if ch == '\t' {
            let space_count = 4 - (current_w % 4);
            if current_w + space_count > pane_width {
                break;
            }
            out.push_str(&" ".repeat(space_count));
            current_w += space_count;
            continue;
        }

        if ch.is_control() {
            continue;
        }

        let w = ch.width().unwrap_or(0);
        if current_w + w > pane_width {
            break;
        }

        out.push(ch);
        current_w += w;
    }

    if current_w < pane_width {
        out.push_str(&" ".repeat(pane_width - current_w));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FileEntry;

    fn names(entries: &[FileEntry]) -> Vec<String> {
        entries.iter().map(|e| e.name_str().into_owned()).collect()
    }

    #[test]
    fn sort_puts_directories_first() {
        let mut entries = vec![
            FileEntry::new("b.txt", 0, None),
            FileEntry::new("Zeta", FileEntry::IS_DIR, None),
            FileEntry::new("a.txt", 0, None),
            FileEntry::new("alpha", FileEntry::IS_DIR, None),
        ];
        Formatter::new(true, true, true).sort_entries(&mut entries);
        assert_eq!(names(&entries), vec!["alpha", "Zeta", "a.txt", "b.txt"]);

        Formatter::new(false, true, false).sort_entries(&mut entries);
        assert_eq!(names(&entries), vec!["Zeta", "a.txt", "alpha", "b.txt"]);
    }

    #[test]
    fn filter_hides_dotfiles() {
        let mut entries = vec![
            FileEntry::new(".git", FileEntry::IS_DIR | FileEntry::IS_HIDDEN, None),
            FileEntry::new("src", FileEntry::IS_DIR, None),
            FileEntry::new(".env", FileEntry::IS_HIDDEN, None),
        ];
        let mut shown = entries.clone();
        Formatter::new(true, false, true).filter_entries(&mut shown);
        assert_eq!(names(&shown), vec!["src"]);

        Formatter::new(true, true, true).filter_entries(&mut entries);
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn truncate_with_tail_respects_width() {
        assert_eq!(truncate_with_tail("short.txt", 30, "..."), "short.txt");
        assert_eq!(truncate_with_tail("abcdefghij", 8, "..."), "abcde...");
        assert_eq!(truncate_with_tail("abcdefghij", 2, "..."), "..");

        let crab = truncate_with_tail("🦀🦀🦀🦀🦀", 7, "...");
        assert!(crab.width() <= 7, "got {crab}");
        assert!(crab.ends_with("..."));
    }

    #[test]
    fn file_size_is_human_readable() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1200), "1.20 kB");
    }

    #[test]
    fn sanitize_pads_and_strips() {
        assert_eq!(sanitize_to_exact_width("ab", 4), "ab  ");
        assert_eq!(sanitize_to_exact_width("a\u{7}b", 3), "ab ");
        assert_eq!(sanitize_to_exact_width("\tx", 6), "    x ");
        assert_eq!(sanitize_to_exact_width("toolong", 3), "too");
    }
}
