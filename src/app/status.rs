//! Status bar contents.
//!
//! [StatusLine::derive] turns the current navigation, command bar and move
//! state into the four strings shown at the bottom of the screen. Nothing is
//! cached; the renderer derives a fresh line every frame.

use crate::app::Cursor;
use crate::app::move_mode::MoveState;
use crate::core::FileEntry;
use crate::core::formatter::{format_file_size, truncate_with_tail};
use crate::ui::icons::DIR_ICON;

use unicode_width::UnicodeWidthStr;

/// Widest the selected file name may be before it is cut with "...".
pub const SELECTED_NAME_WIDTH: usize = 30;
pub const LOGO_TEXT: &str = "FM";

/// What the middle column shows, highest priority first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusText {
    /// An entry is armed for moving.
    MoveNotice(String),
    /// Raw command bar input.
    CommandEcho(String),
    /// Result or error of the last operation.
    Notice(String),
    /// Size, mode and location of the selected entry.
    FileInfo(String),
    Empty,
}

impl StatusText {
    pub fn as_str(&self) -> &str {
        match self {
            StatusText::MoveNotice(s)
            | StatusText::CommandEcho(s)
            | StatusText::Notice(s)
            | StatusText::FileInfo(s) => s,
            StatusText::Empty => "",
        }
    }
}

/// Everything the status line is derived from.
pub struct StatusContext<'a> {
    pub entries: &'a [FileEntry],
    pub cursor: Cursor,
    /// Directory shown in the file info, already shortened for display.
    pub location: &'a str,
    pub move_state: &'a MoveState,
    /// `Some` while the command bar is open.
    pub command: Option<&'a str>,
    pub notice: Option<&'a str>,
    pub show_icons: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub selected: String,
    pub status: StatusText,
    pub counter: String,
    pub logo: String,
}

impl StatusLine {
    /// An all-empty line, used for an empty listing.
    pub fn empty() -> Self {
        Self {
            selected: String::new(),
            status: StatusText::Empty,
            counter: String::new(),
            logo: String::new(),
        }
    }

    pub fn derive(ctx: &StatusContext<'_>) -> Self {
        let count = ctx.entries.len();
        if count == 0 {
            return Self::empty();
        }
        let index = ctx.cursor.clamp(count).index();
        let entry = &ctx.entries[index];

        let status = if let Some(item) = ctx.move_state.item() {
            StatusText::MoveNotice(format!("Currently moving {}", item.entry().name_str()))
        } else if let Some(cmd) = ctx.command {
            StatusText::CommandEcho(cmd.to_string())
        } else if let Some(notice) = ctx.notice {
            StatusText::Notice(notice.to_string())
        } else {
            StatusText::FileInfo(file_info(entry, ctx.location))
        };

        let logo = if ctx.show_icons {
            format!("{} {}", DIR_ICON, LOGO_TEXT)
        } else {
            LOGO_TEXT.to_string()
        };

        Self {
            selected: truncate_with_tail(&entry.name_str(), SELECTED_NAME_WIDTH, "..."),
            status,
            counter: format!("{}/{}", index + 1, count),
            logo,
        }
    }

    pub fn status_text(&self) -> &str {
        self.status.as_str()
    }

    /// Column widths for a bar `total` cells wide, in display order.
    ///
    /// Non-empty columns get one space of padding on each side. The status
    /// column takes whatever the other three leave.
    pub fn column_widths(&self, total: u16) -> [u16; 4] {
        let padded = |s: &str| -> u16 {
            if s.is_empty() {
                0
            } else {
                u16::try_from(s.width() + 2).unwrap_or(u16::MAX)
            }
        };
        let selected = padded(&self.selected).min(total);
        let counter = padded(&self.counter).min(total - selected);
        let logo = padded(&self.logo).min(total - selected - counter);
        let status = total - selected - counter - logo;
        [selected, status, counter, logo]
    }
}

fn file_info(entry: &FileEntry, location: &str) -> String {
    match entry.meta() {
        Some(meta) => format!(
            "{} {} {}",
            format_file_size(meta.size()),
            meta.mode(),
            location
        ),
        None => format!("Cannot read metadata of {}", entry.name_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::move_mode::MoveItem;
    use crate::core::EntryMeta;
    use std::path::PathBuf;

    fn entries() -> Vec<FileEntry> {
        vec![
            FileEntry::new("docs", FileEntry::IS_DIR, Some(EntryMeta::new(4096, "drwxr-xr-x"))),
            FileEntry::new("notes.txt", 0, Some(EntryMeta::new(1200, "-rw-r--r--"))),
            FileEntry::new("broken", 0, None),
        ]
    }

    fn ctx<'a>(entries: &'a [FileEntry], move_state: &'a MoveState) -> StatusContext<'a> {
        StatusContext {
            entries,
            cursor: Cursor::new(1),
            location: "~/work",
            move_state,
            command: None,
            notice: None,
            show_icons: false,
        }
    }

    #[test]
    fn empty_listing_gives_empty_fields() {
        let idle = MoveState::Idle;
        let mut c = ctx(&[], &idle);
        c.command = Some("mkdir x");
        c.show_icons = true;
        let line = StatusLine::derive(&c);
        assert_eq!(line, StatusLine::empty());
        assert_eq!(line.status_text(), "");
    }

    #[test]
    fn file_info_and_counter() {
        let list = entries();
        let idle = MoveState::Idle;
        let line = StatusLine::derive(&ctx(&list, &idle));
        assert_eq!(line.selected, "notes.txt");
        assert_eq!(line.counter, "2/3");
        assert_eq!(line.logo, "FM");
        assert_eq!(
            line.status,
            StatusText::FileInfo("1.20 kB -rw-r--r-- ~/work".to_string())
        );
    }

    #[test]
    fn missing_metadata_degrades_to_error_text() {
        let list = entries();
        let idle = MoveState::Idle;
        let mut c = ctx(&list, &idle);
        c.cursor = Cursor::new(2);
        let line = StatusLine::derive(&c);
        assert_eq!(
            line.status,
            StatusText::FileInfo("Cannot read metadata of broken".to_string())
        );
    }

    #[test]
    fn command_echo_beats_file_info_and_notice() {
        let list = entries();
        let idle = MoveState::Idle;
        let mut c = ctx(&list, &idle);
        c.notice = Some("Deleted x");
        c.command = Some("mkdir new");
        let line = StatusLine::derive(&c);
        assert_eq!(line.status, StatusText::CommandEcho("mkdir new".to_string()));

        c.command = None;
        let line = StatusLine::derive(&c);
        assert_eq!(line.status, StatusText::Notice("Deleted x".to_string()));
    }

    #[test]
    fn move_notice_overrides_everything() {
        let list = entries();
        let armed = MoveState::Armed(MoveItem::new(
            list[0].clone(),
            PathBuf::from("/home/user/docs"),
        ));
        let mut c = ctx(&list, &armed);
        c.command = Some("mkdir new");
        c.notice = Some("Deleted x");
        let line = StatusLine::derive(&c);
        assert_eq!(line.status, StatusText::MoveNotice("Currently moving docs".to_string()));
        assert!(line.status_text().contains("docs"));
    }

    #[test]
    fn long_names_are_cut() {
        let long = "a_really_long_file_name_that_goes_on_and_on.txt";
        let list = vec![FileEntry::new(long, 0, None)];
        let idle = MoveState::Idle;
        let mut c = ctx(&list, &idle);
        c.cursor = Cursor::new(0);
        let line = StatusLine::derive(&c);
        assert_eq!(line.selected.width(), SELECTED_NAME_WIDTH);
        assert!(line.selected.ends_with("..."));
    }

    #[test]
    fn logo_with_icons() {
        let list = entries();
        let idle = MoveState::Idle;
        let mut c = ctx(&list, &idle);
        c.show_icons = true;
        let line = StatusLine::derive(&c);
        assert_eq!(line.logo, format!("{} FM", DIR_ICON));
    }

    #[test]
    fn column_widths_fill_total() {
        let list = entries();
        let idle = MoveState::Idle;
        let line = StatusLine::derive(&ctx(&list, &idle));
        let widths = line.column_widths(80);
        assert_eq!(widths, [11, 60, 5, 4]);
        assert_eq!(widths.iter().sum::<u16>(), 80);

        let narrow = line.column_widths(12);
        assert_eq!(narrow.iter().sum::<u16>(), 12);
        assert_eq!(StatusLine::empty().column_widths(40), [0, 40, 0, 0]);
    }
}
