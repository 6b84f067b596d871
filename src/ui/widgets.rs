//! Small widgets shared by the renderer: the pane block, the four column
//! status bar and the placeholder drawn over an empty listing.

use crate::app::{StatusLine, StatusText};
use crate::config::{Display, StatusBarTheme, Theme};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Block around the list pane. Borderless unless borders are unified.
pub fn pane_block<'a>(title: &str, display: &Display, theme: &Theme) -> Block<'a> {
    if !display.is_unified() {
        return Block::default();
    }
    Block::default()
        .borders(Borders::ALL)
        .border_type(display.border_type())
        .border_style(theme.accent().as_style())
        .title(Span::styled(format!(" {} ", title), theme.path().as_style()))
}

/// Draws the status bar into a one line `area`.
///
/// Column widths come from [StatusLine::column_widths]; each non-empty column is
/// padded with one space on both sides and colored from the theme.
pub fn draw_status_bar(frame: &mut Frame, area: Rect, line: &StatusLine, theme: &StatusBarTheme) {
    let widths = line.column_widths(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(widths.map(Constraint::Length))
        .split(area);

    let texts = [
        line.selected.as_str(),
        line.status_text(),
        line.counter.as_str(),
        line.logo.as_str(),
    ];
    let styles = theme.column_styles();

    for ((text, style), chunk) in texts.iter().zip(styles).zip(chunks.iter()) {
        if chunk.width == 0 {
            continue;
        }
        let content = if text.is_empty() {
            String::new()
        } else {
            format!(" {} ", text)
        };
        frame.render_widget(Paragraph::new(content).style(style), *chunk);
    }
}

/// Puts the terminal cursor after the typed command in the status column.
///
/// Nothing is placed while the status column shows something other than the command.
pub fn place_command_cursor(
    frame: &mut Frame,
    area: Rect,
    line: &StatusLine,
    typed_before_cursor: &str,
) {
    if !matches!(line.status, StatusText::CommandEcho(_)) {
        return;
    }
    let [selected, status, ..] = line.column_widths(area.width);
    if status == 0 {
        return;
    }
    let typed = u16::try_from(typed_before_cursor.width()).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(selected)
        .saturating_add(1)
        .saturating_add(typed)
        .min(area.x + selected + status - 1);
    frame.set_cursor_position(Position::new(x, area.y));
}

/// Draws `text` in place of the listing when there is nothing to list.
pub fn draw_placeholder(frame: &mut Frame, area: Rect, block: Block, text: &str, style: Style) {
    let line = Line::from(vec![Span::raw(" "), Span::styled(text.to_string(), style)]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}
