//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal loop. The screen is
//! the list pane above a one line status bar, with the current path either in a header
//! line or in the title of the unified border.
//!
//! Rendering reads state and config and produces widgets. The only state it touches is
//! the viewport height, which follows the size of the list pane.

use crate::app::AppState;
use crate::config::Theme;
use crate::core::{FileEntry, sanitize_to_exact_width};
use crate::ui::icons::nerd_font_icon;
use crate::ui::widgets;
use crate::utils::shorten_home_path;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

/// Renders the entire terminal UI for fm on each frame.
pub fn render(frame: &mut Frame, app: &mut AppState) {
    let unified = app.config().display().is_unified();
    let (header, list_area, status_area) = split_screen(frame.area(), unified);

    let path = shorten_home_path(app.nav().current_dir());
    let block = {
        let cfg = app.config();
        widgets::pane_block(&path, cfg.display(), cfg.theme())
    };
    let inner = block.inner(list_area);
    app.update_viewport_height(usize::from(inner.height));

    let app: &AppState = app;
    let cfg = app.config();
    let theme = cfg.theme();

    if let Some(header) = header {
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {}", path), theme.path().as_style())),
            header,
        );
    }

    let nav = app.nav();
    if nav.entries().is_empty() {
        let (text, style) = match (app.actions().command_line(), app.notice()) {
            (Some(cmd), _) => (format!(":{}", cmd), theme.accent().as_style()),
            (None, Some(notice)) => (notice.to_string(), theme.accent().as_style()),
            (None, None) if app.is_loading() => ("Loading...".to_string(), theme.entry().as_style()),
            (None, None) => ("[Empty]".to_string(), theme.entry().as_style()),
        };
        widgets::draw_placeholder(frame, list_area, block, &text, style);
    } else {
        let selected = nav.selected_idx();
        let width = usize::from(inner.width);
        let range = nav.viewport().visible_range(nav.count());
        let lines: Vec<Line> = nav.entries()[range.clone()]
            .iter()
            .zip(range)
            .map(|(entry, idx)| entry_line(entry, idx == selected, width, app, theme))
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), list_area);
    }

    let status = app.status_line();
    widgets::draw_status_bar(frame, status_area, &status, theme.status_bar());

    if let Some(cmd) = app.actions().command_line() {
        let before_cursor = &cmd[..app.actions().input_cursor_pos()];
        widgets::place_command_cursor(frame, status_area, &status, before_cursor);
    }
}

/// Splits the screen into an optional header, the list pane and the status bar.
pub fn split_screen(area: Rect, unified: bool) -> (Option<Rect>, Rect, Rect) {
    if unified {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        (None, chunks[0], chunks[1])
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);
        (Some(chunks[0]), chunks[1], chunks[2])
    }
}

/// Builds one row: selection marker, optional icon and the name padded to the pane width.
fn entry_line<'a>(
    entry: &FileEntry,
    is_selected: bool,
    width: usize,
    app: &AppState,
    theme: &Theme,
) -> Line<'a> {
    let display = app.config().display();
    let style = entry_style(theme, entry.is_dir(), is_selected);

    let marker_icon = theme.selection_icon();
    let marker = if !display.selection_marker() {
        String::new()
    } else if is_selected {
        marker_icon.to_string()
    } else {
        " ".repeat(marker_icon.width())
    };

    let mut name = String::new();
    if display.icons() {
        name.push_str(nerd_font_icon(entry));
        name.push(' ');
    }
    name.push_str(&entry.name_str());
    if entry.is_dir() {
        name.push('/');
    }

    let rest = width.saturating_sub(marker.width());
    Line::from(vec![
        Span::styled(marker, theme.accent().as_style()),
        Span::styled(sanitize_to_exact_width(&name, rest), style),
    ])
}

/// Directory or entry style, with the selection colors laid over it.
fn entry_style(theme: &Theme, is_dir: bool, is_selected: bool) -> Style {
    let mut style = if is_dir {
        theme.directory().as_style()
    } else {
        theme.entry().as_style()
    };

    if is_selected {
        let selection = theme.selection();
        if selection.bg() != Color::Reset {
            style = style.bg(selection.bg());
        }
        if selection.fg() != Color::Reset {
            style = style.fg(selection.fg());
        }
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorPair;

    #[test]
    fn split_screen_layouts() {
        let area = Rect::new(0, 0, 80, 24);

        let (header, list, status) = split_screen(area, false);
        assert_eq!(header, Some(Rect::new(0, 0, 80, 1)));
        assert_eq!(list, Rect::new(0, 1, 80, 22));
        assert_eq!(status, Rect::new(0, 23, 80, 1));

        let (header, list, status) = split_screen(area, true);
        assert_eq!(header, None);
        assert_eq!(list.height, 23);
        assert_eq!(status.y, 23);
    }

    #[test]
    fn selection_colors_override_entry_colors() {
        let theme = Theme::default();
        let plain = entry_style(&theme, true, false);
        let selected = entry_style(&theme, true, true);

        assert_eq!(plain.fg, theme.directory().as_style().fg);
        assert_eq!(selected.bg, Some(theme.selection().bg()));
        assert_ne!(ColorPair::default(), *theme.selection());
    }
}
