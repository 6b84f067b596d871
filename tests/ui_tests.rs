//! UI-related tests for fm
//!
//! These tests render whole frames into a ratatui `TestBackend` and check what ends up
//! on screen: the path header, the list rows, the placeholder and the status bar.
//!
//! These tests create temporary directories which are cleaned up after the tests complete.

use fm_tui::app::{AppState, StatusLine, StatusText};
use fm_tui::config::{Config, StatusBarTheme};
use fm_tui::core;
use fm_tui::ui::{render, widgets};

use ratatui::Terminal;
use ratatui::backend::{Backend, TestBackend};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use std::error;
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn wait_for_load(app: &mut AppState) -> Result<(), Box<dyn error::Error>> {
    let start = Instant::now();
    while app.is_loading() {
        app.tick();
        if start.elapsed() > Duration::from_secs(5) {
            return Err("timed out waiting for directory load".into());
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    Ok(())
}

fn row(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

#[test]
fn test_ui_sanitization_and_exact_width() {
    let pane_width = 10;

    let cases = vec![
        ("short.txt", 10),
        ("very_long_filename.txt", 10),
        ("🦀_crab.rs", 10),
        ("\t_tab", 10),
    ];

    for (input, expected_width) in cases {
        let result = core::sanitize_to_exact_width(input, pane_width);

        let actual_width = unicode_width::UnicodeWidthStr::width(result.as_str());

        assert_eq!(
            actual_width, expected_width,
            "Failed to produce exact width for input: '{}'. Result was: '{}' (width: {})",
            input, result, actual_width
        );

        assert!(
            !result.chars().any(|c| c.is_control() && c != ' '),
            "Result contains control characters: {:?}",
            result
        );
    }
}

#[test]
fn test_core_empty_dir() -> Result<(), Box<dyn error::Error>> {
    let temp_dir = tempdir()?;
    let entries = core::browse_dir(temp_dir.path())?;

    assert!(entries.is_empty(), "Directory should be empty");
    Ok(())
}

#[test]
fn test_render_listing_and_status_bar() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("alpha"))?;
    fs::write(dir.path().join("b.txt"), "hello")?;

    let config = Config::parse("[display]\nborders = \"none\"\n")?;
    let mut app = AppState::new(&config, dir.path(), false);
    wait_for_load(&mut app)?;

    let mut terminal = Terminal::new(TestBackend::new(60, 8))?;
    terminal.draw(|f| render(f, &mut app))?;
    let buffer = terminal.backend().buffer();

    let dir_name = dir
        .path()
        .file_name()
        .ok_or("tempdir without a name")?
        .to_string_lossy()
        .into_owned();
    assert!(row(buffer, 0).contains(&dir_name), "header: {}", row(buffer, 0));
    assert!(row(buffer, 1).starts_with("> alpha/"), "row 1: {}", row(buffer, 1));
    assert!(row(buffer, 2).starts_with("  b.txt"), "row 2: {}", row(buffer, 2));

    let status = row(buffer, 7);
    assert!(status.starts_with(" alpha "), "status: {}", status);
    assert!(status.trim_end().ends_with("1/2  FM"), "status: {}", status);

    // header, status bar and six list rows
    assert_eq!(app.nav().viewport().height(), 6);
    Ok(())
}

#[test]
fn test_render_empty_directory_placeholder() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;

    let config = Config::parse("[display]\nborders = \"none\"\n")?;
    let mut app = AppState::new(&config, dir.path(), false);
    wait_for_load(&mut app)?;

    let mut terminal = Terminal::new(TestBackend::new(40, 5))?;
    terminal.draw(|f| render(f, &mut app))?;
    let buffer = terminal.backend().buffer();

    assert!(row(buffer, 1).contains("[Empty]"), "row 1: {}", row(buffer, 1));
    assert_eq!(row(buffer, 4).trim(), "", "status bar should be blank");
    assert_eq!(app.status_line(), StatusLine::empty());
    Ok(())
}

#[test]
fn test_unified_border_holds_path_title() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("one"), "")?;

    let config = Config::parse("[display]\nborders = \"unified\"\n")?;
    let mut app = AppState::new(&config, dir.path(), false);
    wait_for_load(&mut app)?;

    let mut terminal = Terminal::new(TestBackend::new(40, 6))?;
    terminal.draw(|f| render(f, &mut app))?;
    let buffer = terminal.backend().buffer();

    assert!(row(buffer, 0).starts_with('┌'), "top border: {}", row(buffer, 0));
    assert!(row(buffer, 1).contains("one"), "row 1: {}", row(buffer, 1));
    // borders take two of the five rows above the status bar
    assert_eq!(app.nav().viewport().height(), 3);
    Ok(())
}

#[test]
fn test_status_bar_columns() -> Result<(), Box<dyn error::Error>> {
    let line = StatusLine {
        selected: "notes.txt".into(),
        status: StatusText::Notice("Deleted x".into()),
        counter: "2/9".into(),
        logo: "FM".into(),
    };

    let mut terminal = Terminal::new(TestBackend::new(40, 1))?;
    terminal.draw(|f| {
        widgets::draw_status_bar(f, Rect::new(0, 0, 40, 1), &line, &StatusBarTheme::default())
    })?;
    let text = row(terminal.backend().buffer(), 0);

    assert_eq!(line.column_widths(40), [11, 20, 5, 4]);
    assert!(text.starts_with(" notes.txt  Deleted x"), "bar: {}", text);
    assert!(text.ends_with(" 2/9  FM "), "bar: {}", text);
    Ok(())
}

#[test]
fn test_command_cursor_follows_visible_command() -> Result<(), Box<dyn error::Error>> {
    let area = Rect::new(0, 0, 40, 1);
    let mut line = StatusLine {
        selected: "notes.txt".into(),
        status: StatusText::MoveNotice("Currently moving a".into()),
        counter: "1/3".into(),
        logo: "FM".into(),
    };

    // the move notice hides the typed command, so no cursor is placed
    let mut terminal = Terminal::new(TestBackend::new(40, 1))?;
    terminal.draw(|f| widgets::place_command_cursor(f, area, &line, "mk"))?;
    assert_eq!(terminal.backend_mut().get_cursor_position()?, Position::new(0, 0));

    line.status = StatusText::CommandEcho("mkdir".into());
    terminal.draw(|f| widgets::place_command_cursor(f, area, &line, "mk"))?;
    // selected column is " notes.txt " (11), then one space of padding
    assert_eq!(terminal.backend_mut().get_cursor_position()?, Position::new(14, 0));
    Ok(())
}
