//! Terminal rendering and event loop for fm.
//!
//! Handles setup/teardown of raw mode, alternate screen and mouse capture, redraws,
//! and dispatch of events (keypress, mouse wheel, resize) to the app.

use crate::app::{AppState, KeypressResult};
use crate::ui;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::info;

use std::path::PathBuf;
use std::{io, time::Duration};

/// Initializes the terminal in raw mode and alternate screen and runs the main event loop.
///
/// Blocks until quit. Mouse capture is only enabled when `mouse` is set.
/// Returns the confirmed file when the loop ended with a selection.
pub fn run_terminal(app: &mut AppState, mouse: bool) -> io::Result<Option<PathBuf>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, app);
    app.shutdown();

    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    result
}

/// Main event loop of fm: draws UI, polls for events and dispatches them to the app.
fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<Option<PathBuf>>
where
    io::Error: From<<B as Backend>::Error>,
{
    terminal.draw(|f| ui::render(f, app))?;

    loop {
        if app.tick() {
            terminal.draw(|f| ui::render(f, app))?;
        }

        if !event::poll(Duration::from_millis(16))? {
            continue;
        }

        let result = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_keypress(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(_, _) => KeypressResult::Consumed,
            _ => continue,
        };

        match result {
            KeypressResult::Quit => {
                info!("quit requested");
                return Ok(None);
            }
            KeypressResult::Selected(path) => {
                info!(path = %path.display(), "selection confirmed");
                return Ok(Some(path));
            }
            KeypressResult::OpenedEditor => {
                // the editor drew over the alternate screen
                terminal.clear()?;
            }
            KeypressResult::Continue | KeypressResult::Consumed => {}
        }
        terminal.draw(|f| ui::render(f, app))?;
    }
}
