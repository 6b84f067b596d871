//! main.rs
//! Entry point for fm

use fm_tui::app::AppState;
use fm_tui::config::Config;
use fm_tui::core::terminal;
use fm_tui::logging;
use fm_tui::utils::cli::{CliAction, handle_args};
use fm_tui::utils::resolve_dir;

use tracing::info;

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::event::DisableMouseCapture,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[fm] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let CliAction::Run(opts) = handle_args() else {
        return Ok(());
    };

    let config = Config::load();
    let _log_guard = logging::init(config.general().enable_logging());

    let cwd = std::env::current_dir()?;
    let start_dir = match opts.start_dir.as_deref() {
        Some(dir) => resolve_dir(dir, &cwd),
        None => cwd,
    };
    if !start_dir.is_dir() {
        eprintln!(
            "\n[fm] Error: Path '{}' cannot be opened.",
            start_dir.display()
        );
        std::process::exit(1);
    }

    info!(
        start_dir = %start_dir.display(),
        selection = opts.selection_path.is_some(),
        icons = config.display().icons(),
        "starting fm"
    );

    let mut app = AppState::new(&config, &start_dir, opts.selection_path.is_some());
    let mouse = config.general().enable_mouse_wheel();
    let selected = terminal::run_terminal(&mut app, mouse)?;

    if let (Some(path), Some(out)) = (selected, opts.selection_path) {
        info!(path = %path.display(), out = %out.display(), "writing selection");
        std::fs::write(&out, format!("{}\n", path.display()))?;
    }
    Ok(())
}
