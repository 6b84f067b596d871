//! Application state and main controller module for fm.
//!
//! This module defines the overall [AppState] struct, which holds all major application
//! information and passes it to the UI/terminal functions:
//! - Configuration and the keymap built from it
//! - The navigation model ([NavState]) and the action context (command bar, move mode)
//! - Communication with worker threads via [Workers]
//! - Transient notices shown in the status line
//!
//! Key and mouse handlers live in the handlers module as further `impl AppState` blocks.

use crate::app::actions::ActionContext;
use crate::app::keymap::{Action, Keymap};
use crate::app::nav::NavState;
use crate::app::status::{StatusContext, StatusLine};
use crate::config::Config;
use crate::core::worker::{ListOptions, WorkerResponse, WorkerTask, Workers};
use crate::utils::shorten_home_path;

use crossterm::event::KeyEvent;
use tracing::{debug, warn};

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// How long a notice stays in the status line.
pub const NOTICE_DURATION: Duration = Duration::from_secs(4);

/// Result of processing a single key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeypressResult {
    Continue,
    Consumed,
    Quit,
    OpenedEditor,
    /// A file was confirmed while a selection path was given on the command line.
    Selected(PathBuf),
}

/// Main struct which holds the central application state of fm.
///
/// The listing in [NavState] only changes when a directory load comes back from the
/// io worker with the latest request id. Until then the previous listing stays on screen.
pub struct AppState<'a> {
    pub(super) config: &'a Config,
    pub(super) keymap: Keymap,

    pub(super) nav: NavState,
    pub(super) actions: ActionContext,

    pub(super) workers: Workers,
    pub(super) show_hidden: bool,
    pub(super) selection_mode: bool,

    pub(super) notice: Option<String>,
    pub(super) notification_time: Option<Instant>,
}

impl<'a> AppState<'a> {
    /// Creates the state for `start_dir` backed by the local filesystem and starts the first load.
    pub fn new(config: &'a Config, start_dir: &Path, selection_mode: bool) -> Self {
        Self::with_workers(config, start_dir, Workers::spawn(), selection_mode)
    }

    pub fn with_workers(
        config: &'a Config,
        start_dir: &Path,
        workers: Workers,
        selection_mode: bool,
    ) -> Self {
        let mut app = Self {
            config,
            keymap: Keymap::from_keys(config.keys()),
            nav: NavState::new(start_dir.to_path_buf()),
            actions: ActionContext::default(),
            workers,
            show_hidden: config.general().show_hidden(),
            selection_mode,
            notice: None,
            notification_time: None,
        };
        app.request_dir_load(start_dir.to_path_buf(), None);
        app
    }

    // Getters/ accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    #[inline]
    pub fn actions(&self) -> &ActionContext {
        &self.actions
    }

    #[inline]
    pub fn workers(&self) -> &Workers {
        &self.workers
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.nav.is_loading()
    }

    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Derives the status bar for the current frame.
    pub fn status_line(&self) -> StatusLine {
        let location = shorten_home_path(self.nav.current_dir());
        StatusLine::derive(&StatusContext {
            entries: self.nav.entries(),
            cursor: self.nav.cursor(),
            location: &location,
            move_state: self.actions.move_state(),
            command: self.actions.command_line(),
            notice: self.notice.as_deref(),
            show_icons: self.config.display().icons(),
        })
    }

    /// Called by the renderer with the number of rows the list pane has.
    pub fn update_viewport_height(&mut self, height: usize) {
        self.nav.set_viewport_height(height);
    }

    /// Shows `message` in the status line until it expires.
    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
        self.notification_time = Some(Instant::now() + NOTICE_DURATION);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
        self.notification_time = None;
    }

    /// Updates state from the clock and from worker responses.
    ///
    /// Returns true when something changed and the screen should be redrawn.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;

        if let Some(expiry) = self.notification_time
            && Instant::now() >= expiry
        {
            self.clear_notice();
            changed = true;
        }

        while let Ok(response) = self.workers.response_rx().try_recv() {
            changed = true;

            match response {
                WorkerResponse::DirectoryLoaded {
                    path,
                    entries,
                    focus,
                    request_id,
                } => {
                    if request_id != self.nav.request_id() {
                        debug!(request_id, "dropping stale directory load");
                        continue;
                    }
                    self.nav.update_from_worker(path, entries, focus);
                }
                WorkerResponse::Error {
                    message,
                    request_id,
                } => {
                    if request_id != self.nav.request_id() {
                        continue;
                    }
                    self.nav.cancel_load();
                    self.set_notice(message);
                }
                WorkerResponse::OperationComplete {
                    message,
                    request_id,
                    focus,
                } => {
                    self.workers.complete_op(request_id);
                    self.set_notice(message);
                    self.refresh_after_op(focus);
                }
                WorkerResponse::OperationFailed {
                    message,
                    request_id,
                } => {
                    self.workers.complete_op(request_id);
                    self.set_notice(message);
                    self.refresh_after_op(None);
                }
            }
        }
        changed
    }

    /// Central key handler.
    ///
    /// While the command bar is open every key edits it; otherwise keys go through the keymap.
    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        if self.actions.is_command_mode() {
            return self.handle_command_mode(key);
        }

        match self.keymap.lookup(key) {
            Some(Action::System(sys_act)) => self.handle_sys_action(sys_act),
            Some(Action::Nav(nav_act)) => self.handle_nav_action(nav_act),
            Some(Action::File(file_act)) => self.handle_file_action(file_act),
            None => KeypressResult::Continue,
        }
    }

    // Worker requests

    /// Requests a listing of `path`. The cursor lands on `focus` when it is part of the result.
    pub fn request_dir_load(&mut self, path: PathBuf, focus: Option<OsString>) {
        let request_id = self.nav.begin_load(&path);
        let options = ListOptions {
            dirs_first: self.config.general().dirs_first(),
            show_hidden: self.show_hidden,
            case_insensitive: self.config.general().case_insensitive(),
        };
        debug!(path = %path.display(), request_id, "requesting directory load");
        if self
            .workers
            .io_tx()
            .send(WorkerTask::LoadDirectory {
                path,
                focus,
                options,
                request_id,
            })
            .is_err()
        {
            warn!(request_id, "io worker is gone");
            self.nav.cancel_load();
        }
    }

    /// Reloads the current directory, keeping the selected entry selected.
    pub fn reload(&mut self) {
        let focus = self.nav.selected_entry().map(|e| e.name().to_os_string());
        self.request_dir_load(self.nav.current_dir().to_path_buf(), focus);
    }

    /// Refreshes the listing after a file operation finished.
    ///
    /// A load of another directory still in flight is left alone, its result is
    /// newer than anything the operation changed here. The cursor lands on `focus`,
    /// or stays on the selected entry.
    fn refresh_after_op(&mut self, focus: Option<OsString>) {
        if let Some(pending) = self.nav.pending_dir()
            && pending != self.nav.current_dir()
        {
            debug!(pending = %pending.display(), "keeping pending load over refresh");
            return;
        }
        let focus = focus.or_else(|| self.nav.selected_entry().map(|e| e.name().to_os_string()));
        self.request_dir_load(self.nav.current_dir().to_path_buf(), focus);
    }

    /// Cancels queued file operations before the app exits.
    pub fn shutdown(&mut self) {
        let pending = self.workers.pending_ops();
        if pending > 0 {
            debug!(pending, "cancelling pending file operations on exit");
        }
        self.workers.cancel_pending();
    }
}
