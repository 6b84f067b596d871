//! Input action handler methods for fm.
//!
//! This module implements [AppState] methods that process key events, mouse wheel
//! events, nav/file/system actions and the command bar.

use crate::app::command::Command;
use crate::app::keymap::{FileAction, NavAction, SystemAction};
use crate::app::state::{AppState, KeypressResult};
use crate::utils::{get_home, open_in_editor, resolve_dir};

use crossterm::event::{KeyCode::*, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use tracing::debug;

/// AppState input and action handlers
impl<'a> AppState<'a> {
    // AppState core handlers

    /// Handles key events while the command bar is open.
    ///
    /// Every key is consumed. Enter runs the command, Esc discards it.
    pub(super) fn handle_command_mode(&mut self, key: KeyEvent) -> KeypressResult {
        match key.code {
            Enter => {
                let line = self.actions.take_command();
                return self.execute_command(&line);
            }
            Esc => self.actions.exit_command(),
            Left => self.actions.action_move_cursor_left(),
            Right => self.actions.action_move_cursor_right(),
            Home => self.actions.action_cursor_home(),
            End => self.actions.action_cursor_end(),
            Backspace => self.actions.action_backspace_at_cursor(),
            Delete => self.actions.action_delete_at_cursor(),
            Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.actions.action_insert_at_cursor(c)
            }
            _ => {}
        }
        KeypressResult::Consumed
    }

    /// Handles navigation actions (up, down, into dir, etc).
    pub(super) fn handle_nav_action(&mut self, action: NavAction) -> KeypressResult {
        match action {
            NavAction::GoUp => {
                self.nav.move_up();
            }
            NavAction::GoDown => {
                self.nav.move_down();
            }
            NavAction::PageUp => {
                self.nav.page_up();
            }
            NavAction::PageDown => {
                self.nav.page_down();
            }
            NavAction::GoToTop => {
                self.nav.go_top();
            }
            NavAction::GoToBottom => {
                self.nav.go_bottom();
            }
            NavAction::GoParent => self.handle_go_parent(),
            NavAction::GoIntoDir => {
                self.handle_go_into_dir();
            }
            NavAction::GoToHome => self.handle_go_to_home(),
            NavAction::Refresh => self.reload(),
            NavAction::ToggleHidden => {
                self.show_hidden = !self.show_hidden;
                let msg = if self.show_hidden {
                    "Showing hidden files"
                } else {
                    "Hiding hidden files"
                };
                self.set_notice(msg);
                self.reload();
            }
        }
        KeypressResult::Continue
    }

    /// Handles file actions (open, delete, move, etc).
    ///
    /// Delete, rename and create open the command bar with the matching command typed in,
    /// so every change to the filesystem is confirmed with Enter.
    pub(super) fn handle_file_action(&mut self, action: FileAction) -> KeypressResult {
        match action {
            FileAction::Open => return self.handle_open_file(),
            FileAction::Command => self.actions.enter_command(""),
            FileAction::Delete => {
                if self.nav.selected_entry().is_some() {
                    self.actions.enter_command("rm");
                }
            }
            FileAction::Rename => {
                if let Some(entry) = self.nav.selected_entry() {
                    let prefill = format!("mv {}", entry.name_str());
                    self.actions.enter_command(&prefill);
                }
            }
            FileAction::Create => self.actions.enter_command("touch "),
            FileAction::CreateDirectory => self.actions.enter_command("mkdir "),
            FileAction::MarkMove => {
                self.actions.action_mark_move(&self.nav);
            }
            FileAction::CommitMove => {
                self.actions.action_commit_move(&self.nav, &self.workers);
            }
        }
        KeypressResult::Continue
    }

    pub(super) fn handle_sys_action(&mut self, action: SystemAction) -> KeypressResult {
        match action {
            SystemAction::Quit => KeypressResult::Quit,
            SystemAction::Cancel => {
                if !self.actions.action_cancel_move() {
                    self.clear_notice();
                }
                KeypressResult::Consumed
            }
        }
    }

    /// Scrolls the listing with the mouse wheel, when enabled.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> KeypressResult {
        if !self.config.general().enable_mouse_wheel() || self.actions.is_command_mode() {
            return KeypressResult::Continue;
        }
        match event.kind {
            MouseEventKind::ScrollUp => {
                self.nav.move_up();
                KeypressResult::Consumed
            }
            MouseEventKind::ScrollDown => {
                self.nav.move_down();
                KeypressResult::Consumed
            }
            _ => KeypressResult::Continue,
        }
    }

    /// Runs a command bar line. Unknown commands are ignored.
    pub(super) fn execute_command(&mut self, line: &str) -> KeypressResult {
        let Some(cmd) = Command::from_line(line) else {
            debug!(line, "ignoring unknown command");
            return KeypressResult::Consumed;
        };
        debug!(?cmd, "executing command");

        match cmd {
            Command::Delete => {
                let to_trash = self.config.general().move_to_trash();
                self.actions.action_delete(&self.nav, &self.workers, to_trash);
            }
            Command::MakeDir(name) | Command::Touch(name) => {
                let is_dir = matches!(cmd, Command::MakeDir(_));
                let res = self
                    .actions
                    .action_create(&self.nav, &self.workers, name, is_dir);
                if let Err(e) = res {
                    self.set_notice(e.to_string());
                }
            }
            Command::Rename(name) => {
                if let Err(e) = self.actions.action_rename(&self.nav, &self.workers, name) {
                    self.set_notice(e.to_string());
                }
            }
            Command::ChangeDir(target) => {
                let path = resolve_dir(target, self.nav.current_dir());
                if path.is_dir() {
                    self.request_dir_load(path, None);
                } else {
                    self.set_notice(format!("Not a directory: {}", target));
                }
            }
            Command::Quit => return KeypressResult::Quit,
        }
        KeypressResult::Consumed
    }

    // Handlers

    /// Loads the parent directory, focusing the directory we came from.
    fn handle_go_parent(&mut self) {
        let current = self.nav.current_dir();
        let Some(parent) = current.parent() else {
            return;
        };
        let exited_name = current.file_name().map(|n| n.to_os_string());
        let parent = parent.to_path_buf();
        self.request_dir_load(parent, exited_name);
    }

    /// Loads the selected directory. Returns false when the selection is not a directory.
    fn handle_go_into_dir(&mut self) -> bool {
        let (Some(entry), Some(path)) = (self.nav.selected_entry(), self.nav.selected_path())
        else {
            return false;
        };
        if !entry.is_dir() && !path.is_dir() {
            return false;
        }
        self.request_dir_load(path, None);
        true
    }

    fn handle_go_to_home(&mut self) {
        match get_home() {
            Some(home) => self.request_dir_load(home, None),
            None => self.set_notice("No home directory found"),
        }
    }

    /// Enters a directory, or confirms a file.
    ///
    /// With a selection path the file is handed back to the caller, otherwise it is
    /// opened in the configured editor.
    fn handle_open_file(&mut self) -> KeypressResult {
        if self.handle_go_into_dir() {
            return KeypressResult::Continue;
        }
        let Some(path) = self.nav.selected_path() else {
            return KeypressResult::Continue;
        };
        if self.selection_mode {
            return KeypressResult::Selected(path);
        }
        match open_in_editor(self.config.editor(), &path) {
            Ok(()) => KeypressResult::OpenedEditor,
            Err(e) => {
                self.set_notice(format!("Cannot open {}: {}", self.config.editor().cmd(), e));
                KeypressResult::Consumed
            }
        }
    }
}
