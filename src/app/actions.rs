//! Action context and command bar state for fm.
//!
//! Contains the [ActionContext] struct, tracking the command bar input, its cursor
//! and the move mode. File actions are issued through a [FileOperations] collaborator.

use crate::app::nav::NavState;
use crate::app::move_mode::{MoveItem, MoveState};
use crate::core::FileOperations;
use crate::error::{FmError, FmResult};
use crate::utils::is_plain_name;

/// Describes the current mode for input handling.
///
/// * `Normal` - Default browsing mode, keys go through the keymap.
/// * `Command` - The command bar is open and keys edit its buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionMode {
    #[default]
    Normal,
    Command,
}

/// Tracks the command bar buffer and the armed move item.
///
/// Used by the main application loop to manage user interactions.
/// All file actions act on the selected entry of the given [NavState].
#[derive(Default)]
pub struct ActionContext {
    mode: ActionMode,
    input_buffer: String,
    input_cursor_pos: usize,
    move_state: MoveState,
}

impl ActionContext {
    // Getters / accessors

    pub fn mode(&self) -> ActionMode {
        self.mode
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn input_cursor_pos(&self) -> usize {
        self.input_cursor_pos
    }

    pub fn move_state(&self) -> &MoveState {
        &self.move_state
    }

    /// The command text while the command bar is open.
    pub fn command_line(&self) -> Option<&str> {
        self.is_command_mode().then_some(self.input_buffer.as_str())
    }

    // Mode functions

    pub fn is_command_mode(&self) -> bool {
        self.mode == ActionMode::Command
    }

    /// Opens the command bar with `initial` already typed.
    pub fn enter_command(&mut self, initial: &str) {
        self.mode = ActionMode::Command;
        self.input_buffer = initial.to_string();
        self.input_cursor_pos = self.input_buffer.len();
    }

    pub fn exit_command(&mut self) {
        self.mode = ActionMode::Normal;
        self.input_buffer.clear();
        self.input_cursor_pos = 0;
    }

    /// Closes the command bar and returns what was typed.
    pub fn take_command(&mut self) -> String {
        let line = std::mem::take(&mut self.input_buffer);
        self.exit_command();
        line
    }

    // Actions functions

    /// Deletes the selected entry, to the trash or permanently.
    pub fn action_delete(&self, nav: &NavState, ops: &impl FileOperations, to_trash: bool) {
        if let Some(path) = nav.selected_path() {
            ops.delete(&path, to_trash);
        }
    }

    /// Renames the selected entry to `new_name`, keeping it in the same directory.
    ///
    /// An empty name does nothing. Names that are not a single component are refused.
    pub fn action_rename(
        &self,
        nav: &NavState,
        ops: &impl FileOperations,
        new_name: &str,
    ) -> FmResult<()> {
        if new_name.is_empty() {
            return Ok(());
        }
        if !is_plain_name(new_name) {
            return Err(FmError::InvalidName(new_name.to_string()));
        }
        if let Some(path) = nav.selected_path() {
            ops.rename(&path, new_name);
        }
        Ok(())
    }

    /// Creates a new file or directory named `name` in the current directory.
    pub fn action_create(
        &self,
        nav: &NavState,
        ops: &impl FileOperations,
        name: &str,
        is_dir: bool,
    ) -> FmResult<()> {
        if name.is_empty() {
            return Ok(());
        }
        if !is_plain_name(name) {
            return Err(FmError::InvalidName(name.to_string()));
        }
        ops.create(&nav.current_dir().join(name), is_dir);
        Ok(())
    }

    /// Arms move mode with the selected entry, replacing any earlier one.
    ///
    /// Returns false when there is nothing to mark.
    pub fn action_mark_move(&mut self, nav: &NavState) -> bool {
        let (Some(entry), Some(path)) = (nav.selected_entry(), nav.selected_path()) else {
            return false;
        };
        self.move_state.arm(MoveItem::new(entry.clone(), path));
        true
    }

    /// Moves the armed entry into the current directory.
    pub fn action_commit_move(
        &mut self,
        nav: &NavState,
        ops: &impl FileOperations,
    ) -> Option<MoveItem> {
        self.move_state.commit(nav.current_dir(), ops)
    }

    pub fn action_cancel_move(&mut self) -> bool {
        self.move_state.cancel()
    }

    // Cursor actions

    /// Moves the input cursor one character to the left, if possible.
    pub fn action_move_cursor_left(&mut self) {
        if let Some((previous, _)) = self.input_buffer[..self.input_cursor_pos]
            .char_indices()
            .next_back()
        {
            self.input_cursor_pos = previous;
        }
    }

    /// Moves the input cursor one character to the right, if possible.
    pub fn action_move_cursor_right(&mut self) {
        if let Some(ch) = self.input_buffer[self.input_cursor_pos..].chars().next() {
            self.input_cursor_pos += ch.len_utf8();
        }
    }

    pub fn action_insert_at_cursor(&mut self, ch: char) {
        self.input_buffer.insert(self.input_cursor_pos, ch);
        self.input_cursor_pos += ch.len_utf8();
    }

    /// Deletes the character before the cursor and moves the cursor back.
    pub fn action_backspace_at_cursor(&mut self) {
        if self.input_cursor_pos > 0
            && let Some((previous, _)) = self.input_buffer[..self.input_cursor_pos]
                .char_indices()
                .next_back()
        {
            self.input_buffer.remove(previous);
            self.input_cursor_pos = previous;
        }
    }

    /// Deletes the character under the cursor.
    pub fn action_delete_at_cursor(&mut self) {
        if self.input_cursor_pos < self.input_buffer.len() {
            self.input_buffer.remove(self.input_cursor_pos);
        }
    }

    pub fn action_cursor_home(&mut self) {
        self.input_cursor_pos = 0;
    }

    pub fn action_cursor_end(&mut self) {
        self.input_cursor_pos = self.input_buffer.len();
    }
}
