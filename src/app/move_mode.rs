//! Pending move of a single entry.
//!
//! `m` arms the selected entry, `p` moves it into the directory being shown,
//! `Esc` disarms. Arming again replaces the item, so at most one move is ever
//! pending.

use crate::core::FileEntry;
use crate::core::worker::FileOperations;

use tracing::debug;

use std::path::{Path, PathBuf};

/// The entry waiting to be moved and where it lives.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveItem {
    entry: FileEntry,
    path: PathBuf,
}

impl MoveItem {
    pub fn new(entry: FileEntry, path: PathBuf) -> Self {
        Self { entry, path }
    }

    #[inline]
    pub fn entry(&self) -> &FileEntry {
        &self.entry
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum MoveState {
    #[default]
    Idle,
    Armed(MoveItem),
}

impl MoveState {
    pub fn is_armed(&self) -> bool {
        matches!(self, MoveState::Armed(_))
    }

    pub fn item(&self) -> Option<&MoveItem> {
        match self {
            MoveState::Armed(item) => Some(item),
            MoveState::Idle => None,
        }
    }

    /// Marks `item` for moving, replacing anything armed before.
    pub fn arm(&mut self, item: MoveItem) {
        debug!(path = %item.path.display(), "move armed");
        *self = MoveState::Armed(item);
    }

    /// Drops the pending move. Returns `true` if something was armed.
    pub fn cancel(&mut self) -> bool {
        let was_armed = self.is_armed();
        *self = MoveState::Idle;
        was_armed
    }

    /// Sends the armed item to `ops` for a move into `destination` and disarms.
    ///
    /// The outcome of the move is reported by `ops` on its own channel; the
    /// state goes back to idle either way. Does nothing when idle.
    pub fn commit(&mut self, destination: &Path, ops: &impl FileOperations) -> Option<MoveItem> {
        let MoveState::Armed(item) = std::mem::take(self) else {
            return None;
        };
        debug!(
            src = %item.path.display(),
            dest = %destination.display(),
            "move committed"
        );
        ops.move_item(&item.path, destination);
        Some(item)
    }
}
