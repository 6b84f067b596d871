//! Navigation state and file list logic for fm.
//!
//! Manages the current directory, the listing, the cursor and the viewport.
//! Every cursor or listing change goes through [reconcile] so the selected
//! row is always on screen.

use crate::app::scroll::reconcile;
use crate::app::{Cursor, Viewport};
use crate::core::FileEntry;

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Holds the navigation, selection and file list state of the list pane.
pub struct NavState {
    current_dir: PathBuf,
    entries: Vec<FileEntry>,
    cursor: Cursor,
    viewport: Viewport,
    positions: HashMap<PathBuf, usize>,
    request_id: u64,
    /// Directory of the newest load still in flight.
    pending_dir: Option<PathBuf>,
}

impl NavState {
    pub fn new(path: PathBuf) -> Self {
        Self {
            current_dir: path,
            entries: Vec::new(),
            cursor: Cursor::default(),
            viewport: Viewport::default(),
            positions: HashMap::new(),
            request_id: 0,
            pending_dir: None,
        }
    }

    // Getters / Accessors

    #[inline]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[inline]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    pub fn selected_idx(&self) -> usize {
        self.cursor.index()
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.cursor.index())
    }

    pub fn selected_path(&self) -> Option<PathBuf> {
        self.selected_entry()
            .map(|e| self.current_dir.join(e.name()))
    }

    /// Returns a reference to the saved positions map.
    pub fn positions(&self) -> &HashMap<PathBuf, usize> {
        &self.positions
    }

    // Navigation functions

    /// Prepares a new request by incrementing the request ID.
    ///
    /// Responses carrying an older ID are dropped by the app state.
    pub fn prepare_new_request(&mut self) -> u64 {
        self.request_id = self.request_id.wrapping_add(1);
        self.request_id
    }

    /// Records a load of `path` as the newest request and returns its id.
    pub fn begin_load(&mut self, path: &Path) -> u64 {
        self.pending_dir = Some(path.to_path_buf());
        self.prepare_new_request()
    }

    /// Forgets the in-flight load after it failed.
    pub fn cancel_load(&mut self) {
        self.pending_dir = None;
    }

    #[inline]
    pub fn pending_dir(&self) -> Option<&Path> {
        self.pending_dir.as_deref()
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.pending_dir.is_some()
    }

    /// Moves the cursor by `delta` with wraparound and scrolls the view to follow.
    /// Returns `false` if there are no entries.
    pub fn move_by(&mut self, delta: isize) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.cursor = self.cursor.advance(delta, self.count());
        self.sync_viewport();
        true
    }

    pub fn move_up(&mut self) -> bool {
        self.move_by(-1)
    }

    pub fn move_down(&mut self) -> bool {
        self.move_by(1)
    }

    /// Moves one screen up, by the viewport height.
    pub fn page_up(&mut self) -> bool {
        let page = self.page_size();
        self.move_by(-page)
    }

    /// Moves one screen down, by the viewport height.
    pub fn page_down(&mut self) -> bool {
        let page = self.page_size();
        self.move_by(page)
    }

    pub fn go_top(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.cursor = self.cursor.goto_top(self.count());
        self.viewport = self.viewport.goto_top();
        self.sync_viewport();
        true
    }

    pub fn go_bottom(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.cursor = self.cursor.goto_bottom(self.count());
        self.viewport = self.viewport.goto_bottom(self.count());
        self.sync_viewport();
        true
    }

    /// Applies the list pane height from the last layout pass.
    pub fn set_viewport_height(&mut self, height: usize) {
        if self.viewport.height() == height.max(1) {
            return;
        }
        self.viewport = self.viewport.resize(height);
        self.sync_viewport();
    }

    /// Saves the current selection position for the current directory.
    pub fn save_position(&mut self) {
        if !self.entries.is_empty() {
            self.positions
                .insert(self.current_dir.clone(), self.cursor.index());
        }
    }

    /// Replaces the listing with a worker result.
    ///
    /// The cursor lands on `focus` when given and present, otherwise on the
    /// position remembered for `path`, otherwise on the first entry. Loading a
    /// different directory also resets the view to the top before reconciling.
    pub fn update_from_worker(
        &mut self,
        path: PathBuf,
        entries: Vec<FileEntry>,
        focus: Option<OsString>,
    ) {
        self.save_position();
        self.pending_dir = None;

        if path != self.current_dir {
            self.viewport = self.viewport.goto_top();
        }
        self.current_dir = path;
        self.entries = entries;

        let remembered = self.positions.get(&self.current_dir).copied();
        let index = focus
            .and_then(|f| self.entries.iter().position(|e| e.name() == f.as_os_str()))
            .or(remembered)
            .unwrap_or(0);

        self.cursor = Cursor::new(index).clamp(self.count());
        self.sync_viewport();
    }

    fn page_size(&self) -> isize {
        isize::try_from(self.viewport.height()).unwrap_or(isize::MAX)
    }

    fn sync_viewport(&mut self) {
        self.viewport = reconcile(self.viewport, self.cursor, self.count());
    }
}

/// Integration tests for navigation
#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::{DirectoryProvider, LocalFs, browse_dir};

    use rand::rng;
    use rand::seq::SliceRandom;
    use std::error;
    use std::fs;
    use std::fs::File;
    use tempfile::tempdir;

    fn sample(count: usize) -> Vec<FileEntry> {
        (0..count)
            .map(|i| FileEntry::new(format!("entry_{i:02}"), 0, None))
            .collect()
    }

    #[test]
    fn test_navstate_rapid_navigation() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let file_count = 10;

        for i in 0..file_count {
            let file_path = dir.path().join(format!("testfile_{i}.txt"));
            File::create(&file_path)?;
        }

        let entries = LocalFs.list(dir.path())?;
        assert!(!entries.is_empty(), "sandbox should not be empty");

        let mut nav = NavState::new(dir.path().to_path_buf());
        nav.set_viewport_height(4);
        nav.update_from_worker(dir.path().to_path_buf(), entries.clone(), None);

        assert_eq!(nav.count(), file_count, "initial entry count mismatch");

        let down_presses = 1000;
        for _ in 0..down_presses {
            assert!(nav.move_down(), "nav.move_down() failed during stress");
            assert!(nav.viewport().contains(nav.selected_idx()));
        }

        let expected_idx = down_presses % file_count;
        assert_eq!(
            nav.selected_idx(),
            expected_idx,
            "wrong index after DOWN stress"
        );

        let selected = nav.selected_entry().ok_or("no entry selected after DOWN")?;
        assert_eq!(selected.name_str(), entries[expected_idx].name_str());

        let up_presses = 1000;
        for _ in 0..up_presses {
            assert!(nav.move_up(), "nav.move_up() failed during stress");
            assert!(nav.viewport().contains(nav.selected_idx()));
        }

        // Mathematical wrap-around check
        let expected_idx_up = (expected_idx + file_count - (up_presses % file_count)) % file_count;
        assert_eq!(
            nav.selected_idx(),
            expected_idx_up,
            "wrong index after UP stress"
        );
        Ok(())
    }

    #[test]
    fn test_navstate_selection_persistence() -> Result<(), Box<dyn error::Error>> {
        let base = tempdir()?;
        let base_path = base.path().to_path_buf();
        let subdir_path = base_path.join("subdir");

        fs::create_dir_all(&subdir_path)?;
        for i in 0..20 {
            File::create(subdir_path.join(format!("file_{:02}.txt", i)))?;
        }

        let base_entries = browse_dir(&base_path)?;
        let sub_entries = browse_dir(&subdir_path)?;

        let mut nav = NavState::new(base_path.clone());
        nav.update_from_worker(subdir_path.clone(), sub_entries.clone(), None);

        for _ in 0..5 {
            nav.move_down();
        }
        assert_eq!(nav.selected_idx(), 5, "Initial move failed");

        for i in 0..200 {
            nav.update_from_worker(base_path.clone(), base_entries.clone(), None);
            nav.move_down();

            nav.update_from_worker(subdir_path.clone(), sub_entries.clone(), None);
            assert_eq!(
                nav.selected_idx(),
                5,
                "Selection lost at iteration {}. Should have stayed at 5.",
                i
            );
        }
        Ok(())
    }

    #[test]
    fn focus_wins_over_remembered_position() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        for name in ["alpha", "beta", "gamma", "delta"] {
            fs::write(dir.path().join(name), "")?;
        }

        let mut entries = browse_dir(dir.path())?;
        entries.shuffle(&mut rng());

        let mut nav = NavState::new(dir.path().to_path_buf());
        nav.update_from_worker(dir.path().to_path_buf(), entries.clone(), None);
        nav.go_bottom();

        nav.update_from_worker(
            dir.path().to_path_buf(),
            entries,
            Some(OsString::from("gamma")),
        );
        let selected = nav.selected_entry().ok_or("nothing selected")?;
        assert_eq!(selected.name_str(), "gamma");
        Ok(())
    }

    #[test]
    fn refresh_with_fewer_entries_clamps_cursor() {
        let dir = PathBuf::from("/virtual");
        let mut nav = NavState::new(dir.clone());
        nav.set_viewport_height(3);
        nav.update_from_worker(dir.clone(), sample(8), None);
        nav.go_bottom();
        assert_eq!(nav.selected_idx(), 7);

        nav.update_from_worker(dir, sample(2), None);
        assert_eq!(nav.selected_idx(), 1);
        assert_eq!(nav.viewport().offset(), 0);
    }

    #[test]
    fn paging_moves_by_viewport_height() {
        let dir = PathBuf::from("/virtual");
        let mut nav = NavState::new(dir.clone());
        nav.set_viewport_height(5);
        nav.update_from_worker(dir, sample(12), None);

        assert!(nav.page_down());
        assert_eq!(nav.selected_idx(), 5);
        assert!(nav.viewport().contains(5));

        assert!(nav.page_down());
        assert_eq!(nav.selected_idx(), 10);

        // 10 + 5 overshoots: back to the top
        assert!(nav.page_down());
        assert_eq!(nav.selected_idx(), 0);
        assert_eq!(nav.viewport().offset(), 0);

        assert!(nav.page_up());
        assert_eq!(nav.selected_idx(), 11);
        assert_eq!(nav.viewport().bottom(), 11);
    }

    #[test]
    fn empty_listing_rejects_movement() {
        let mut nav = NavState::new(PathBuf::from("/virtual"));
        assert!(!nav.move_down());
        assert!(!nav.page_up());
        assert!(!nav.go_bottom());
        assert!(nav.selected_entry().is_none());
        assert!(nav.selected_path().is_none());
    }

    #[test]
    fn resize_keeps_selection_visible() {
        let dir = PathBuf::from("/virtual");
        let mut nav = NavState::new(dir.clone());
        nav.set_viewport_height(10);
        nav.update_from_worker(dir, sample(30), None);
        for _ in 0..9 {
            nav.move_down();
        }
        nav.set_viewport_height(3);
        assert!(nav.viewport().contains(9));
        assert_eq!(nav.viewport().height(), 3);
    }
}
