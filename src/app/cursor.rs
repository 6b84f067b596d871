//! Cursor over a directory listing.
//!
//! [Cursor] is a plain value: every transition takes the listing length and
//! returns a new cursor, so callers decide when to store it.

/// Index of the selected entry.
///
/// Only meaningful while the listing is non-empty; on an empty listing every
/// transition is a no-op and the index stays at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.index
    }

    /// Moves by `delta` and wraps at the listing edges.
    ///
    /// Overshooting the last entry lands on the first one, undershooting the
    /// first lands on the last. This holds for page-sized deltas as well, so a
    /// page down near the end goes back to the top instead of stopping.
    pub fn advance(self, delta: isize, count: usize) -> Self {
        if count == 0 {
            return self;
        }
        let last = count - 1;
        let current = self.index.min(last);

        let next = if delta.is_negative() {
            current
                .checked_sub(delta.unsigned_abs())
                .unwrap_or(last)
        } else {
            match current.checked_add(delta.unsigned_abs()) {
                Some(n) if n <= last => n,
                _ => 0,
            }
        };
        Self { index: next }
    }

    pub fn goto_top(self, count: usize) -> Self {
        if count == 0 {
            return self;
        }
        Self { index: 0 }
    }

    pub fn goto_bottom(self, count: usize) -> Self {
        if count == 0 {
            return self;
        }
        Self { index: count - 1 }
    }

    /// Pulls the index back into range after the listing shrank.
    pub fn clamp(self, count: usize) -> Self {
        Self {
            index: self.index.min(count.saturating_sub(1)),
        }
    }
}
