//! Visible window over a listing.

use std::ops::Range;

/// The rows currently on screen: `offset..offset + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    height: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Viewport {
    /// A zero height is stored as 1.
    pub fn new(height: usize) -> Self {
        Self {
            offset: 0,
            height: height.max(1),
        }
    }

    pub fn with_offset(offset: usize, height: usize) -> Self {
        Self {
            offset,
            height: height.max(1),
        }
    }

    #[inline]
    pub fn offset(self) -> usize {
        self.offset
    }

    #[inline]
    pub fn height(self) -> usize {
        self.height
    }

    /// First visible index.
    #[inline]
    pub fn top(self) -> usize {
        self.offset
    }

    /// Last visible index.
    #[inline]
    pub fn bottom(self) -> usize {
        self.offset + self.height - 1
    }

    pub fn contains(self, index: usize) -> bool {
        index >= self.top() && index <= self.bottom()
    }

    pub fn scroll_up(self) -> Self {
        Self {
            offset: self.offset.saturating_sub(1),
            ..self
        }
    }

    pub fn scroll_down(self) -> Self {
        Self {
            offset: self.offset + 1,
            ..self
        }
    }

    pub fn goto_top(self) -> Self {
        Self { offset: 0, ..self }
    }

    /// Shows the last `height` rows of a listing of `count` entries.
    pub fn goto_bottom(self, count: usize) -> Self {
        Self {
            offset: count.saturating_sub(self.height),
            ..self
        }
    }

    pub fn resize(self, height: usize) -> Self {
        Self {
            height: height.max(1),
            ..self
        }
    }

    /// Indices to draw for a listing of `count` entries.
    pub fn visible_range(self, count: usize) -> Range<usize> {
        let start = self.offset.min(count);
        let end = (self.offset + self.height).min(count);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_follow_offset_and_height() {
        let v = Viewport::with_offset(4, 3);
        assert_eq!(v.top(), 4);
        assert_eq!(v.bottom(), 6);
        assert!(v.contains(4));
        assert!(v.contains(6));
        assert!(!v.contains(7));
        assert!(!v.contains(3));
    }

    #[test]
    fn zero_height_is_clamped() {
        assert_eq!(Viewport::new(0).height(), 1);
        assert_eq!(Viewport::new(5).resize(0).height(), 1);
    }

    #[test]
    fn scrolling_and_jumps() {
        let v = Viewport::new(3);
        assert_eq!(v.scroll_up().offset(), 0);
        assert_eq!(v.scroll_down().scroll_down().offset(), 2);
        assert_eq!(v.goto_bottom(10).offset(), 7);
        assert_eq!(v.goto_bottom(2).offset(), 0);
        assert_eq!(Viewport::with_offset(5, 3).goto_top().offset(), 0);
    }

    #[test]
    fn visible_range_is_cut_at_count() {
        assert_eq!(Viewport::with_offset(2, 5).visible_range(4), 2..4);
        assert_eq!(Viewport::with_offset(0, 5).visible_range(0), 0..0);
        assert_eq!(Viewport::with_offset(3, 2).visible_range(10), 3..5);
    }
}
