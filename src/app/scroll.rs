//! Keeps the viewport in step with the cursor.
//!
//! Single steps scroll the view by exactly one line. When the cursor wraps
//! from one end of the listing to the other, the view jumps with it instead
//! of crawling back one line at a time.

use crate::app::{Cursor, Viewport};

/// Returns the viewport that shows `cursor` after a cursor or listing change.
///
/// 1. Cursor above the window: scroll up one line.
///    Cursor below the window: scroll down one line.
/// 2. Cursor on the first entry with rows hidden above: jump to the top.
///    Cursor on the last entry with rows hidden below: jump to the bottom.
/// 3. Anything still out of view (page jumps, resizes, a shorter listing)
///    scrolls the least amount that shows the cursor. The offset never goes
///    past `count - height`.
///
/// An empty listing resets the view to the top.
pub fn reconcile(viewport: Viewport, cursor: Cursor, count: usize) -> Viewport {
    if count == 0 {
        return viewport.goto_top();
    }
    let index = cursor.index().min(count - 1);

    let mut view = if index < viewport.top() {
        viewport.scroll_up()
    } else if index > viewport.bottom() {
        viewport.scroll_down()
    } else {
        viewport
    };

    if index == 0 && view.top() > 0 {
        view = view.goto_top();
    } else if index == count - 1 && view.bottom() < count - 1 {
        view = view.goto_bottom(count);
    }

    if index < view.top() {
        view = Viewport::with_offset(index, view.height());
    } else if index > view.bottom() {
        view = Viewport::with_offset(index + 1 - view.height(), view.height());
    }

    let max_offset = count.saturating_sub(view.height());
    if view.offset() > max_offset {
        view = Viewport::with_offset(max_offset, view.height());
    }
    view
}
