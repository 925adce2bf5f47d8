//! Row selection and scroll position within the current page.
//!
//! Pure state container; the numbers it holds are also the geometry the
//! scroll listener reports to the record store. In the table the selection is
//! the edge the reader has scrolled to, so the reported viewport ends at the
//! selected row.

use crate::store::ScrollMetrics;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    selected_index: usize,
    scroll_offset: usize,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Set selected index, clamped to `item_count`.
    pub fn set_selected_index(&mut self, index: usize, item_count: usize) {
        self.selected_index = clamp_selection(index, item_count);
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Move the selection by `delta` rows and keep it inside the viewport.
    pub fn move_selection(&mut self, delta: isize, item_count: usize, viewport: usize) {
        if item_count == 0 {
            self.reset();
            return;
        }
        let target = self.selected_index.saturating_add_signed(delta);
        self.set_selected_index(target, item_count);
        self.scroll_offset = scroll_to_show(self.selected_index, self.scroll_offset, viewport);
    }

    /// Pull selection and scroll back inside a list that may have shrunk.
    pub fn clamp_to(&mut self, item_count: usize, viewport: usize) {
        self.set_selected_index(self.selected_index, item_count);
        self.scroll_offset = self
            .scroll_offset
            .min(item_count.saturating_sub(viewport.max(1)));
        self.scroll_offset = scroll_to_show(self.selected_index, self.scroll_offset, viewport);
    }

    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// Row geometry for the reveal check after a move of `delta` rows.
    ///
    /// Upward and zero moves report nothing.
    pub fn scroll_metrics(&self, delta: isize, item_count: usize) -> Option<ScrollMetrics> {
        if delta <= 0 {
            return None;
        }
        let scroll_top = self.scroll_offset.min(self.selected_index);
        Some(ScrollMetrics {
            viewport_height: self.selected_index - scroll_top + 1,
            scroll_top,
            content_height: item_count,
        })
    }
}

pub fn clamp_selection(index: usize, item_count: usize) -> usize {
    if item_count == 0 {
        0
    } else {
        index.min(item_count - 1)
    }
}

/// Scroll offset that keeps `selected` visible in a `viewport` rows tall window.
pub fn scroll_to_show(selected: usize, scroll_offset: usize, viewport: usize) -> usize {
    let viewport = viewport.max(1);
    if selected < scroll_offset {
        selected
    } else if selected >= scroll_offset + viewport {
        selected + 1 - viewport
    } else {
        scroll_offset
    }
}

/// Rows visible for a scroll offset.
pub fn calculate_visible_range(
    scroll_offset: usize,
    viewport_height: usize,
    total_items: usize,
) -> std::ops::Range<usize> {
    let start = scroll_offset.min(total_items);
    let end = (scroll_offset + viewport_height).min(total_items);
    start..end
}
