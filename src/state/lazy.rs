//! Scroll window for the lazily mounted dish list.

use std::ops::Range;

/// Which slice of the list is on screen.
///
/// Only rows inside [`LazyListState::visible_range`] are mounted. The
/// viewport size comes from the last layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LazyListState {
    first_visible: usize,
    visible_count: usize,
    item_count: usize,
}

impl LazyListState {
    /// Index of the first visible item.
    #[must_use]
    pub const fn first_visible_item_index(&self) -> usize {
        self.first_visible
    }

    /// Number of items the viewport fits, as of the last layout.
    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Records a layout pass and clamps the scroll offset to it.
    pub fn update_viewport(&mut self, visible_count: usize, item_count: usize) {
        self.item_count = item_count;
        self.visible_count = visible_count.min(item_count);
        self.first_visible = self
            .first_visible
            .min(item_count.saturating_sub(self.visible_count));
    }

    /// Scrolls the minimum distance that brings `index` on screen.
    pub fn ensure_visible(&mut self, index: usize) {
        if self.visible_count == 0 {
            return;
        }
        if index < self.first_visible {
            self.first_visible = index;
        } else if index >= self.first_visible + self.visible_count {
            self.first_visible = index + 1 - self.visible_count;
        }
    }

    /// Items currently on screen.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.first_visible + self.visible_count).min(self.item_count);
        self.first_visible..end
    }

    /// Whether some items are cut off by the viewport.
    #[must_use]
    pub const fn can_scroll(&self) -> bool {
        self.visible_count < self.item_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_window() {
        let mut state = LazyListState::default();
        state.update_viewport(4, 6);
        assert_eq!(state.visible_range(), 0..4);
        assert!(state.can_scroll());
    }

    #[test]
    fn test_viewport_larger_than_list() {
        let mut state = LazyListState::default();
        state.update_viewport(10, 6);
        assert_eq!(state.visible_range(), 0..6);
        assert!(!state.can_scroll());
    }

    #[test]
    fn test_ensure_visible_scrolls_down_then_up() {
        let mut state = LazyListState::default();
        state.update_viewport(2, 6);

        state.ensure_visible(4);
        assert_eq!(state.visible_range(), 3..5);

        state.ensure_visible(3);
        assert_eq!(state.visible_range(), 3..5);

        state.ensure_visible(1);
        assert_eq!(state.visible_range(), 1..3);
    }

    #[test]
    fn test_growing_viewport_clamps_offset() {
        let mut state = LazyListState::default();
        state.update_viewport(1, 6);
        state.ensure_visible(5);
        assert_eq!(state.first_visible_item_index(), 5);

        state.update_viewport(4, 6);
        assert_eq!(state.visible_range(), 2..6);
    }

    #[test]
    fn test_ensure_visible_before_layout_is_noop() {
        let mut state = LazyListState::default();
        state.ensure_visible(3);
        assert_eq!(state.first_visible_item_index(), 0);
        assert!(state.visible_range().is_empty());
    }
}
