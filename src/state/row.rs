//! Per-row order state.

use std::collections::BTreeMap;
use std::ops::Range;

/// Local state of one mounted dish row.
///
/// `count` is unsigned and decrement is guarded, so it never goes below zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowState {
    count: u32,
    dialog_visible: bool,
}

impl RowState {
    /// Number of portions ordered.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Whether the confirmation dialog is showing.
    #[must_use]
    pub const fn is_dialog_visible(&self) -> bool {
        self.dialog_visible
    }

    /// Adds one portion and opens the confirmation dialog.
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
        self.dialog_visible = true;
    }

    /// Removes one portion. Returns `false` when already at zero.
    pub fn decrement(&mut self) -> bool {
        if self.count == 0 {
            return false;
        }
        self.count -= 1;
        true
    }

    /// Closes the confirmation dialog.
    pub fn dismiss_dialog(&mut self) {
        self.dialog_visible = false;
    }
}

/// Row states for the currently mounted rows, keyed by menu index.
#[derive(Debug, Default)]
pub struct RowStore {
    rows: BTreeMap<usize, RowState>,
}

impl RowStore {
    /// State of a mounted row.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RowState> {
        self.rows.get(&index)
    }

    /// Mutable state of a mounted row.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut RowState> {
        self.rows.get_mut(&index)
    }

    /// Returns the row's state, creating a fresh one on first mount.
    pub fn mount(&mut self, index: usize) -> &mut RowState {
        self.rows.entry(index).or_default()
    }

    /// Drops every row outside `range` and hands back what was dropped.
    pub fn unmount_outside(&mut self, range: &Range<usize>) -> Vec<(usize, RowState)> {
        let offscreen: Vec<usize> = self
            .rows
            .keys()
            .copied()
            .filter(|index| !range.contains(index))
            .collect();

        offscreen
            .into_iter()
            .filter_map(|index| self.rows.remove(&index).map(|state| (index, state)))
            .collect()
    }

    /// First row whose dialog is showing.
    #[must_use]
    pub fn open_dialog(&self) -> Option<usize> {
        self.rows
            .iter()
            .find(|(_, state)| state.is_dialog_visible())
            .map(|(index, _)| *index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrement_at_zero_is_noop() {
        let mut row = RowState::default();
        assert!(!row.decrement());
        assert_eq!(row.count(), 0);
        assert!(!row.is_dialog_visible());
    }

    #[test]
    fn test_increment_adds_one_and_opens_dialog() {
        let mut row = RowState::default();
        for expected in 1..=3 {
            row.dismiss_dialog();
            row.increment();
            assert_eq!(row.count(), expected);
            assert!(row.is_dialog_visible());
        }
    }

    #[test]
    fn test_dismiss_keeps_count() {
        let mut row = RowState::default();
        row.increment();
        row.increment();
        row.dismiss_dialog();
        assert_eq!(row.count(), 2);
        assert!(!row.is_dialog_visible());
    }

    #[test]
    fn test_decrement_does_not_touch_dialog() {
        let mut row = RowState::default();
        row.increment();
        assert!(row.decrement());
        assert_eq!(row.count(), 0);
        assert!(row.is_dialog_visible());
    }

    #[test]
    fn test_remount_starts_fresh() {
        let mut store = RowStore::default();
        store.mount(0).increment();
        store.mount(4).increment();

        let dropped = store.unmount_outside(&(0..3));
        assert_eq!(dropped.len(), 1);
        assert_eq!(dropped[0].0, 4);
        assert_eq!(dropped[0].1.count(), 1);

        assert!(store.get(0).is_some());
        assert!(store.get(4).is_none());
        assert_eq!(store.mount(4).count(), 0);
        assert_eq!(store.get(0).map(RowState::count), Some(1));
    }

    #[test]
    fn test_open_dialog_lookup() {
        let mut store = RowStore::default();
        store.mount(1);
        assert_eq!(store.open_dialog(), None);

        store.mount(2).increment();
        assert_eq!(store.open_dialog(), Some(2));

        if let Some(row) = store.get_mut(2) {
            row.dismiss_dialog();
        }
        assert_eq!(store.open_dialog(), None);
    }
}
