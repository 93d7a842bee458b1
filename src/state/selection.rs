//! Selection - Row indices marked for bulk actions
//!
//! Indices are positions in the working set. Every removal of rows must go
//! through [`SelectionSet::remap_after_delete`] or [`SelectionSet::clear`] so
//! no entry ever points at a row that moved.

use std::collections::BTreeSet;

/// Ordered set of selected row positions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    indices: BTreeSet<usize>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// True when `indices` is non-empty and fully selected
    pub fn contains_all(&self, indices: &[usize]) -> bool {
        !indices.is_empty() && indices.iter().all(|index| self.indices.contains(index))
    }

    /// Ascending selected positions
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Flip membership; returns the new state
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.indices.remove(&index) {
            false
        } else {
            self.indices.insert(index);
            true
        }
    }

    /// Replace the whole selection
    pub fn replace(&mut self, indices: impl IntoIterator<Item = usize>) {
        self.indices = indices.into_iter().collect();
    }

    pub fn remove_all(&mut self, indices: &[usize]) {
        for index in indices {
            self.indices.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Follow a single-row delete: drop `removed`, shift everything after it down
    pub fn remap_after_delete(&mut self, removed: usize) {
        self.indices = self
            .indices
            .iter()
            .filter_map(|&index| shift_after_delete(index, removed))
            .collect();
    }
}

/// Where `index` lands after the row at `removed` is deleted; `None` if it was that row
pub fn shift_after_delete(index: usize, removed: usize) -> Option<usize> {
    match index.cmp(&removed) {
        std::cmp::Ordering::Less => Some(index),
        std::cmp::Ordering::Equal => None,
        std::cmp::Ordering::Greater => Some(index - 1),
    }
}

/// Where `index` lands after every row in `removed` is deleted at once.
///
/// `removed` must be sorted ascending.
pub fn shift_after_batch_delete(index: usize, removed: &[usize]) -> Option<usize> {
    match removed.binary_search(&index) {
        Ok(_) => None,
        Err(before) => Some(index - before),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(indices: &[usize]) -> SelectionSet {
        let mut set = SelectionSet::new();
        set.replace(indices.iter().copied());
        set
    }

    #[test]
    fn test_toggle() {
        let mut set = SelectionSet::new();
        assert!(set.toggle(4));
        assert!(set.contains(4));
        assert!(!set.toggle(4));
        assert!(set.is_empty());
    }

    #[test]
    fn test_contains_all_requires_non_empty() {
        let set = selection(&[1, 2, 3]);
        assert!(set.contains_all(&[1, 3]));
        assert!(!set.contains_all(&[1, 4]));
        assert!(!set.contains_all(&[]));
    }

    #[test]
    fn test_remap_after_delete() {
        let mut set = selection(&[0, 3, 5, 9]);
        set.remap_after_delete(5);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 3, 8]);

        set.remap_after_delete(1);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 2, 7]);
    }

    #[test]
    fn test_shift_after_batch_delete() {
        let removed = [2, 5, 6];
        assert_eq!(shift_after_batch_delete(0, &removed), Some(0));
        assert_eq!(shift_after_batch_delete(2, &removed), None);
        assert_eq!(shift_after_batch_delete(4, &removed), Some(3));
        assert_eq!(shift_after_batch_delete(6, &removed), None);
        assert_eq!(shift_after_batch_delete(9, &removed), Some(6));
    }
}
