//! Binary min-heap with an injectable comparator.
//!
//! Drives the frontier of Prim's algorithm, keyed by edge cost. The
//! comparator is a type parameter rather than a hardwired `Ord` bound so
//! float-costed edges (which are only `PartialOrd`) and future non-float
//! weight types order through the same structure.
//!
//! There is no decrease-key operation. Callers are expected to tolerate
//! stale duplicate entries and filter them when popping, which is exactly
//! what the Prim builder does.

use std::cmp::Ordering;

/// A binary min-heap ordered by the supplied comparator.
///
/// Entries comparing [`Ordering::Less`] surface first. Ties are broken
/// arbitrarily by heap position; callers must not rely on insertion
/// order among equal entries.
#[derive(Clone, Debug)]
pub struct MinHeap<T, C> {
    items: Vec<T>,
    compare: C,
}

impl<T, C> MinHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty heap ordered by `compare`.
    #[must_use]
    pub fn with_comparator(compare: C) -> Self {
        Self {
            items: Vec::new(),
            compare,
        }
    }

    /// Returns the number of entries in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the heap holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the minimum entry without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Inserts an entry in O(log n).
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the minimum entry in O(log n).
    ///
    /// Returns `None` on an empty heap; popping blind is a caller
    /// contract breach, not a recoverable condition.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let item = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        item
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if (self.compare)(&self.items[index], &self.items[parent]) != Ordering::Less {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && (self.compare)(&self.items[left], &self.items[smallest]) == Ordering::Less
            {
                smallest = left;
            }
            if right < len
                && (self.compare)(&self.items[right], &self.items[smallest]) == Ordering::Less
            {
                smallest = right;
            }
            if smallest == index {
                return;
            }
            self.items.swap(index, smallest);
            index = smallest;
        }
    }
}
