//! Indexed binary min-heap implementation
//!
//! An array-backed binary min-heap augmented with a key-to-index position
//! map. The map makes every live entry addressable in O(1), which turns
//! `change_key` and arbitrary-key `remove` into O(log n) operations instead
//! of the O(n) scan a plain binary heap would need.
//!
//! Parent/child indexing over the backing array:
//! - parent(i) = (i - 1) / 2
//! - left(i)   = 2 * i + 1
//! - right(i)  = 2 * i + 2
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `change_key`  | O(log n)   |
//! | `extract_min` | O(log n)   |
//! | `remove`      | O(log n)   |
//! | `peek_min`    | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use prim_mst::{IndexedMinHeap, KeyedMinHeap};
//!
//! let mut heap = IndexedMinHeap::new();
//! heap.insert("three", 3).unwrap();
//! heap.insert("one", 1).unwrap();
//! heap.insert("two", 2).unwrap();
//!
//! assert_eq!(heap.peek_min(), Ok((&"one", &1)));
//! assert_eq!(heap.extract_min(), Ok(("one", 1)));
//! assert_eq!(heap.extract_min(), Ok(("two", 2)));
//! assert_eq!(heap.extract_min(), Ok(("three", 3)));
//! ```

use crate::traits::{HeapError, KeyedMinHeap};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A single heap slot: an explicit (key, priority) record
#[derive(Debug, Clone)]
struct Entry<K, P> {
    key: K,
    priority: P,
}

/// An indexed binary min-heap of (key, priority) entries
///
/// The backing `Vec` owns the entry data; the position map is a non-owning
/// lookup table from key to current array slot. The map is corrected inside
/// the swap primitive itself, so no code path can move an entry without
/// updating its recorded position.
///
/// Two invariants hold after every public operation returns:
/// 1. Heap order: `priority(parent(i)) <= priority(i)` for every non-root i.
/// 2. Index consistency: the position map is exactly the inverse of the
///    array's key assignment.
#[derive(Debug)]
pub struct IndexedMinHeap<K, P> {
    /// The heap entries, array-ordered
    entries: Vec<Entry<K, P>>,
    /// Maps each live key to its current index in `entries`
    positions: FxHashMap<K, usize>,
}

impl<K, P> KeyedMinHeap<K, P> for IndexedMinHeap<K, P>
where
    K: Eq + Hash + Clone,
    P: Ord,
{
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn insert(&mut self, key: K, priority: P) -> Result<(), HeapError> {
        if self.positions.contains_key(&key) {
            return Err(HeapError::DuplicateKey);
        }

        let index = self.entries.len();
        self.positions.insert(key.clone(), index);
        self.entries.push(Entry { key, priority });
        self.sift_up(index);
        Ok(())
    }

    fn change_key(&mut self, key: &K, new_priority: P) -> Result<(), HeapError> {
        let &index = self.positions.get(key).ok_or(HeapError::UnknownKey)?;

        use std::cmp::Ordering;
        match new_priority.cmp(&self.entries[index].priority) {
            Ordering::Equal => {}
            Ordering::Less => {
                self.entries[index].priority = new_priority;
                self.sift_up(index);
            }
            Ordering::Greater => {
                self.entries[index].priority = new_priority;
                self.sift_down(index);
            }
        }
        Ok(())
    }

    fn peek_min(&self) -> Result<(&K, &P), HeapError> {
        self.entries
            .first()
            .map(|entry| (&entry.key, &entry.priority))
            .ok_or(HeapError::EmptyHeap)
    }

    fn extract_min(&mut self) -> Result<(K, P), HeapError> {
        if self.entries.is_empty() {
            return Err(HeapError::EmptyHeap);
        }

        // swap_remove is exactly the swap-with-last-and-shrink step
        let entry = self.entries.swap_remove(0);
        self.positions.remove(&entry.key);

        if let Some(root) = self.entries.first() {
            self.positions.insert(root.key.clone(), 0);
            self.sift_down(0);
        }

        Ok((entry.key, entry.priority))
    }

    fn remove(&mut self, key: &K) -> Result<P, HeapError> {
        let &index = self.positions.get(key).ok_or(HeapError::UnknownKey)?;

        let entry = self.entries.swap_remove(index);
        self.positions.remove(&entry.key);

        if index < self.entries.len() {
            self.positions.insert(self.entries[index].key.clone(), index);
            // The displaced last entry's relation to its new neighbors is
            // unknown, so try both directions; the one that does not apply
            // is a no-op.
            self.sift_up(index);
            self.sift_down(index);
        }

        Ok(entry.priority)
    }
}

impl<K, P> IndexedMinHeap<K, P>
where
    K: Eq + Hash + Clone,
    P: Ord,
{
    /// Returns true if the key currently has a live entry
    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Returns the current priority of a live key, if any
    pub fn priority(&self, key: &K) -> Option<&P> {
        self.positions
            .get(key)
            .map(|&index| &self.entries[index].priority)
    }

    /// Swaps two slots, keeping the position map in sync
    ///
    /// Both array slots and both map entries are exchanged here and nowhere
    /// else, so the index-consistency invariant cannot be skipped by a
    /// caller.
    fn swap_entries(&mut self, i: usize, j: usize) {
        self.entries.swap(i, j);
        self.positions.insert(self.entries[i].key.clone(), i);
        self.positions.insert(self.entries[j].key.clone(), j);
    }

    /// Moves the entry at `index` toward the root while it is strictly
    /// smaller than its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].priority < self.entries[parent].priority {
                self.swap_entries(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the entry at `index` toward a leaf while a child is strictly
    /// smaller
    ///
    /// When both children carry equal priorities the left child wins; this
    /// left preference is the deterministic tie-break used throughout.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.entries[left].priority < self.entries[smallest].priority {
                smallest = left;
            }
            if right < len && self.entries[right].priority < self.entries[smallest].priority {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.swap_entries(index, smallest);
            index = smallest;
        }
    }
}

impl<K, P> Default for IndexedMinHeap<K, P>
where
    K: Eq + Hash + Clone,
    P: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
