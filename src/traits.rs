//! Common trait and error type for keyed min-heaps
//!
//! Unlike handle-based heaps, a keyed heap addresses its entries by the key
//! itself: every live key maps to exactly one entry, and `change_key` and
//! `remove` take the key rather than an opaque handle. This is the natural
//! shape for graph algorithms that re-prioritize vertices by label.
//!
//! [`KeyedMinHeap`] is the seam the MST orchestration in [`crate::mst`] is
//! generic over; [`IndexedMinHeap`](crate::indexed_binary::IndexedMinHeap)
//! is the array-backed implementation.

use std::fmt;

/// Error type for keyed heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `insert` was called with a key already present in the heap
    DuplicateKey,
    /// `change_key` or `remove` was called with a key not present
    UnknownKey,
    /// `extract_min` or `peek_min` was called on an empty heap
    EmptyHeap,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::DuplicateKey => write!(f, "key is already present in the heap"),
            HeapError::UnknownKey => write!(f, "key is not present in the heap"),
            HeapError::EmptyHeap => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// A min-heap of (key, priority) pairs addressed by key
///
/// Each live key has exactly one entry. All failure modes are reported as
/// distinct [`HeapError`] values rather than panics or silent defaults, and
/// none of them poisons the heap: after an error the structure is unchanged
/// and remains usable.
///
/// Priorities are compared through `Ord`. Equal priorities are legal
/// everywhere; ties during sifting are resolved deterministically by the
/// implementation (see `IndexedMinHeap`). Float priorities should be wrapped
/// in `ordered_float::OrderedFloat`; feeding NaN through a looser wrapper is
/// a caller contract violation, not something the heap validates.
///
/// # Example
///
/// ```rust
/// use prim_mst::{IndexedMinHeap, KeyedMinHeap};
///
/// let mut heap: IndexedMinHeap<&str, i32> = IndexedMinHeap::new();
/// heap.insert("a", 3).unwrap();
/// heap.insert("b", 1).unwrap();
/// heap.change_key(&"a", 0).unwrap();
/// assert_eq!(heap.extract_min(), Ok(("a", 0)));
/// ```
pub trait KeyedMinHeap<K, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap holds no entries
    fn is_empty(&self) -> bool;

    /// Returns the number of live entries
    fn len(&self) -> usize;

    /// Inserts a new (key, priority) entry
    ///
    /// # Errors
    /// Returns [`HeapError::DuplicateKey`] if the key is already present.
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, key: K, priority: P) -> Result<(), HeapError>;

    /// Re-prioritizes an existing entry
    ///
    /// A no-op when the new priority equals the current one. A smaller
    /// priority moves the entry toward the root, a larger one toward a leaf.
    ///
    /// # Errors
    /// Returns [`HeapError::UnknownKey`] if the key is not present.
    ///
    /// # Time Complexity
    /// O(log n)
    fn change_key(&mut self, key: &K, new_priority: P) -> Result<(), HeapError>;

    /// Returns the minimum entry without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_min(&self) -> Result<(&K, &P), HeapError>;

    /// Removes and returns the minimum entry
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_min(&mut self) -> Result<(K, P), HeapError>;

    /// Removes an arbitrary entry by key, returning its priority
    ///
    /// # Errors
    /// Returns [`HeapError::UnknownKey`] if the key is not present.
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove(&mut self, key: &K) -> Result<P, HeapError>;
}
