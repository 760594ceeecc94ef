//! Indexed priority queue and eager Prim's minimum spanning tree
//!
//! This crate provides an array-backed binary min-heap with an auxiliary
//! key-to-index position map, giving O(log n) `change_key` and O(log n)
//! removal of an arbitrary key in addition to the usual O(log n) insert
//! and extract-min. On top of it sits the eager formulation of Prim's
//! algorithm: one live heap entry per frontier vertex, updated in place
//! whenever a cheaper connecting edge is discovered.
//!
//! # Features
//!
//! - **IndexedMinHeap**: binary min-heap keyed by arbitrary hashable keys,
//!   with `insert`, `change_key`, `extract_min`, `remove`, and `peek_min`
//! - **SimpleGraph**: labeled, optionally directed/weighted adjacency-list
//!   graph with a stable line-per-vertex text serialization
//! - **Prim's algorithm**: `minimum_spanning_tree` for connected undirected
//!   weighted graphs, generic over any [`KeyedMinHeap`] implementation
//! - **Loader**: parser for the plain-text graph descriptor format
//!
//! # Example
//!
//! ```rust
//! use prim_mst::graph::SimpleGraph;
//! use prim_mst::mst::minimum_spanning_tree;
//!
//! let mut graph = SimpleGraph::new(false, true);
//! for label in ["a", "b", "c"] {
//!     graph.add_vertex(label);
//! }
//! graph.add_edge("a", "b", 1.0).unwrap();
//! graph.add_edge("b", "c", 2.0).unwrap();
//! graph.add_edge("a", "c", 4.0).unwrap();
//!
//! let tree = minimum_spanning_tree(&graph, "a").unwrap();
//! assert_eq!(tree.vertex_count(), 3);
//! assert_eq!(tree.to_string(), "a: (b, 1)\nb: (a, 1), (c, 2)\nc: (b, 2)");
//! ```

pub mod graph;
pub mod indexed_binary;
pub mod loader;
pub mod mst;
pub mod traits;

// Re-export the main trait and heap for convenience
pub use indexed_binary::IndexedMinHeap;
pub use traits::{HeapError, KeyedMinHeap};
