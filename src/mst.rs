//! Eager Prim's minimum spanning tree construction
//!
//! This module implements the eager, decrease-key formulation of Prim's
//! algorithm: the heap holds exactly one live entry per frontier vertex,
//! whose priority is the cheapest known weight of an edge connecting it to
//! the growing tree. Whenever a cheaper connecting edge is discovered the
//! entry is re-prioritized in place with `change_key` and its recorded
//! parent is updated, so there is never a stale duplicate to filter out on
//! extraction (the trap of the lazy, re-insertion formulation).
//!
//! Frontier vertices enter the heap lazily on first discovery; vertices
//! never reachable from the tree are simply never extracted. On a
//! disconnected input the result covers the root's connected component only,
//! which is documented behavior rather than an error.
//!
//! # Determinism under ties
//!
//! A graph with tied edge weights can have several minimum spanning trees.
//! This implementation always produces the one selected by the heap's
//! left-preference tie-break together with the relaxation order, which is a
//! deterministic choice, not an arbitrary one. The total weight is the same
//! for every minimum spanning tree regardless.
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
//! ```

use crate::graph::SimpleGraph;
use crate::indexed_binary::IndexedMinHeap;
use crate::traits::KeyedMinHeap;
use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::fmt;

/// Error type for minimum spanning tree construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MstError {
    /// The input graph is directed; Prim's algorithm is defined only for
    /// undirected graphs
    DirectedGraph,
    /// The requested root label is absent from the graph
    RootNotFound(String),
}

impl fmt::Display for MstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MstError::DirectedGraph => {
                write!(
                    f,
                    "minimum spanning tree is defined only for undirected graphs"
                )
            }
            MstError::RootNotFound(label) => {
                write!(f, "could not find the root vertex: {label}")
            }
        }
    }
}

impl std::error::Error for MstError {}

/// Per-vertex bookkeeping during tree growth
///
/// The parent pointer is what turns an extracted heap entry back into a
/// concrete tree edge; keeping it beside the best weight (rather than inside
/// the heap) leaves the heap a pure (key, priority) structure.
struct VertexState {
    /// Tree endpoint of the cheapest known connecting edge; `None` only for
    /// the root
    parent: Option<String>,
    /// Weight of that edge
    best: OrderedFloat<f64>,
    /// Set once the vertex has been extracted into the tree
    in_tree: bool,
}

/// Computes the minimum spanning tree of `graph` rooted at `root`
///
/// Convenience entry point running [`prim`] with an [`IndexedMinHeap`].
///
/// # Errors
/// Returns [`MstError::DirectedGraph`] for directed input and
/// [`MstError::RootNotFound`] when the root label is absent. Both checks run
/// before any heap operation; no partial result is produced on failure.
pub fn minimum_spanning_tree(graph: &SimpleGraph, root: &str) -> Result<SimpleGraph, MstError> {
    prim::<IndexedMinHeap<String, OrderedFloat<f64>>>(graph, root)
}

/// Computes the minimum spanning tree using the given heap implementation
///
/// The result is a freshly constructed undirected weighted graph holding the
/// root plus, for every vertex reached, its parent edge (mirrored into both
/// adjacency lists). Vertices appear in extraction order after the root, so
/// the result's serialization is deterministic.
///
/// # Errors
/// See [`minimum_spanning_tree`].
pub fn prim<H>(graph: &SimpleGraph, root: &str) -> Result<SimpleGraph, MstError>
where
    H: KeyedMinHeap<String, OrderedFloat<f64>>,
{
    if graph.is_directed() {
        return Err(MstError::DirectedGraph);
    }
    if !graph.contains_vertex(root) {
        return Err(MstError::RootNotFound(root.to_string()));
    }

    let mut tree = SimpleGraph::new(false, true);
    tree.add_vertex(root);

    let mut states: FxHashMap<String, VertexState> = FxHashMap::default();
    states.insert(
        root.to_string(),
        VertexState {
            parent: None,
            best: OrderedFloat(0.0),
            in_tree: true,
        },
    );

    let mut heap = H::new();
    relax_frontier(graph, root, &mut states, &mut heap);

    while let Ok((label, weight)) = heap.extract_min() {
        tree.add_vertex(&label);

        let parent = {
            let state = states
                .get_mut(&label)
                .expect("every heap entry has a recorded state");
            state.in_tree = true;
            state
                .parent
                .clone()
                .expect("only the root lacks a parent, and it is never in the heap")
        };
        tree.add_edge(&parent, &label, weight.into_inner())
            .expect("both edge endpoints are already in the tree");

        relax_frontier(graph, &label, &mut states, &mut heap);
    }

    Ok(tree)
}

/// Relaxes every arc leaving `from` against the current frontier
///
/// First sighting of a vertex inserts it at the arc's weight; a cheaper
/// sighting re-prioritizes the existing entry and reparents it. Vertices
/// already in the tree are skipped.
fn relax_frontier<H>(
    graph: &SimpleGraph,
    from: &str,
    states: &mut FxHashMap<String, VertexState>,
    heap: &mut H,
) where
    H: KeyedMinHeap<String, OrderedFloat<f64>>,
{
    let arcs = match graph.neighbors(from) {
        Ok(arcs) => arcs,
        Err(_) => return,
    };

    for arc in arcs {
        let destination = arc.destination().to_string();
        let weight = OrderedFloat(arc.weight());

        match states.entry(destination.clone()) {
            Entry::Vacant(vacant) => {
                vacant.insert(VertexState {
                    parent: Some(from.to_string()),
                    best: weight,
                    in_tree: false,
                });
                let _ = heap.insert(destination, weight);
            }
            Entry::Occupied(mut occupied) => {
                let state = occupied.get_mut();
                if !state.in_tree && weight < state.best {
                    state.best = weight;
                    state.parent = Some(from.to_string());
                    let _ = heap.change_key(&destination, weight);
                }
            }
        }
    }
}
