//! Labeled adjacency-list graph container
//!
//! A deliberately simple vertex/edge store: vertices are identified by
//! string labels and kept in insertion order, each owning an ordered list of
//! outgoing arcs. An undirected logical edge is represented as two mirrored
//! arcs with equal weight, one in each endpoint's list.
//!
//! The `Display` impl renders the stable text serialization used for graph
//! equality checks: one line per vertex in insertion order,
//! `label: (neighbor, weight), ...` for weighted graphs and
//! `label: neighbor, ...` for unweighted ones.

use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for graph lookups and mutations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex label was not present in the graph
    VertexNotFound(String),
    /// No arc exists between the given origin and destination
    EdgeNotFound {
        origin: String,
        destination: String,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::VertexNotFound(label) => {
                write!(f, "could not find the vertex: {label}")
            }
            GraphError::EdgeNotFound {
                origin,
                destination,
            } => {
                write!(
                    f,
                    "could not find an edge for origin {origin} and destination {destination}"
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// A directed arc carrying a weight
///
/// Immutable once constructed. For undirected graphs every arc has a mirror
/// with origin and destination exchanged and the same weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    origin: String,
    destination: String,
    weight: f64,
}

impl Edge {
    fn new(origin: &str, destination: &str, weight: f64) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            weight,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

#[derive(Debug, Clone)]
struct Vertex {
    label: String,
    edges: Vec<Edge>,
}

/// An adjacency-list graph over string-labeled vertices
///
/// Vertices stay in insertion order (the serialization contract depends on
/// it); a label-to-slot map backs the O(1) lookups.
#[derive(Debug, Clone)]
pub struct SimpleGraph {
    vertices: Vec<Vertex>,
    index: FxHashMap<String, usize>,
    directed: bool,
    weighted: bool,
}

impl SimpleGraph {
    /// Creates an empty graph of the given kind
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self {
            vertices: Vec::new(),
            index: FxHashMap::default(),
            directed,
            weighted,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn contains_vertex(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Iterates vertex labels in insertion order
    pub fn vertex_labels(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(|vertex| vertex.label.as_str())
    }

    /// Adds a vertex, returning true if it was newly created
    ///
    /// Idempotent: adding an existing label is a no-op.
    pub fn add_vertex(&mut self, label: &str) -> bool {
        if self.index.contains_key(label) {
            return false;
        }
        self.index.insert(label.to_string(), self.vertices.len());
        self.vertices.push(Vertex {
            label: label.to_string(),
            edges: Vec::new(),
        });
        true
    }

    /// Adds an edge between two existing vertices
    ///
    /// For undirected graphs the mirrored arc is materialized as well,
    /// except for self-loops which get a single arc.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if either endpoint is missing.
    pub fn add_edge(
        &mut self,
        origin: &str,
        destination: &str,
        weight: f64,
    ) -> Result<(), GraphError> {
        let &origin_slot = self
            .index
            .get(origin)
            .ok_or_else(|| GraphError::VertexNotFound(origin.to_string()))?;
        let &destination_slot = self
            .index
            .get(destination)
            .ok_or_else(|| GraphError::VertexNotFound(destination.to_string()))?;

        self.vertices[origin_slot]
            .edges
            .push(Edge::new(origin, destination, weight));

        if !self.directed && origin != destination {
            self.vertices[destination_slot]
                .edges
                .push(Edge::new(destination, origin, weight));
        }

        Ok(())
    }

    /// Removes a vertex and its outgoing arcs
    ///
    /// Arcs pointing at the removed vertex from elsewhere are not touched.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if the label is missing.
    pub fn remove_vertex(&mut self, label: &str) -> Result<(), GraphError> {
        let slot = self
            .index
            .remove(label)
            .ok_or_else(|| GraphError::VertexNotFound(label.to_string()))?;

        self.vertices.remove(slot);
        for (i, vertex) in self.vertices.iter().enumerate().skip(slot) {
            self.index.insert(vertex.label.clone(), i);
        }
        Ok(())
    }

    /// Returns the first arc from `origin` to `destination`
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if the origin is missing and
    /// [`GraphError::EdgeNotFound`] if no such arc exists.
    pub fn get_edge(&self, origin: &str, destination: &str) -> Result<&Edge, GraphError> {
        let &slot = self
            .index
            .get(origin)
            .ok_or_else(|| GraphError::VertexNotFound(origin.to_string()))?;

        self.vertices[slot]
            .edges
            .iter()
            .find(|edge| edge.destination == destination)
            .ok_or_else(|| GraphError::EdgeNotFound {
                origin: origin.to_string(),
                destination: destination.to_string(),
            })
    }

    /// Returns the outgoing arcs of a vertex in the order they were added
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if the label is missing.
    pub fn neighbors(&self, label: &str) -> Result<&[Edge], GraphError> {
        let &slot = self
            .index
            .get(label)
            .ok_or_else(|| GraphError::VertexNotFound(label.to_string()))?;
        Ok(&self.vertices[slot].edges)
    }
}

impl fmt::Display for SimpleGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            let rendered: Vec<String> = vertex
                .edges
                .iter()
                .map(|edge| {
                    if self.weighted {
                        format!("({}, {})", edge.destination, edge.weight)
                    } else {
                        edge.destination.clone()
                    }
                })
                .collect();
            write!(f, "{}: {}", vertex.label, rendered.join(", "))?;
        }
        Ok(())
    }
}
