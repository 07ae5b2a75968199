//! Undirected weighted graph model consumed by the MST builder.
//!
//! Vertex ids form the dense integer range `[0, vertices)`, so adjacency
//! is a direct array-indexed list of lists rather than an associative
//! map. Each undirected edge is stored once per endpoint in mirrored
//! orientation, letting traversal start from either side, while the flat
//! edge list keeps the original orientation exactly once.

use std::fmt;

use thiserror::Error;

/// Errors raised while populating a [`Graph`].
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum GraphError {
    /// An edge referenced a vertex id outside `[0, vertices)`.
    #[error("edge references vertex {vertex}, but the graph has {vertex_count} vertices")]
    InvalidVertex {
        /// The out-of-range vertex id supplied by the caller.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge carried a NaN or infinite cost.
    ///
    /// The endpoint fields avoid the name `source` so thiserror does
    /// not treat a vertex id as the error's cause.
    #[error("edge ({source_vertex}, {target_vertex}) has non-finite cost {cost}")]
    NonFiniteCost {
        /// The source endpoint of the offending edge.
        source_vertex: usize,
        /// The target endpoint of the offending edge.
        target_vertex: usize,
        /// The rejected cost value.
        cost: f64,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::InvalidVertex { .. } => GraphErrorCode::InvalidVertex,
            Self::NonFiniteCost { .. } => GraphErrorCode::NonFiniteCost,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// An edge referenced a vertex id outside the graph.
    InvalidVertex,
    /// An edge carried a non-finite cost.
    NonFiniteCost,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidVertex => "GRAPH_INVALID_VERTEX",
            Self::NonFiniteCost => "GRAPH_NON_FINITE_COST",
        }
    }
}

impl fmt::Display for GraphErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed record of an undirected weighted edge.
///
/// `source` is the endpoint the record is stored under; `target` is the
/// far endpoint. The same undirected edge appears in both orientations
/// inside the adjacency structure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedEdge {
    source: usize,
    target: usize,
    cost: f64,
}

impl WeightedEdge {
    /// Creates an edge record. Range and finiteness are validated by
    /// [`Graph::add_edge`]; candidate lists handed straight to the
    /// verifier are validated there instead.
    #[must_use]
    pub const fn new(source: usize, target: usize, cost: f64) -> Self {
        Self {
            source,
            target,
            cost,
        }
    }

    /// Returns the endpoint this record is stored under.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the far endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the installation cost of the connection.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cost(&self) -> f64 { self.cost }

    /// Returns the record with its endpoints swapped.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            cost: self.cost,
        }
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({:.2})", self.source, self.target, self.cost)
    }
}

/// An undirected weighted graph over the vertex set `{0, .., vertices - 1}`.
///
/// Immutable once populated for the purposes of MST computation;
/// [`crate::build_mst`] only reads it. Isolated vertices are legal and
/// simply carry an empty adjacency row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    vertices: usize,
    edges: Vec<WeightedEdge>,
    adjacency: Vec<Vec<WeightedEdge>>,
}

impl Graph {
    /// Creates a graph with `vertices` vertices and no edges.
    #[must_use]
    pub fn new(vertices: usize) -> Self {
        Self {
            vertices,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Adds the undirected edge `(source, target)` with the given cost.
    ///
    /// The edge lands once in the flat edge list in its original
    /// orientation, and once per endpoint (mirrored) in the adjacency
    /// structure. Zero and negative costs are accepted; the algorithms
    /// order them like any other value.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] when either endpoint falls
    /// outside `[0, vertices)` and [`GraphError::NonFiniteCost`] when
    /// the cost is NaN or infinite.
    pub fn add_edge(&mut self, source: usize, target: usize, cost: f64) -> Result<(), GraphError> {
        for vertex in [source, target] {
            if vertex >= self.vertices {
                return Err(GraphError::InvalidVertex {
                    vertex,
                    vertex_count: self.vertices,
                });
            }
        }
        if !cost.is_finite() {
            return Err(GraphError::NonFiniteCost {
                source_vertex: source,
                target_vertex: target,
                cost,
            });
        }

        let edge = WeightedEdge::new(source, target, cost);
        self.edges.push(edge);
        self.adjacency[source].push(edge);
        self.adjacency[target].push(edge.reversed());
        Ok(())
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertices(&self) -> usize { self.vertices }

    /// Returns every edge once, in insertion order and original orientation.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[WeightedEdge] { &self.edges }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edge records incident to `vertex`, each oriented
    /// outward from it. Out-of-range vertices have no neighbours.
    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> &[WeightedEdge] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Returns the summed cost of connecting every edge in the graph.
    ///
    /// Useful as the baseline when reporting how much a spanning tree
    /// saves over installing every connection.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.edges.iter().map(WeightedEdge::cost).sum()
    }
}
