//! Minimum spanning tree construction with Prim's algorithm.
//!
//! Grows a single tree from vertex 0, keeping the crossing edges of the
//! visited frontier in a cost-ordered [`MinHeap`]. There is no
//! decrease-key: when a cheaper route to a vertex lands in the heap, the
//! stale entries for that vertex are simply filtered out at pop time.
//! O(E log V) overall.

use tracing::debug;

use crate::{
    graph::{Graph, WeightedEdge},
    heap::MinHeap,
};

/// The result of a minimum spanning tree computation.
///
/// A pure value: it owns its edge sequence independently of the graph it
/// was built from. Over a disconnected graph it covers only the
/// component containing vertex 0, which [`spans`](Self::spans) exposes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanningTree {
    edges: Vec<WeightedEdge>,
    total_cost: f64,
}

impl SpanningTree {
    /// Returns the accepted edges in acceptance order. Each record is
    /// oriented from the tree side (`source`) to the vertex it added
    /// (`target`).
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[WeightedEdge] { &self.edges }

    /// Returns the summed cost of the accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_cost(&self) -> f64 { self.total_cost }

    /// Returns the number of accepted edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no edge was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns `true` when the tree reaches every one of `vertices`
    /// vertices, i.e. it holds exactly `vertices - 1` edges.
    #[must_use]
    pub fn spans(&self, vertices: usize) -> bool {
        self.edges.len() == vertices.saturating_sub(1)
    }
}

/// Computes a minimum spanning tree of `graph` with Prim's algorithm,
/// starting from vertex 0.
///
/// Vertices unreachable from vertex 0 are silently excluded: the result
/// is then a valid tree of vertex 0's component only, detectable by the
/// caller through `tree.spans(graph.vertices())` or the edge count. The
/// builder never fails on disconnection; connectivity judgement belongs
/// to [`crate::verify_mst`]. An empty graph yields an empty tree at
/// cost zero.
///
/// Deterministic for a fixed edge insertion order: the frontier orders
/// by `f64::total_cmp` on cost and breaks ties by heap position alone.
#[must_use]
pub fn build_mst(graph: &Graph) -> SpanningTree {
    let vertices = graph.vertices();
    if vertices == 0 {
        return SpanningTree::default();
    }

    let mut visited = vec![false; vertices];
    visited[0] = true;

    let mut frontier =
        MinHeap::with_comparator(|a: &WeightedEdge, b: &WeightedEdge| a.cost().total_cmp(&b.cost()));
    for edge in graph.neighbours(0) {
        frontier.push(*edge);
    }

    let mut edges: Vec<WeightedEdge> = Vec::with_capacity(vertices.saturating_sub(1));
    let mut total_cost = 0.0;

    while edges.len() < vertices - 1 {
        let Some(edge) = frontier.pop() else { break };

        // A stale frontier entry pointing back into the tree; expected,
        // not an error.
        if visited[edge.target()] {
            continue;
        }

        visited[edge.target()] = true;
        total_cost += edge.cost();
        for next in graph.neighbours(edge.target()) {
            if !visited[next.target()] {
                frontier.push(*next);
            }
        }
        edges.push(edge);
    }

    debug!(
        vertices,
        accepted = edges.len(),
        total_cost,
        spanning = edges.len() == vertices - 1,
        "prim construction finished"
    );

    SpanningTree { edges, total_cost }
}

#[cfg(test)]
mod property;
