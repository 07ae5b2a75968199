//! Type definitions for the Prim property-based tests.

/// Cost distribution strategy for generated graphs.
///
/// Controls how edge costs are assigned during graph generation,
/// producing inputs that stress different aspects of the builder.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum CostDistribution {
    /// Each edge has a distinct cost drawn from a continuous range.
    Unique,
    /// Large groups of edges share identical costs, stressing heap
    /// tie-breaking.
    ManyIdentical,
    /// Guaranteed-connected sparse graph: a random spanning tree plus a
    /// handful of extra edges.
    Sparse,
    /// Dense graph approaching a complete graph.
    Dense,
    /// Multiple components with no cross-component edges, so Prim must
    /// return a partial tree.
    Disconnected,
}

/// Fixture for Prim property tests.
///
/// Captures the vertex count, generated edges, and the cost
/// distribution used during generation, giving failure output full
/// context.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of vertices in the graph.
    pub vertices: usize,
    /// Generated `(source, target, cost)` triples.
    pub edges: Vec<(usize, usize, f64)>,
    /// Cost distribution used during generation.
    pub distribution: CostDistribution,
}
