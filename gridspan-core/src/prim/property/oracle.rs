//! Sequential Kruskal oracle for Prim property verification.
//!
//! A simple, trusted implementation of Kruskal's algorithm used only as
//! a reference oracle in tests (Kruskal as a production alternative is
//! an explicit non-goal). Because every MST of a graph component has
//! the same total cost regardless of tie-breaking, the oracle's
//! vertex-0-component cost must equal Prim's total exactly, whatever
//! order either algorithm accepted equal-cost edges in.

use super::types::GraphFixture;

/// Result of the sequential Kruskal oracle, restricted to the component
/// containing vertex 0 to match what Prim is specified to return.
#[derive(Clone, Debug)]
pub(super) struct KruskalOracle {
    /// Total cost of the MST of vertex 0's component.
    pub component_cost: f64,
    /// Number of MST edges inside vertex 0's component.
    pub component_edges: usize,
    /// Number of connected components in the whole input graph.
    pub component_count: usize,
}

/// Computes a minimum spanning forest sequentially and projects out the
/// statistics for vertex 0's component.
pub(super) fn sequential_kruskal(fixture: &GraphFixture) -> KruskalOracle {
    let vertices = fixture.vertices;
    if vertices == 0 {
        return KruskalOracle {
            component_cost: 0.0,
            component_edges: 0,
            component_count: 0,
        };
    }

    let mut sorted = fixture.edges.clone();
    sorted.sort_by(|a, b| a.2.total_cmp(&b.2));

    let mut parent: Vec<usize> = (0..vertices).collect();
    let mut accepted: Vec<(usize, usize, f64)> = Vec::new();
    let mut component_count = vertices;

    for &(source, target, cost) in &sorted {
        let root_a = find_root(&mut parent, source);
        let root_b = find_root(&mut parent, target);
        if root_a != root_b {
            parent[root_b] = root_a;
            accepted.push((source, target, cost));
            component_count -= 1;
        }
    }

    let zero_root = find_root(&mut parent, 0);
    let mut component_cost = 0.0;
    let mut component_edges = 0;
    for &(source, _, cost) in &accepted {
        if find_root(&mut parent, source) == zero_root {
            component_cost += cost;
            component_edges += 1;
        }
    }

    KruskalOracle {
        component_cost,
        component_edges,
        component_count,
    }
}

/// Path-compressing find over a plain parent array.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}
