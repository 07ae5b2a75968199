//! Seeded synthetic grid generation for benchmarks.

use gridspan_core::{Graph, GraphError};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Errors raised while generating a synthetic benchmark grid.
#[derive(Debug, Error)]
pub enum GridSetupError {
    /// The generated edge was rejected by the graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Configuration for a synthetic benchmark grid.
#[derive(Clone, Copy, Debug)]
pub struct GridConfig {
    /// Number of stations in the grid.
    pub stations: usize,
    /// Number of redundant links added on top of the connecting backbone.
    pub extra_links: usize,
    /// Seed for topology and cost generation.
    pub seed: u64,
}

/// Generates a connected grid with `stations` vertices.
///
/// Every vertex past the first is linked to a random earlier vertex, so the
/// grid is always connected, then `extra_links` redundant links are layered on
/// top. Costs are drawn uniformly from `[1.0, 100.0)`.
///
/// # Errors
/// Returns [`GridSetupError`] if a generated edge is rejected by the graph.
pub fn generate_grid(config: &GridConfig) -> Result<Graph, GridSetupError> {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = Graph::new(config.stations);
    if config.stations < 2 {
        return Ok(graph);
    }

    for vertex in 1..config.stations {
        let anchor = rng.gen_range(0..vertex);
        graph.add_edge(anchor, vertex, rng.gen_range(1.0_f64..100.0))?;
    }

    for _ in 0..config.extra_links {
        let source = rng.gen_range(0..config.stations);
        let target = rng.gen_range(0..config.stations);
        if source == target {
            continue;
        }
        graph.add_edge(source, target, rng.gen_range(1.0_f64..100.0))?;
    }

    Ok(graph)
}
