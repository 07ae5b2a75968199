//! Edge-cost assignment for datasets with and without a value column.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// How installation costs are assigned to parsed edges.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum CostModel {
    /// Draw each cost uniformly from `[1.0, 100.0)` with a seeded
    /// generator. The seed makes a given file load identically on every
    /// run, so downstream MST output stays reproducible.
    Uniform {
        /// Seed for the cost generator.
        seed: u64,
    },
    /// Use the third column of each entry as the cost.
    FromFile,
}

/// Draws synthetic costs for a [`CostModel::Uniform`] load.
pub(crate) struct CostGenerator {
    rng: SmallRng,
}

impl CostGenerator {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub(crate) fn next_cost(&mut self) -> f64 {
        self.rng.gen_range(1.0_f64..100.0)
    }
}
