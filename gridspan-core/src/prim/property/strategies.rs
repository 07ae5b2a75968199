//! Strategy builders for the Prim property-based tests.
//!
//! Generates graphs with varied cost distributions and topologies using
//! a seeded [`SmallRng`] so every failing case replays exactly.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{CostDistribution, GraphFixture};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs, kept smaller to avoid
/// quadratic edge explosion.
const DENSE_MAX_VERTICES: usize = 24;

/// Generates graph fixtures covering all five cost distributions.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<CostDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific cost distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(distribution: CostDistribution, rng: &mut SmallRng) -> GraphFixture {
    match distribution {
        CostDistribution::Unique => generate_probabilistic(rng, MAX_VERTICES, (0.2, 0.6), |r| {
            r.gen_range(0.1_f64..100.0)
        }, CostDistribution::Unique),
        CostDistribution::ManyIdentical => generate_identical_costs(rng),
        CostDistribution::Sparse => generate_sparse(rng),
        CostDistribution::Dense => {
            generate_probabilistic(rng, DENSE_MAX_VERTICES, (0.7, 0.95), |r| {
                r.gen_range(0.1_f64..100.0)
            }, CostDistribution::Dense)
        }
        CostDistribution::Disconnected => generate_disconnected(rng),
    }
}

/// Generates a graph by probabilistically adding edges between all
/// unique vertex pairs, with costs drawn by the supplied generator.
fn generate_probabilistic(
    rng: &mut SmallRng,
    max_vertices: usize,
    edge_prob_range: (f64, f64),
    mut cost_generator: impl FnMut(&mut SmallRng) -> f64,
    distribution: CostDistribution,
) -> GraphFixture {
    let vertices = rng.gen_range(MIN_VERTICES..=max_vertices);
    let edge_probability: f64 = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = Vec::new();

    for i in 0..vertices {
        for j in (i + 1)..vertices {
            if rng.gen_bool(edge_probability) {
                edges.push((i, j, cost_generator(rng)));
            }
        }
    }

    // Guarantee at least one edge so Prim always has a frontier to seed.
    if edges.is_empty() {
        edges.push((0, 1, cost_generator(rng)));
    }

    GraphFixture {
        vertices,
        edges,
        distribution,
    }
}

/// Generates a graph where large groups of edges share a cost drawn
/// from a small pool, the key stress case for heap tie-breaking.
fn generate_identical_costs(rng: &mut SmallRng) -> GraphFixture {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<f64> = (0..pool_size)
        .map(|_| f64::from(rng.gen_range(1_u8..=10)))
        .collect();

    generate_probabilistic(
        rng,
        MAX_VERTICES,
        (0.3, 0.7),
        move |r| pool[r.gen_range(0..pool.len())],
        CostDistribution::ManyIdentical,
    )
}

/// Generates a guaranteed-connected sparse graph: a random spanning
/// tree via a shuffled permutation walk, plus a small number of extras.
fn generate_sparse(rng: &mut SmallRng) -> GraphFixture {
    let vertices = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = Vec::new();

    let mut perm: Vec<usize> = (0..vertices).collect();
    shuffle(&mut perm, rng);
    for i in 1..vertices {
        edges.push((perm[i - 1], perm[i], rng.gen_range(0.1_f64..100.0)));
    }

    let extra_count = rng.gen_range(vertices / 2..=vertices);
    for _ in 0..extra_count {
        let i = rng.gen_range(0..vertices);
        let j = rng.gen_range(0..vertices);
        if i != j {
            edges.push((i, j, rng.gen_range(0.1_f64..100.0)));
        }
    }

    GraphFixture {
        vertices,
        edges,
        distribution: CostDistribution::Sparse,
    }
}

/// Generates a graph with 2-5 components, each internally connected by
/// its own spanning chain plus random extras. No cross-component edges.
fn generate_disconnected(rng: &mut SmallRng) -> GraphFixture {
    let component_count = rng.gen_range(2..=5);
    let component_sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(2..=10))
        .collect();
    let vertices: usize = component_sizes.iter().sum();
    let mut edges = Vec::new();
    let mut offset = 0;

    for &size in &component_sizes {
        for i in 1..size {
            edges.push((offset + i - 1, offset + i, rng.gen_range(0.1_f64..100.0)));
        }
        let extras = rng.gen_range(0..=size);
        for _ in 0..extras {
            let i = rng.gen_range(0..size);
            let j = rng.gen_range(0..size);
            if i != j {
                edges.push((offset + i, offset + j, rng.gen_range(0.1_f64..100.0)));
            }
        }
        offset += size;
    }

    GraphFixture {
        vertices,
        edges,
        distribution: CostDistribution::Disconnected,
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Manual `Arbitrary` so the distribution weighting can bias towards
// `ManyIdentical`, the most important stress case for the heap.
impl proptest::arbitrary::Arbitrary for CostDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
