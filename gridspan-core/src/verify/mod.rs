//! Post-hoc certification of a candidate spanning tree.
//!
//! Validates any purported MST edge list against a fresh
//! [`DisjointSet`], independently of how the list was produced: no
//! cycles plus a single connected component over `[0, vertices)` is
//! sufficient for a valid spanning tree (and forces exactly
//! `vertices - 1` edges). Cycles and disconnection are reported
//! outcomes, never errors; only a malformed candidate referencing a
//! vertex outside the graph is an error.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::{
    dsu::{DisjointSet, DisjointSetError},
    graph::WeightedEdge,
};

/// Errors raised while verifying a candidate edge list.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum VerifyError {
    /// A candidate edge referenced a vertex outside `[0, vertices)`.
    /// This is a caller contract breach, distinct from an invalid
    /// verdict.
    #[error("candidate edge references vertex {vertex}, but the graph has {vertex_count} vertices")]
    InvalidVertex {
        /// The out-of-range vertex id.
        vertex: usize,
        /// The vertex count supplied to the verifier.
        vertex_count: usize,
    },
}

impl From<DisjointSetError> for VerifyError {
    fn from(err: DisjointSetError) -> Self {
        match err {
            DisjointSetError::OutOfBounds { node, len } => Self::InvalidVertex {
                vertex: node,
                vertex_count: len,
            },
        }
    }
}

/// The verifier's judgement of a candidate edge list.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum Verdict {
    /// The candidate is a valid spanning tree: acyclic and reaching
    /// every vertex.
    Valid,
    /// The named edge closed a cycle; edges after it were not examined.
    Cycle {
        /// The first edge whose endpoints were already connected.
        edge: WeightedEdge,
    },
    /// Every union succeeded but the named vertex does not share
    /// vertex 0's representative.
    Disconnected {
        /// The lowest vertex id unreachable from vertex 0.
        vertex: usize,
    },
}

impl Verdict {
    /// Returns `true` only when the candidate was certified valid.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("valid spanning tree"),
            Self::Cycle { edge } => write!(
                f,
                "cycle detected at edge {} - {}",
                edge.source(),
                edge.target()
            ),
            Self::Disconnected { vertex } => {
                write!(f, "vertex {vertex} is not connected to vertex 0")
            }
        }
    }
}

/// Certifies whether `edges` form a valid spanning tree over
/// `[0, vertices)`.
///
/// Unions each edge in order into a fresh [`DisjointSet`]; the first
/// edge that fails to merge ends verification with a
/// [`Verdict::Cycle`]. When every union succeeds, each vertex in
/// `[1, vertices)` must share vertex 0's representative; the first
/// mismatch yields [`Verdict::Disconnected`]. An empty vertex set with
/// no edges is trivially valid.
///
/// The check accepts any candidate, not only [`crate::build_mst`]
/// output, and never consults the builder's internal bookkeeping.
///
/// # Errors
///
/// Returns [`VerifyError::InvalidVertex`] when a candidate edge
/// references a vertex id outside `[0, vertices)`.
pub fn verify_mst(edges: &[WeightedEdge], vertices: usize) -> Result<Verdict, VerifyError> {
    let mut components = DisjointSet::new(vertices);

    for edge in edges {
        if !components.union(edge.source(), edge.target())? {
            debug!(source = edge.source(), target = edge.target(), "cycle edge rejected");
            return Ok(Verdict::Cycle { edge: *edge });
        }
    }

    if vertices == 0 {
        return Ok(Verdict::Valid);
    }

    let root = components.find(0)?;
    for vertex in 1..vertices {
        if components.find(vertex)? != root {
            debug!(vertex, "vertex unreachable from vertex 0");
            return Ok(Verdict::Disconnected { vertex });
        }
    }

    Ok(Verdict::Valid)
}
