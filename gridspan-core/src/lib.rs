//! Gridspan core library.
//!
//! Computes a minimum spanning tree (MST) over an undirected, weighted
//! graph with Prim's algorithm and independently certifies the result
//! with a union-find verifier. The crate is pure computation: ingestion
//! and reporting live in the provider and CLI crates.
//!
//! The verifier is the system's only correctness oracle. It never
//! consults the builder's bookkeeping; it re-derives acyclicity and
//! connectivity from the candidate edge list alone, so it would catch a
//! faulty builder rather than merely echoing it.

mod dsu;
mod graph;
mod heap;
mod prim;
mod verify;

pub use crate::{
    dsu::{DisjointSet, DisjointSetError},
    graph::{Graph, GraphError, GraphErrorCode, WeightedEdge},
    heap::MinHeap,
    prim::{SpanningTree, build_mst},
    verify::{Verdict, VerifyError, verify_mst},
};
