//! Matrix Market ingestion provider for gridspan.
//!
//! Loads an undirected weighted [`Graph`](gridspan_core::Graph) from a
//! sparse-matrix text file in the Matrix Market coordinate format used
//! by grid datasets such as `power-US-Grid.mtx`. All randomness in the
//! system lives here: datasets without a cost column get synthetic
//! installation costs from a seeded generator, keeping the core
//! deterministic and testable.

mod cost;
mod errors;
mod ingest;


pub use crate::{
    cost::CostModel,
    errors::MtxError,
    ingest::{MtxSource, load_graph},
};
