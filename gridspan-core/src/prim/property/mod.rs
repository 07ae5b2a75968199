//! Property-based tests for the Prim MST builder.
//!
//! Verifies the builder against a sequential Kruskal oracle restricted
//! to vertex 0's component, routes every output through the union-find
//! verifier for structural certification, and checks determinism across
//! repeated runs on graph topologies with varied cost distributions.

mod oracle;
mod strategies;
mod types;
