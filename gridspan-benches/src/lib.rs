//! Shared fixtures for gridspan benchmarks.
//!
//! Provides seeded synthetic grid generation so benchmark runs are
//! reproducible across machines and invocations.

pub mod source;
