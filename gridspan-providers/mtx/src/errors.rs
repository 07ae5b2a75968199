//! Error types for Matrix Market ingestion.

use std::{io, path::PathBuf};

use gridspan_core::GraphError;
use thiserror::Error;

/// Errors raised while loading a Matrix Market file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MtxError {
    /// Opening the file at the given path failed.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading a line from the input stream failed.
    #[error("failed to read input: {source}")]
    Read {
        /// Underlying read error.
        #[source]
        source: io::Error,
    },
    /// The input ended before a size header was found.
    #[error("input contains no size header line")]
    MissingHeader,
    /// The size header did not hold three integer fields.
    #[error("malformed size header on line {line}: `{content}`")]
    MalformedHeader {
        /// One-based line number of the offending line.
        line: usize,
        /// The raw line content.
        content: String,
    },
    /// A data line did not hold two 1-based vertex ids.
    #[error("malformed entry on line {line}: `{content}`")]
    MalformedEntry {
        /// One-based line number of the offending line.
        line: usize,
        /// The raw line content.
        content: String,
    },
    /// The cost model requires a third column the entry lacks.
    #[error("entry on line {line} has no cost column, but costs were requested from the file")]
    MissingCost {
        /// One-based line number of the offending line.
        line: usize,
    },
    /// The assembled edge was rejected by the graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
