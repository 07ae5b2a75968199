//! Matrix Market coordinate-format parsing.
//!
//! The format, as produced for grid datasets: lines starting with `%`
//! are comments; the first non-comment line is the size header
//! `rows cols nnz`; every following line is one undirected edge
//! `u v [value]` with 1-based vertex ids. Ids are translated to the
//! 0-based dense range the core expects.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use gridspan_core::Graph;

use crate::{
    cost::{CostGenerator, CostModel},
    errors::MtxError,
};

/// A graph loaded from a Matrix Market file, together with the metadata
/// the presentation layer reports.
#[derive(Debug)]
pub struct MtxSource {
    name: String,
    graph: Graph,
    declared_edge_count: usize,
}

impl MtxSource {
    /// Loads a Matrix Market file from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`MtxError::Io`] when the file cannot be opened, or any
    /// parse error from [`Self::try_from_reader`].
    pub fn try_from_path(
        name: impl Into<String>,
        path: &Path,
        costs: CostModel,
    ) -> Result<Self, MtxError> {
        let file = File::open(path).map_err(|source| MtxError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::try_from_reader(name, BufReader::new(file), costs)
    }

    /// Loads a Matrix Market document from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`MtxError`] when the stream cannot be read, the header
    /// is missing or malformed, an entry is malformed, or an edge is
    /// rejected by the graph.
    pub fn try_from_reader(
        name: impl Into<String>,
        reader: impl BufRead,
        costs: CostModel,
    ) -> Result<Self, MtxError> {
        let (graph, declared_edge_count) = parse(reader, costs)?;
        Ok(Self {
            name: name.into(),
            graph,
            declared_edge_count,
        })
    }

    /// Returns the display name of this source.
    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &str { &self.name }

    /// Returns the loaded graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &Graph { &self.graph }

    /// Consumes the source, yielding the loaded graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Returns the edge count declared by the size header. May differ
    /// from the parsed count on sloppy files; the header is reported,
    /// the parsed edges are authoritative.
    #[must_use]
    #[rustfmt::skip]
    pub const fn declared_edge_count(&self) -> usize { self.declared_edge_count }
}

/// Parses a Matrix Market stream straight into a [`Graph`], discarding
/// the header metadata.
///
/// # Errors
///
/// Returns [`MtxError`] under the same conditions as
/// [`MtxSource::try_from_reader`].
pub fn load_graph(reader: impl BufRead, costs: CostModel) -> Result<Graph, MtxError> {
    parse(reader, costs).map(|(graph, _)| graph)
}

fn parse(reader: impl BufRead, costs: CostModel) -> Result<(Graph, usize), MtxError> {
    let mut generator = match costs {
        CostModel::Uniform { seed } => Some(CostGenerator::new(seed)),
        CostModel::FromFile => None,
    };

    let mut graph: Option<Graph> = None;
    let mut declared_edge_count = 0;

    for (index, read) in reader.lines().enumerate() {
        let line = read.map_err(|source| MtxError::Read { source })?;
        let number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }

        match graph.as_mut() {
            None => {
                let (vertices, nnz) = parse_header(trimmed, number)?;
                declared_edge_count = nnz;
                graph = Some(Graph::new(vertices));
            }
            Some(populated) => {
                let (source, target, file_cost) = parse_entry(trimmed, number)?;
                let cost = match generator.as_mut() {
                    Some(generator) => generator.next_cost(),
                    None => file_cost.ok_or(MtxError::MissingCost { line: number })?,
                };
                populated.add_edge(source, target, cost)?;
            }
        }
    }

    let graph = graph.ok_or(MtxError::MissingHeader)?;
    Ok((graph, declared_edge_count))
}

/// Parses the `rows cols nnz` size header. The row count is taken as
/// the vertex count.
fn parse_header(content: &str, line: usize) -> Result<(usize, usize), MtxError> {
    let malformed = || MtxError::MalformedHeader {
        line,
        content: content.to_owned(),
    };

    let mut fields = content.split_whitespace();
    let rows: usize = fields
        .next()
        .and_then(|field| field.parse().ok())
        .ok_or_else(malformed)?;
    let _cols = fields.next().ok_or_else(malformed)?;
    let nnz: usize = fields
        .next()
        .and_then(|field| field.parse().ok())
        .ok_or_else(malformed)?;

    Ok((rows, nnz))
}

/// Parses a `u v [value]` entry, translating the 1-based ids to
/// 0-based.
fn parse_entry(content: &str, line: usize) -> Result<(usize, usize, Option<f64>), MtxError> {
    let malformed = || MtxError::MalformedEntry {
        line,
        content: content.to_owned(),
    };

    let mut fields = content.split_whitespace();
    let source = parse_vertex(fields.next(), malformed)?;
    let target = parse_vertex(fields.next(), malformed)?;

    let file_cost = match fields.next() {
        Some(field) => Some(field.parse::<f64>().map_err(|_| malformed())?),
        None => None,
    };

    Ok((source, target, file_cost))
}

fn parse_vertex(
    field: Option<&str>,
    malformed: impl Fn() -> MtxError,
) -> Result<usize, MtxError> {
    let id: usize = field
        .and_then(|value| value.parse().ok())
        .ok_or_else(&malformed)?;
    // Ids are 1-based in the file; 0 has no 0-based counterpart.
    id.checked_sub(1).ok_or_else(malformed)
}
