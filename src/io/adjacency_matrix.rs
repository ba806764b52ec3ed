//! # Adjacency Matrix
//!
//! `n` lines with `n` space-separated edge multiplicities each. The matrix must be symmetric.

use itertools::Itertools;

use super::*;

/// A GraphReader for the adjacency-matrix format
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixReader {
    /// Separator between the cells of a row
    separator: char,
}

impl Default for AdjacencyMatrixReader {
    fn default() -> Self {
        Self { separator: ' ' }
    }
}

impl AdjacencyMatrixReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator between cells
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

impl GraphReader<AdjacencyMatrixBackend> for AdjacencyMatrixReader {
    fn try_read_lines<S>(&self, lines: &[S]) -> Result<AdjacencyMatrixBackend>
    where
        S: AsRef<str>,
    {
        let n = lines.len();

        let mut rows = Vec::with_capacity(n);
        for (u, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(n);
            for token in tokens(line.as_ref(), self.separator) {
                let count: NumEdges = parse_token!(token, format!("cell of row {u}"));
                row.push(count);
            }
            raise_error_unless!(
                row.len() == n,
                ErrorKind::InvalidData,
                format!("Row {u} has {} cells, but the matrix has {n} rows", row.len())
            );
            rows.push(row);
        }

        for (u, v) in (0..n).tuple_combinations() {
            raise_error_unless!(
                rows[u][v] == rows[v][u],
                ErrorKind::InvalidData,
                format!(
                    "Asymmetric adjacency matrix: cell ({u},{v}) is {}, but cell ({v},{u}) is {}",
                    rows[u][v], rows[v][u]
                )
            );
        }

        for (u, row) in rows.iter().enumerate() {
            raise_error_unless!(
                AdjMatrix::checked_degree(row, u).is_some(),
                ErrorKind::InvalidData,
                format!("Degree of node {u} exceeds {}", NumEdges::MAX)
            );
        }
        raise_error_unless!(
            AdjMatrix::checked_number_of_edges(&rows).is_some(),
            ErrorKind::InvalidData,
            format!("Number of edges exceeds {}", NumEdges::MAX)
        );

        Ok(Backend::new(AdjMatrix::from_rows(rows)))
    }
}

/// A writer for the adjacency-matrix format
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixWriter {
    /// Separator between the cells of a row
    separator: char,
}

impl Default for AdjacencyMatrixWriter {
    fn default() -> Self {
        Self { separator: ' ' }
    }
}

impl AdjacencyMatrixWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator between cells
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

impl<G> GraphWriter<G> for AdjacencyMatrixWriter
where
    G: GraphNodeOrder + GraphEdgeOrder,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        let n = graph.len();
        let mut rows = vec![vec![0 as NumEdges; n]; n];
        for Edge(u, v) in graph.edges() {
            rows[u as usize][v as usize] += 1;
            if u != v {
                rows[v as usize][u as usize] += 1;
            }
        }

        for row in rows {
            writeln!(writer, "{}", row.iter().join(&self.separator.to_string()))?;
        }

        writer.flush()
    }
}
