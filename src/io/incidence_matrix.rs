//! # Incidence Matrix
//!
//! `n` lines with `m` space-separated entries each, one column per edge.
//! A column holds `1` at both endpoints of its edge or a single `2` for a self-loop.

use itertools::Itertools;

use super::*;

/// A GraphReader for the incidence-matrix format
#[derive(Debug, Clone)]
pub struct IncidenceMatrixReader {
    /// Separator between the entries of a row
    separator: char,
}

impl Default for IncidenceMatrixReader {
    fn default() -> Self {
        Self { separator: ' ' }
    }
}

impl IncidenceMatrixReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator between entries
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

impl GraphReader<IncidenceMatrixBackend> for IncidenceMatrixReader {
    fn try_read_lines<S>(&self, lines: &[S]) -> Result<IncidenceMatrixBackend>
    where
        S: AsRef<str>,
    {
        let mut rows: Vec<Vec<Incidence>> = Vec::with_capacity(lines.len());
        for (u, line) in lines.iter().enumerate() {
            let mut row = Vec::new();
            for token in tokens(line.as_ref(), self.separator) {
                let entry: Incidence = parse_token!(token, format!("entry of row {u}"));
                raise_error_unless!(
                    entry <= 2,
                    ErrorKind::InvalidData,
                    format!("Entry {entry} of row {u} is not in {{0, 1, 2}}")
                );
                row.push(entry);
            }
            if let Some(first) = rows.first() {
                raise_error_unless!(
                    row.len() == first.len(),
                    ErrorKind::InvalidData,
                    format!("Row {u} has {} entries, but row 0 has {}", row.len(), first.len())
                );
            }
            rows.push(row);
        }

        let num_columns = rows.first().map_or(0, |row| row.len());
        for e in 0..num_columns {
            let sum = IncidenceMatrix::column_sum(&rows, e);
            raise_error_unless!(
                sum == 2,
                ErrorKind::InvalidData,
                format!("Column {e} does not describe an edge: its entries sum to {sum}, not 2")
            );
        }

        Ok(Backend::new(IncidenceMatrix::from_rows(rows)))
    }
}

/// A writer for the incidence-matrix format.
/// Columns follow the order of [`GraphEdgeOrder::edges`].
#[derive(Debug, Clone)]
pub struct IncidenceMatrixWriter {
    /// Separator between the entries of a row
    separator: char,
}

impl Default for IncidenceMatrixWriter {
    fn default() -> Self {
        Self { separator: ' ' }
    }
}

impl IncidenceMatrixWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator between entries
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

impl<G> GraphWriter<G> for IncidenceMatrixWriter
where
    G: GraphNodeOrder + GraphEdgeOrder,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        let edges = graph.edges();
        let mut rows = vec![vec![0 as Incidence; edges.len()]; graph.len()];
        for (e, &Edge(u, v)) in edges.iter().enumerate() {
            rows[u as usize][e] += 1;
            rows[v as usize][e] += 1;
        }

        for row in rows {
            writeln!(writer, "{}", row.iter().join(&self.separator.to_string()))?;
        }

        writer.flush()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_multigraph() {
        let graph = IncidenceMatrixReader::new()
            .try_read_graph("1 1 0 0\n1 1 2 1\n0 0 0 1\n".as_bytes())
            .unwrap();

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.degree_of_each_vertex(), vec![2, 5, 1]);
        assert_eq!(
            graph.edges(),
            vec![Edge(0, 1), Edge(0, 1), Edge(1, 1), Edge(1, 2)]
        );
    }

    #[test]
    fn read_without_edges() {
        let graph = IncidenceMatrixReader::new()
            .try_read_lines(&["", ""])
            .unwrap();

        assert_eq!(graph.number_of_nodes(), 2);
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn reject_invalid_input() {
        let reader = IncidenceMatrixReader::new();

        for lines in [
            vec!["1 0", "1"],
            vec!["1 3", "1 0"],
            vec!["1", "0"],
            vec!["1 1", "1 0", "1 1"],
            vec!["2", "1"],
        ] {
            let err = reader.try_read_lines(&lines).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData);
        }
    }

    #[test]
    fn read_with_separator() {
        let graph = IncidenceMatrixReader::new()
            .separator(',')
            .try_read_lines(&["1,0", "1,2"])
            .unwrap();

        assert_eq!(graph.edges(), vec![Edge(0, 1), Edge(1, 1)]);
    }

    #[test]
    fn write_multigraph() {
        let graph = AdjacencyListBackend::from_edges(3, [(0, 1), (1, 1), (1, 0), (2, 1)]);

        let mut buffer = Vec::new();
        IncidenceMatrixWriter::new()
            .try_write_graph(&graph, &mut buffer)
            .unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "1 1 0 0\n1 1 2 1\n0 0 0 1\n"
        );
    }

    #[test]
    fn write_with_separator() {
        let graph = AdjacencyMatrixBackend::from_edges(2, [(1, 1), (1, 0)]);

        let mut buffer = Vec::new();
        IncidenceMatrixWriter::new()
            .separator('\t')
            .try_write_graph(&graph, &mut buffer)
            .unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "1\t0\n1\t2\n");
    }
}
