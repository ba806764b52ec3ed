//! # Adjacency List
//!
//! One line per node, holding the comma-separated ids of its neighbors (`0`-based).
//! The order of a line is kept and determines the order in which edges are traversed.

use itertools::Itertools;

use super::*;

/// A GraphReader for the adjacency-list format
#[derive(Debug, Clone)]
pub struct AdjacencyListReader {
    /// Separator between neighbors of a line
    separator: char,
}

impl Default for AdjacencyListReader {
    fn default() -> Self {
        Self { separator: ',' }
    }
}

impl AdjacencyListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator between neighbors
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

impl GraphReader<AdjacencyListBackend> for AdjacencyListReader {
    fn try_read_lines<S>(&self, lines: &[S]) -> Result<AdjacencyListBackend>
    where
        S: AsRef<str>,
    {
        let n = lines.len() as NumNodes;

        let mut lists = Vec::with_capacity(lines.len());
        for (u, line) in lines.iter().enumerate() {
            let mut list = Vec::new();
            for token in tokens(line.as_ref(), self.separator) {
                let v: Node = parse_token!(token, format!("neighbor of node {u}"));
                raise_error_unless!(
                    v < n,
                    ErrorKind::InvalidData,
                    format!("Neighbor {v} of node {u} is out of range 0..{n}")
                );
                list.push(v);
            }
            lists.push(list);
        }

        check_symmetry(&lists)?;

        Ok(Backend::new(AdjList::from_lists(lists)))
    }
}

/// Every edge `{u, v}` must be listed equally often at `u` and at `v`
fn check_symmetry(lists: &[Vec<Node>]) -> Result<()> {
    match AdjList::find_asymmetry(lists) {
        None => Ok(()),
        Some(Asymmetry { u, v, uv, vu }) => Err(io_error!(
            ErrorKind::InvalidData,
            format!(
                "Asymmetric adjacency: node {u} lists {v} {uv} time(s), \
                 but node {v} lists {u} {vu} time(s)"
            )
        )),
    }
}

/// A writer for the adjacency-list format
#[derive(Debug, Clone)]
pub struct AdjacencyListWriter {
    /// Separator between neighbors of a line
    separator: char,
}

impl Default for AdjacencyListWriter {
    fn default() -> Self {
        Self { separator: ',' }
    }
}

impl AdjacencyListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator between neighbors
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

impl<G> GraphWriter<G> for AdjacencyListWriter
where
    G: GraphNodeOrder + GraphEdgeOrder,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        let mut lists = vec![Vec::new(); graph.len()];
        for Edge(u, v) in graph.edges() {
            lists[u as usize].push(v);
            if u != v {
                lists[v as usize].push(u);
            }
        }

        for list in lists {
            writeln!(writer, "{}", list.iter().join(&self.separator.to_string()))?;
        }

        writer.flush()
    }
}
