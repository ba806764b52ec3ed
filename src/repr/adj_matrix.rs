use itertools::Itertools;

use super::*;

/// Multigraph stored as a symmetric `n x n` matrix of edge multiplicities.
/// The number of self-loops at `u` is stored once in cell `(u, u)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjMatrix {
    n: NumNodes,
    cells: Vec<NumEdges>,
    num_edges: NumEdges,
}

impl AdjMatrix {
    /// Creates the encoding from the rows of a symmetric square matrix
    /// ** Panics if the matrix is not square or not symmetric, or if the number of edges or
    /// the degree of a node exceeds `NumEdges::MAX` **
    pub fn from_rows(rows: Vec<Vec<NumEdges>>) -> Self {
        let n = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == n),
            "adjacency matrix is not square"
        );
        assert!(
            (0..n)
                .tuple_combinations()
                .all(|(u, v)| rows[u][v] == rows[v][u]),
            "adjacency matrix is not symmetric"
        );
        assert!(
            rows.iter()
                .enumerate()
                .all(|(u, row)| Self::checked_degree(row, u).is_some()),
            "degree exceeds NumEdges::MAX"
        );
        let num_edges =
            Self::checked_number_of_edges(&rows).expect("number of edges exceeds NumEdges::MAX");

        Self {
            n: n as NumNodes,
            cells: rows.into_iter().flatten().collect(),
            num_edges,
        }
    }

    /// Returns the number of edges of a symmetric matrix, or `None` if it overflows
    pub fn checked_number_of_edges(rows: &[Vec<NumEdges>]) -> Option<NumEdges> {
        rows.iter()
            .enumerate()
            .flat_map(|(u, row)| &row[u..])
            .try_fold(0 as NumEdges, |total, &count| total.checked_add(count))
    }

    /// Returns the degree of node `u` given its row, or `None` if it overflows
    /// ** Panics if `u >= row.len()` **
    pub fn checked_degree(row: &[NumEdges], u: usize) -> Option<NumEdges> {
        row.iter()
            .try_fold(row[u], |degree, &count| degree.checked_add(count))
    }

    /// Returns the number of edges between `u` and `v`
    /// ** Panics if `u >= n || v >= n` **
    pub fn multiplicity(&self, u: Node, v: Node) -> NumEdges {
        self.cells[self.index(u, v)]
    }

    /// Returns the row of `u`
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[NumEdges] {
        let n = self.n as usize;
        &self.cells[u as usize * n..(u as usize + 1) * n]
    }

    fn index(&self, u: Node, v: Node) -> usize {
        assert!(u < self.n && v < self.n);
        u as usize * self.n as usize + v as usize
    }

    fn decrement(&mut self, u: Node, v: Node) {
        let uv = self.index(u, v);
        self.cells[uv] -= 1;
        if u != v {
            let vu = self.index(v, u);
            self.cells[vu] -= 1;
        }
    }
}

impl Representation for AdjMatrix {
    const FORMAT: FileFormat = FileFormat::AdjacencyMatrix;

    fn new(n: NumNodes) -> Self {
        Self {
            n,
            cells: vec![0; n as usize * n as usize],
            num_edges: 0,
        }
    }

    fn add_edge(&mut self, u: Node, v: Node) {
        let uv = self.index(u, v);
        self.cells[uv] += 1;
        if u != v {
            let vu = self.index(v, u);
            self.cells[vu] += 1;
        }
        self.num_edges += 1;
    }

    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.row(u)
            .iter()
            .enumerate()
            .filter(move |&(v, &count)| count > 0 && v as Node != u)
            .map(|(v, _)| v as Node)
    }

    fn degree_of(&self, u: Node) -> NumEdges {
        self.row(u).iter().sum::<NumEdges>() + self.multiplicity(u, u)
    }

    fn incident_edges_of(&self, u: Node) -> NumEdges {
        self.row(u).iter().sum()
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.n).flat_map(move |u| {
            (u..self.n).flat_map(move |v| {
                std::iter::repeat_n(Edge(u, v), self.multiplicity(u, v) as usize)
            })
        })
    }

    fn try_remove_first_edge_at(&mut self, u: Node) -> Option<Node> {
        let v = self.row(u).iter().position(|&count| count > 0)? as Node;
        self.decrement(u, v);
        self.num_edges -= 1;
        Some(v)
    }

    fn remove_edges_at_node(&mut self, u: Node) {
        for v in 0..self.n {
            let uv = self.index(u, v);
            let vu = self.index(v, u);
            self.num_edges -= self.cells[uv];
            self.cells[uv] = 0;
            self.cells[vu] = 0;
        }
    }
}
