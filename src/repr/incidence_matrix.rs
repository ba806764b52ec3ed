use itertools::Itertools;

use super::*;

/// Entry of an [`IncidenceMatrix`]: `0` (not incident), `1` (endpoint) or `2` (self-loop)
pub type Incidence = u8;

/// Multigraph stored as an `n x m` matrix with one column per edge.
///
/// A column holds two `1`-entries at the endpoints of its edge, or a single `2`-entry for a
/// self-loop. Removing an edge clears its column, so the number of columns never shrinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidenceMatrix {
    rows: Vec<Vec<Incidence>>,
    num_columns: usize,
    num_edges: NumEdges,
}

impl IncidenceMatrix {
    /// Creates the encoding from its rows
    /// ** Panics if the rows differ in length or a column does not describe exactly one edge **
    pub fn from_rows(rows: Vec<Vec<Incidence>>) -> Self {
        let num_columns = rows.first().map_or(0, |row| row.len());
        assert!(
            rows.iter().all(|row| row.len() == num_columns),
            "rows of the incidence matrix differ in length"
        );
        assert!(
            (0..num_columns).all(|e| Self::column_sum(&rows, e) == 2),
            "column of the incidence matrix does not describe an edge"
        );

        Self {
            rows,
            num_columns,
            num_edges: num_columns as NumEdges,
        }
    }

    /// Returns the sum of the entries in column `e`, which is `2` for every edge
    /// ** Panics if a row has no column `e` **
    pub fn column_sum(rows: &[Vec<Incidence>], e: usize) -> usize {
        rows.iter().map(|row| row[e] as usize).sum()
    }

    /// Returns the number of columns including cleared ones
    pub fn number_of_columns(&self) -> usize {
        self.num_columns
    }

    /// Returns the row of `u`
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[Incidence] {
        &self.rows[u as usize]
    }

    /// Returns the endpoint of edge `e` other than `u`, or `u` itself for a self-loop.
    /// Returns `None` if `u` is not incident to `e`.
    fn other_endpoint(&self, u: Node, e: usize) -> Option<Node> {
        match self.rows[u as usize][e] {
            0 => None,
            2 => Some(u),
            _ => self
                .rows
                .iter()
                .enumerate()
                .find(|&(w, row)| w as Node != u && row[e] == 1)
                .map(|(w, _)| w as Node),
        }
    }

    /// Returns the smallest endpoint of edge `e` if the column is not cleared
    fn first_endpoint(&self, e: usize) -> Option<Node> {
        self.rows
            .iter()
            .position(|row| row[e] > 0)
            .map(|u| u as Node)
    }

    fn clear_column(&mut self, u: Node, v: Node, e: usize) {
        self.rows[u as usize][e] = 0;
        self.rows[v as usize][e] = 0;
        self.num_edges -= 1;
    }
}

impl Representation for IncidenceMatrix {
    const FORMAT: FileFormat = FileFormat::IncidenceMatrix;

    fn new(n: NumNodes) -> Self {
        Self {
            rows: vec![Vec::new(); n as usize],
            num_columns: 0,
            num_edges: 0,
        }
    }

    fn add_edge(&mut self, u: Node, v: Node) {
        assert!((u as usize) < self.rows.len() && (v as usize) < self.rows.len());
        for row in self.rows.iter_mut() {
            row.push(0);
        }

        let e = self.num_columns;
        if u == v {
            self.rows[u as usize][e] = 2;
        } else {
            self.rows[u as usize][e] = 1;
            self.rows[v as usize][e] = 1;
        }

        self.num_columns += 1;
        self.num_edges += 1;
    }

    fn number_of_nodes(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }

    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        (0..self.num_columns)
            .filter(move |&e| self.rows[u as usize][e] == 1)
            .filter_map(move |e| self.other_endpoint(u, e))
            .unique()
    }

    fn degree_of(&self, u: Node) -> NumEdges {
        self.row(u).iter().map(|&x| x as NumEdges).sum()
    }

    fn incident_edges_of(&self, u: Node) -> NumEdges {
        self.row(u).iter().filter(|&&x| x > 0).count() as NumEdges
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.num_columns).filter_map(move |e| {
            let u = self.first_endpoint(e)?;
            let v = self.other_endpoint(u, e)?;
            Some(Edge(u, v))
        })
    }

    fn try_remove_first_edge_at(&mut self, u: Node) -> Option<Node> {
        let e = self.row(u).iter().position(|&x| x > 0)?;
        let v = self.other_endpoint(u, e)?;
        self.clear_column(u, v, e);
        Some(v)
    }

    fn remove_edges_at_node(&mut self, u: Node) {
        for e in 0..self.num_columns {
            if let Some(v) = self.other_endpoint(u, e) {
                self.clear_column(u, v, e);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn loops_and_parallel_edges() {
        // columns: {0,1}, {0,1}, {1,1}, {1,2}
        let repr = IncidenceMatrix::from_rows(vec![
            vec![1, 1, 0, 0],
            vec![1, 1, 2, 1],
            vec![0, 0, 0, 1],
        ]);

        assert_eq!(repr.number_of_edges(), 4);
        assert_eq!(repr.degree_of(1), 5);
        assert_eq!(repr.incident_edges_of(1), 4);
        assert_eq!(repr.neighbors_of(1).collect_vec(), vec![0, 2]);
        assert_eq!(
            repr.edges().collect_vec(),
            vec![Edge(0, 1), Edge(0, 1), Edge(1, 1), Edge(1, 2)]
        );
    }

    #[test]
    fn remove_first_edge_takes_lowest_column() {
        let mut repr = IncidenceMatrix::new(3);
        for (u, v) in [(1, 2), (1, 1), (0, 1)] {
            repr.add_edge(u, v);
        }

        assert_eq!(repr.try_remove_first_edge_at(1), Some(2));
        assert_eq!(repr.try_remove_first_edge_at(1), Some(1));
        assert_eq!(repr.try_remove_first_edge_at(1), Some(0));
        assert_eq!(repr.try_remove_first_edge_at(1), None);
        assert_eq!(repr.number_of_edges(), 0);
        assert_eq!(repr.number_of_columns(), 3);
        assert_eq!(repr.edges().count(), 0);
    }

    #[test]
    fn remove_edges_at_node() {
        let mut repr = IncidenceMatrix::new(4);
        for (u, v) in [(0, 1), (1, 2), (2, 2), (2, 3)] {
            repr.add_edge(u, v);
        }

        repr.remove_edges_at_node(2);
        assert_eq!(repr.number_of_edges(), 1);
        assert_eq!(repr.edges().collect_vec(), vec![Edge(0, 1)]);
        assert_eq!(repr.degree_of(3), 0);
    }

    #[test]
    #[should_panic(expected = "does not describe an edge")]
    fn from_rows_rejects_broken_column() {
        IncidenceMatrix::from_rows(vec![vec![1, 1], vec![1, 0], vec![0, 0]]);
    }
}
