use crate::ops::*;

use super::*;

/// A graph backend pairing an immutable base graph with a mutable working copy.
///
/// Degree queries are always answered by the base graph, neighborhood queries and traversals
/// by the working copy. The base graph is only written during construction.
#[derive(Debug, Clone)]
pub struct Backend<R: Representation> {
    base: R,
    working: R,
    removed: NodeBitSet,
}

/// Backend storing neighbor lists
pub type AdjacencyListBackend = Backend<AdjList>;

/// Backend storing an adjacency matrix
pub type AdjacencyMatrixBackend = Backend<AdjMatrix>;

/// Backend storing an incidence matrix
pub type IncidenceMatrixBackend = Backend<IncidenceMatrix>;

impl<R: Representation> Backend<R> {
    /// Wraps a fully constructed representation as base graph
    pub fn new(base: R) -> Self {
        Self {
            working: base.clone(),
            removed: NodeBitSet::new(base.number_of_nodes()),
            base,
        }
    }

    /// Returns the immutable base graph
    pub fn base(&self) -> &R {
        &self.base
    }

    /// Returns the current working copy
    pub fn working_copy(&self) -> &R {
        &self.working
    }

    /// Returns the number of edges not yet consumed in the working copy
    pub fn number_of_remaining_edges(&self) -> NumEdges {
        self.working.number_of_edges()
    }
}

impl<R: Representation> From<R> for Backend<R> {
    fn from(base: R) -> Self {
        Self::new(base)
    }
}

impl<R: Representation> GraphFromScratch for Backend<R> {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut base = R::new(n);
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            base.add_edge(u, v);
        }
        Self::new(base)
    }
}

impl<R: Representation> GraphNodeOrder for Backend<R> {
    fn number_of_nodes(&self) -> NumNodes {
        self.base.number_of_nodes()
    }
}

impl<R: Representation> GraphEdgeOrder for Backend<R> {
    fn number_of_edges(&self) -> NumEdges {
        self.base.number_of_edges()
    }

    fn edges(&self) -> Vec<Edge> {
        self.base.edges().collect()
    }
}

impl<R: Representation> AdjacencyList for Backend<R> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.working.neighbors_of(u)
    }

    fn is_active(&self, u: Node) -> bool {
        assert!(u < self.number_of_nodes());
        !self.removed.get_bit(u)
    }
}

impl<R: Representation> Degrees for Backend<R> {
    fn degree_of(&self, u: Node) -> NumEdges {
        self.base.degree_of(u)
    }

    fn incident_edges_of(&self, u: Node) -> NumEdges {
        self.base.incident_edges_of(u)
    }
}

impl<R: Representation> EdgeTraversal for Backend<R> {
    fn try_traverse(&mut self, u: Node) -> Option<Node> {
        self.working.try_remove_first_edge_at(u)
    }
}

impl<R: Representation> WorkingCopy for Backend<R> {
    fn reset_working_copy(&mut self) {
        self.working.clone_from(&self.base);
        self.removed.clear_all();
    }

    fn set_induced_subgraph<I>(&mut self, removed: I)
    where
        I: IntoIterator<Item = Node>,
    {
        self.reset_working_copy();
        for u in removed {
            self.removed.set_bit(u);
            self.working.remove_edges_at_node(u);
        }
    }
}

impl<R: Representation> GraphFormat for Backend<R> {
    fn format(&self) -> FileFormat {
        R::FORMAT
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::test_backend_contract;

    test_backend_contract!(adjacency_list, AdjacencyListBackend);
    test_backend_contract!(adjacency_matrix, AdjacencyMatrixBackend);
    test_backend_contract!(incidence_matrix, IncidenceMatrixBackend);

    #[test]
    fn base_is_untouched_by_working_copy() {
        let mut graph = AdjacencyListBackend::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        assert_eq!(graph.working_copy(), graph.base());

        graph.traverse(0);
        graph.set_induced_subgraph([1]);
        assert_eq!(graph.working_copy().list_of(0), &[2]);
        assert_eq!(graph.working_copy().number_of_edges(), 1);
        assert_eq!(graph.base().number_of_edges(), 3);
        assert_eq!(graph.base().list_of(0), &[1, 2]);

        graph.reset_working_copy();
        assert_eq!(graph.working_copy(), graph.base());
    }
}
