use crate::ops::*;

use super::{macros::dispatch, *};

/// A backend whose representation is chosen at runtime, typically by
/// [`GraphFactory`](crate::io::GraphFactory) after inspecting the input.
#[derive(Debug, Clone)]
pub enum AnyBackend {
    AdjacencyList(AdjacencyListBackend),
    AdjacencyMatrix(AdjacencyMatrixBackend),
    IncidenceMatrix(IncidenceMatrixBackend),
}

impl AnyBackend {
    /// Creates a backend of the requested format from a number of nodes and edges
    /// ** Panics if any endpoint is `>= n` **
    pub fn from_edges_as(
        format: FileFormat,
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Self {
        match format {
            FileFormat::AdjacencyList => Self::AdjacencyList(Backend::from_edges(n, edges)),
            FileFormat::AdjacencyMatrix => Self::AdjacencyMatrix(Backend::from_edges(n, edges)),
            FileFormat::IncidenceMatrix => Self::IncidenceMatrix(Backend::from_edges(n, edges)),
        }
    }

    /// Returns *true* if the neighbor-list representation is used
    pub fn is_adjacency_list(&self) -> bool {
        matches!(self, Self::AdjacencyList(_))
    }
}

impl From<AdjacencyListBackend> for AnyBackend {
    fn from(backend: AdjacencyListBackend) -> Self {
        Self::AdjacencyList(backend)
    }
}

impl From<AdjacencyMatrixBackend> for AnyBackend {
    fn from(backend: AdjacencyMatrixBackend) -> Self {
        Self::AdjacencyMatrix(backend)
    }
}

impl From<IncidenceMatrixBackend> for AnyBackend {
    fn from(backend: IncidenceMatrixBackend) -> Self {
        Self::IncidenceMatrix(backend)
    }
}

impl GraphNodeOrder for AnyBackend {
    fn number_of_nodes(&self) -> NumNodes {
        dispatch!(self, b => b.number_of_nodes())
    }
}

impl GraphEdgeOrder for AnyBackend {
    fn number_of_edges(&self) -> NumEdges {
        dispatch!(self, b => b.number_of_edges())
    }

    fn edges(&self) -> Vec<Edge> {
        dispatch!(self, b => b.edges())
    }
}

impl AdjacencyList for AnyBackend {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        let neighbors: Box<dyn Iterator<Item = Node> + '_> =
            dispatch!(self, b => Box::new(b.neighbors_of(u)));
        neighbors
    }

    fn is_active(&self, u: Node) -> bool {
        dispatch!(self, b => b.is_active(u))
    }
}

impl Degrees for AnyBackend {
    fn degree_of(&self, u: Node) -> NumEdges {
        dispatch!(self, b => b.degree_of(u))
    }

    fn incident_edges_of(&self, u: Node) -> NumEdges {
        dispatch!(self, b => b.incident_edges_of(u))
    }
}

impl EdgeTraversal for AnyBackend {
    fn try_traverse(&mut self, u: Node) -> Option<Node> {
        dispatch!(self, b => b.try_traverse(u))
    }
}

impl WorkingCopy for AnyBackend {
    fn reset_working_copy(&mut self) {
        dispatch!(self, b => b.reset_working_copy())
    }

    fn set_induced_subgraph<I>(&mut self, removed: I)
    where
        I: IntoIterator<Item = Node>,
    {
        dispatch!(self, b => b.set_induced_subgraph(removed))
    }
}

impl GraphFormat for AnyBackend {
    fn format(&self) -> FileFormat {
        dispatch!(self, b => b.format())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::test_backend_contract;
    use itertools::Itertools;

    #[test]
    fn dispatch_matches_concrete_backend() {
        let edges = [(0, 1), (1, 2), (2, 0), (2, 2), (1, 3), (3, 1)];
        let concrete = AdjacencyMatrixBackend::from_edges(4, edges);
        let any = AnyBackend::from_edges_as(FileFormat::AdjacencyMatrix, 4, edges);

        assert_eq!(any.format(), FileFormat::AdjacencyMatrix);
        assert!(!any.is_adjacency_list());
        assert_eq!(any.edges(), concrete.edges());
        assert_eq!(any.degree_of_each_vertex(), concrete.degree_of_each_vertex());
        for u in any.vertices() {
            assert_eq!(
                any.neighbors_of(u).collect_vec(),
                concrete.neighbors_of(u).collect_vec()
            );
        }
    }

    impl GraphFromScratch for AnyBackend {
        fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
            Self::from_edges_as(FileFormat::IncidenceMatrix, n, edges)
        }
    }

    test_backend_contract!(any_incidence_matrix, AnyBackend);
}
