/*!
# Representations

A graph is stored in one of three equivalent encodings of the same multigraph:

- [`AdjList`]: for each node the ordered list of its neighbors,
- [`AdjMatrix`]: an `n x n` matrix of edge multiplicities,
- [`IncidenceMatrix`]: an `n x m` matrix with one column per edge.

Every encoding implements [`Representation`]. The generic [`Backend`] wraps a representation into
an immutable *base graph* and a mutable *working copy*, which yields the three backends
[`AdjacencyListBackend`], [`AdjacencyMatrixBackend`] and [`IncidenceMatrixBackend`].
If the representation is only known at runtime, use [`AnyBackend`].

All three encodings agree on degrees, edge multiplicities and self-loops. They only differ in
the cost of queries and in the order in which [`Representation::try_remove_first_edge_at`]
picks the next edge:

- [`AdjList`] takes the first entry of the node's list,
- [`AdjMatrix`] takes the smallest neighbor with a positive multiplicity,
- [`IncidenceMatrix`] takes the lowest-indexed incident column.
*/

use crate::{io::FileFormat, *};

mod adj_list;
mod adj_matrix;
mod any;
mod backend;
mod incidence_matrix;

pub use adj_list::*;
pub use adj_matrix::*;
pub use any::*;
pub use backend::*;
pub use incidence_matrix::*;

/// Storage-level operations of a single multigraph encoding
pub trait Representation: Clone {
    /// The input format this encoding is read from
    const FORMAT: FileFormat;

    /// Creates an encoding of `n` nodes without edges
    fn new(n: NumNodes) -> Self;

    /// Adds an edge `{u, v}`. Parallel edges and self-loops are allowed.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node);

    /// Returns the number of nodes
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of edges still present
    fn number_of_edges(&self) -> NumEdges;

    /// Returns an iterator over the distinct neighbors of `u` without `u` itself
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of edge endpoints at `u`, a self-loop counting twice
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumEdges;

    /// Returns the number of edges at `u`, a self-loop counting once
    /// ** Panics if `u >= n` **
    fn incident_edges_of(&self, u: Node) -> NumEdges;

    /// Returns all edges, each exactly once and normalized
    fn edges(&self) -> impl Iterator<Item = Edge> + '_;

    /// Removes the first edge at `u` in this encoding's natural order and returns its other
    /// endpoint.
    /// Returns `None` if there is no edge at `u`.
    /// ** Panics if `u >= n` **
    fn try_remove_first_edge_at(&mut self, u: Node) -> Option<Node>;

    /// Removes all edges incident to `u`
    /// ** Panics if `u >= n` **
    fn remove_edges_at_node(&mut self, u: Node);
}

pub(crate) mod macros {
    /// Forwards an expression to the backend stored in any variant of `AnyBackend`
    macro_rules! dispatch {
        ($any:expr, $backend:ident => $body:expr) => {
            match $any {
                AnyBackend::AdjacencyList($backend) => $body,
                AnyBackend::AdjacencyMatrix($backend) => $body,
                AnyBackend::IncidenceMatrix($backend) => $body,
            }
        };
    }

    pub(crate) use dispatch;
}
