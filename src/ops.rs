/*!
# Graph Operations

The uniform operation set every graph backend exposes.
The traits are split by concern so that algorithms only ask for what they need:

- [`GraphNodeOrder`] / [`GraphEdgeOrder`]: sizes, vertices and the (base) edge multiset,
- [`AdjacencyList`]: neighborhood queries answered by the *working copy*,
- [`Degrees`]: degree facts answered by the immutable *base graph*,
- [`EdgeTraversal`]: destructive, edge-consuming walks on the working copy,
- [`WorkingCopy`]: resetting the working copy and reducing it to an induced subgraph.

[`GraphBackend`] bundles all of them and is implemented automatically.
*/

use std::ops::Range;

use crate::{io::FileFormat, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the range `0..n` of all nodes.
    /// The range does not borrow `self` and is therefore usable while mutating the graph.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }
}

/// Provides getters pertaining to the edges of the base graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the base graph. A self-loop counts as one edge.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns all edges of the base graph, each undirected edge exactly once and normalized.
    /// Parallel edges are repeated, self-loops appear once.
    fn edges(&self) -> Vec<Edge>;
}

/// Neighborhood queries on the working copy
pub trait AdjacencyList: GraphNodeOrder {
    /// Returns an iterator over the distinct neighbors of `u` in the working copy.
    /// Self-loops are skipped and parallel edges reported once.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns *false* if `u` was removed from the working copy by
    /// [`WorkingCopy::set_induced_subgraph`].
    /// ** Panics if `u >= n` **
    fn is_active(&self, u: Node) -> bool;

    /// Returns an iterator over all nodes still present in the working copy
    fn active_vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(move |&u| self.is_active(u))
    }
}

/// Degree facts of the base graph.
/// These never change while algorithms consume the working copy.
pub trait Degrees: GraphNodeOrder {
    /// Returns the number of edge endpoints at `u` where a self-loop contributes `2`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumEdges;

    /// Returns the number of edges incident to `u` where a self-loop contributes `1`.
    /// This is the number of times a walk can leave `u` along an unused edge.
    /// ** Panics if `u >= n` **
    fn incident_edges_of(&self, u: Node) -> NumEdges;

    /// Returns the degree of every node, indexed by node
    fn degree_of_each_vertex(&self) -> Vec<NumEdges> {
        self.vertices().map(|u| self.degree_of(u)).collect()
    }

    /// Returns the first node with odd degree, if any
    fn first_odd_vertex(&self) -> Option<Node> {
        self.vertices().find(|&u| self.degree_of(u) % 2 == 1)
    }

    /// Returns *true* if every node has even degree
    fn is_eulerian(&self) -> bool {
        self.first_odd_vertex().is_none()
    }
}

/// Edge-consuming walks on the working copy
pub trait EdgeTraversal {
    /// Removes the first remaining edge at `u` from the working copy and returns its other
    /// endpoint. For a self-loop, `u` itself is returned. Returns `None` if no edge remains at `u`.
    /// ** Panics if `u >= n` **
    fn try_traverse(&mut self, u: Node) -> Option<Node>;

    /// Same as [`EdgeTraversal::try_traverse`] for callers that guarantee an edge remains.
    /// ** Panics if `u >= n` or no edge remains at `u` **
    fn traverse(&mut self, u: Node) -> Node {
        self.try_traverse(u)
            .unwrap_or_else(|| panic!("no untraversed edge left at node {u}"))
    }
}

/// Management of the working copy
pub trait WorkingCopy {
    /// Discards all changes to the working copy and restores the base graph
    fn reset_working_copy(&mut self);

    /// Replaces the working copy by the base graph with all nodes in `removed` and
    /// their incident edges deleted.
    /// ** Panics if any node in `removed` is `>= n` **
    fn set_induced_subgraph<I>(&mut self, removed: I)
    where
        I: IntoIterator<Item = Node>;
}

/// Reports which input format a representation corresponds to
pub trait GraphFormat {
    /// Returns the format a graph of this representation is read from and written to
    fn format(&self) -> FileFormat;
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over Edges
    /// ** Panics if any endpoint is `>= n` **
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

/// The full operation set every graph backend provides
pub trait GraphBackend:
    GraphNodeOrder
    + GraphEdgeOrder
    + AdjacencyList
    + Degrees
    + EdgeTraversal
    + WorkingCopy
    + GraphFormat
{
}

impl<G> GraphBackend for G where
    G: GraphNodeOrder
        + GraphEdgeOrder
        + AdjacencyList
        + Degrees
        + EdgeTraversal
        + WorkingCopy
        + GraphFormat
{
}
