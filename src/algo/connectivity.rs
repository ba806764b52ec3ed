use std::vec::IntoIter;

use super::*;

/// Connected components of the working copy.
///
/// Only active nodes are considered, ie. nodes removed by [`WorkingCopy::set_induced_subgraph`]
/// belong to no component.
pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over the connected components of the working copy.
    /// Components are discovered in order of their smallest node, every component
    /// lists its nodes in depth-first order.
    fn connected_components(&self) -> ConnectedComponents<'_, Self>;

    /// Returns the number of connected components of the working copy
    fn number_of_connected_components(&self) -> NumNodes {
        self.connected_components().count() as NumNodes
    }

    /// Returns *true* if the working copy consists of exactly one connected component.
    /// A graph without (active) nodes is not connected.
    fn is_connected(&self) -> bool {
        self.connected_components().take(2).count() == 1
    }
}

impl<G> Connectivity for G
where
    G: AdjacencyList + Sized,
{
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }
}

/// Iterator over connected components computed by an iterative depth-first search.
///
/// The search keeps one pending-neighbor iterator per node on the current path and therefore
/// visits nodes in the same order as the recursive formulation, without risking a stack overflow.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<IntoIter<Node>>,
    next_start: Node,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            stack: Vec::new(),
            next_start: 0,
        }
    }

    /// Marks `u` as visited and schedules its neighbors
    fn visit(&mut self, u: Node) {
        self.visited.set_bit(u);
        let neighbors: Vec<Node> = self.graph.neighbors_of(u).collect();
        self.stack.push(neighbors.into_iter());
    }

    /// Returns the smallest active node that was not visited yet
    fn find_unvisited(&mut self) -> Option<Node> {
        let u = (self.next_start..self.graph.number_of_nodes())
            .find(|&u| self.graph.is_active(u) && !self.visited.get_bit(u))?;
        self.next_start = u + 1;
        Some(u)
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.find_unvisited()?;

        let mut component = vec![start];
        self.visit(start);

        while let Some(pending) = self.stack.last_mut() {
            let visited = &self.visited;
            match pending.find(|&v| !visited.get_bit(v)) {
                Some(v) => {
                    component.push(v);
                    self.visit(v);
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        Some(component)
    }
}
