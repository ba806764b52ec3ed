/*!
# Graph

[`Graph`] owns one backend and offers the queries and analyses of this crate in one place.
By default the backend is an [`AnyBackend`], chosen when the graph is loaded:

```no_run
use tourgraphs::prelude::*;

let mut graph = Graph::try_from_file("triangle.txt").unwrap();
match graph.eulerian_circuit() {
    Ok(circuit) => println!("Eulerian circuit found: {circuit}"),
    Err(reason) => println!("{reason}"),
}
if graph.is_adjacency_list() {
    println!("{}", graph.check_hamiltonian());
}
```
*/

use std::{io::BufRead, ops::Range, path::Path};

use crate::{algo::*, io::*, prelude::*};

/// Facade over a single graph backend
#[derive(Debug, Clone)]
pub struct Graph<B = AnyBackend> {
    backend: B,
}

impl<B> Graph<B>
where
    B: GraphBackend,
{
    /// Wraps an existing backend
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns the underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the graph and returns its backend
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Returns the number of nodes
    pub fn number_of_nodes(&self) -> NumNodes {
        self.backend.number_of_nodes()
    }

    /// Returns the number of edges of the base graph
    pub fn number_of_edges(&self) -> NumEdges {
        self.backend.number_of_edges()
    }

    /// Returns the range of all nodes `0..n`
    pub fn vertices(&self) -> Range<Node> {
        self.backend.vertices()
    }

    /// Returns all edges of the base graph, normalized
    pub fn edges(&self) -> Vec<Edge> {
        self.backend.edges()
    }

    /// Returns the distinct neighbors of `u` in the working copy
    /// ** Panics if `u >= n` **
    pub fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.backend.neighbors_of(u)
    }

    /// Returns the degree of every node in the base graph, a self-loop counting twice
    pub fn degree_of_each_vertex(&self) -> Vec<NumEdges> {
        self.backend.degree_of_each_vertex()
    }

    /// Returns *true* if every node has even degree
    pub fn is_eulerian(&self) -> bool {
        self.backend.is_eulerian()
    }

    /// Consumes the first remaining edge at `u` and returns its other endpoint
    /// ** Panics if `u >= n` or no edge remains at `u` **
    pub fn traverse(&mut self, u: Node) -> Node {
        self.backend.traverse(u)
    }

    /// Restores the working copy from the base graph
    pub fn reset_working_copy(&mut self) {
        self.backend.reset_working_copy();
    }

    /// Replaces the working copy by the base graph without the nodes in `removed`
    /// ** Panics if any node in `removed` is `>= n` **
    pub fn set_induced_subgraph<I>(&mut self, removed: I)
    where
        I: IntoIterator<Item = Node>,
    {
        self.backend.set_induced_subgraph(removed);
    }

    /// Returns the number of connected components of the working copy
    pub fn number_of_connected_components(&self) -> NumNodes {
        self.backend.number_of_connected_components()
    }

    /// Returns *true* if the working copy is connected
    pub fn is_connected(&self) -> bool {
        self.backend.is_connected()
    }

    /// Computes an Eulerian circuit starting at node `0`.
    /// See [`EulerianCircuitBuilder::build`].
    pub fn eulerian_circuit(&mut self) -> Result<EulerianCircuit, NoEulerianCircuit> {
        self.backend.eulerian_circuit()
    }

    /// Computes an Eulerian circuit starting at `start`.
    /// See [`EulerianCircuitBuilder::build`].
    /// ** Panics if `start >= n` and the graph has an Eulerian circuit **
    pub fn eulerian_circuit_from(
        &mut self,
        start: Node,
    ) -> Result<EulerianCircuit, NoEulerianCircuit> {
        self.backend.eulerian_circuit_from(start)
    }

    /// Checks the necessary condition for Hamiltonicity.
    /// See [`HamiltonianCheck::check_hamiltonian`].
    pub fn check_hamiltonian(&mut self) -> HamiltonianVerdict {
        self.backend.check_hamiltonian()
    }

    /// Returns the format matching the representation of the backend
    pub fn format(&self) -> FileFormat {
        self.backend.format()
    }

    /// Returns *true* if the backend stores neighbor lists
    pub fn is_adjacency_list(&self) -> bool {
        self.format() == FileFormat::AdjacencyList
    }
}

impl Graph<AnyBackend> {
    /// Loads a graph from lines, detecting the format.
    /// See [`GraphFactory`].
    ///
    /// # Errors
    /// Returns an error if the input is empty or invalid for the detected format.
    pub fn try_from_lines<S>(lines: &[S]) -> std::io::Result<Self>
    where
        S: AsRef<str>,
    {
        Ok(Self::new(GraphFactory::try_from_lines(lines)?))
    }

    /// Loads a graph from a reader, detecting the format.
    ///
    /// # Errors
    /// Returns an error if reading fails or the input is invalid for the detected format.
    pub fn try_from_reader<R>(reader: R) -> std::io::Result<Self>
    where
        R: BufRead,
    {
        Ok(Self::new(GraphFactory::try_from_reader(reader)?))
    }

    /// Loads a graph from a file, detecting the format.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is invalid for the detected format.
    pub fn try_from_file<P>(path: P) -> std::io::Result<Self>
    where
        P: AsRef<Path>,
    {
        Ok(Self::new(GraphFactory::try_from_file(path)?))
    }
}

impl<B> From<B> for Graph<B>
where
    B: GraphBackend,
{
    fn from(backend: B) -> Self {
        Self::new(backend)
    }
}
