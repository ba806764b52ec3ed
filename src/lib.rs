/*!
`tourgraphs` is a small kernel for two classical questions on undirected multigraphs:
- does the graph have an **Eulerian circuit**, and which one?
- does the graph pass the **necessary condition for Hamiltonian cycles**?

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`. Graphs may contain parallel edges
and self-loops; a self-loop contributes `2` to the degree of its node.

A graph is stored in one of three interchangeable representations (see [`repr`]):

- [`AdjacencyListBackend`](crate::repr::AdjacencyListBackend),
- [`AdjacencyMatrixBackend`](crate::repr::AdjacencyMatrixBackend),
- [`IncidenceMatrixBackend`](crate::repr::IncidenceMatrixBackend).

Each backend keeps an immutable *base graph* and a mutable *working copy*. Degree queries are
answered by the base graph, whereas neighborhood queries, traversals and induced subgraphs
operate on the working copy, which can be reset at any time.

# Design

Algorithms are provided as configurable structs using the *Builder* / *Setter* pattern
(eg. [`EulerianCircuitBuilder`](crate::algo::EulerianCircuitBuilder)).
The most common functionality is also implemented via traits on the graph itself.

# Usage

- [`prelude`] includes definitions for nodes, edges, basic graph operations, all representations
  and the [`Graph`](crate::graph::Graph) facade,
- [`algo`] includes connectivity, Eulerian circuits and the Hamiltonian check,
- [`io`] includes readers and writers for the three plain-text formats and format detection,
- [`cli`] includes the logging setup and output of the binaries.

```
use tourgraphs::{prelude::*, algo::*};

let mut graph = Graph::try_from_lines(&["1,2", "0,2", "0,1"]).unwrap();
assert!(graph.is_adjacency_list());

let circuit = graph.eulerian_circuit().unwrap();
assert_eq!(circuit.nodes(), &[0, 1, 2, 0]);
assert!(graph.check_hamiltonian().may_be_hamiltonian());
```
*/

pub mod algo;
pub mod cli;
pub mod edge;
pub mod graph;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `tourgraphs::prelude` includes definitions for nodes and edges, all basic graph operation
/// traits, all representations as well as the [`Graph`](crate::graph::Graph) facade.
pub mod prelude {
    pub use super::{edge::*, graph::*, node::*, ops::*, repr::*};
}
