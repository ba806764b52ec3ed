/*!
# Eulerian Circuits

An Eulerian circuit is a closed walk using every edge of a (multi)graph exactly once.
It exists if and only if the graph is connected and every node has even degree.

The [`EulerianCircuitBuilder`] follows Hierholzer's algorithm with two explicit stacks:
it walks along unused edges until it gets stuck, then backtracks along the current path and
splices in further closed walks. Edges are consumed from the working copy of the graph using
[`EdgeTraversal::traverse`], so the resulting circuit is determined by the representation's
order of edges.

# Example
```
use tourgraphs::{prelude::*, algo::*};

let mut graph = AdjacencyListBackend::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
let circuit = graph.eulerian_circuit().unwrap();
assert_eq!(circuit.nodes(), &[0, 1, 2, 0]);
assert_eq!(circuit.to_string(), "0 -> 1 -> 2 -> 0");

let mut path = AdjacencyListBackend::from_edges(3, [(0, 1), (1, 2)]);
assert_eq!(
    path.eulerian_circuit(),
    Err(NoEulerianCircuit::OddDegree { node: 0, degree: 1 })
);
```
*/

use std::fmt::Display;

use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, trace};

use super::*;

/// Reason why a graph has no Eulerian circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NoEulerianCircuit {
    /// The graph does not consist of exactly one connected component
    #[error("the graph is not connected ({components} components), so it has no Eulerian circuit")]
    Disconnected { components: NumNodes },

    /// Some node has odd degree
    #[error("node {node} has odd degree {degree}, so the graph has no Eulerian circuit")]
    OddDegree { node: Node, degree: NumEdges },
}

/// A closed walk using every edge of a graph exactly once, stored as its sequence of nodes.
/// The first and last node coincide, and consecutive nodes are joined by the edges of the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EulerianCircuit {
    nodes: Vec<Node>,
}

impl EulerianCircuit {
    /// Returns the nodes of the circuit in walking order (start node repeated at the end)
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the node the circuit starts and ends at
    pub fn start(&self) -> Node {
        self.nodes[0]
    }

    /// Returns the number of edges of the circuit
    pub fn number_of_edges(&self) -> NumEdges {
        (self.nodes.len() - 1) as NumEdges
    }

    /// Returns the edges of the circuit in walking order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes.iter().tuple_windows().map(|(&u, &v)| Edge(u, v))
    }

    /// Consumes the circuit and returns its nodes
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

impl Display for EulerianCircuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nodes.iter().join(" -> "))
    }
}

/// Computes an Eulerian circuit of a graph.
///
/// The builder resets the working copy of the graph before it starts and leaves it with all
/// edges consumed. Degrees are taken from the base graph.
pub struct EulerianCircuitBuilder<'a, G> {
    graph: &'a mut G,
    start: Node,
}

impl<'a, G> EulerianCircuitBuilder<'a, G>
where
    G: AdjacencyList + Degrees + EdgeTraversal + WorkingCopy,
{
    /// Creates a builder starting the circuit at node `0`
    pub fn new(graph: &'a mut G) -> Self {
        Self { graph, start: 0 }
    }

    /// Sets the node the circuit starts and ends at
    pub fn start_at(mut self, start: Node) -> Self {
        self.set_start(start);
        self
    }

    /// Sets the node the circuit starts and ends at
    pub fn set_start(&mut self, start: Node) -> &mut Self {
        self.start = start;
        self
    }

    /// Checks that an Eulerian circuit exists and computes it.
    ///
    /// # Errors
    /// Returns [`NoEulerianCircuit::Disconnected`] if the graph does not have exactly one
    /// connected component (this includes the graph without nodes), and otherwise
    /// [`NoEulerianCircuit::OddDegree`] for the first node of odd degree.
    ///
    /// ** Panics if the start node is `>= n` **
    pub fn build(self) -> Result<EulerianCircuit, NoEulerianCircuit> {
        let graph = self.graph;
        graph.reset_working_copy();

        let components = graph.number_of_connected_components();
        if components != 1 {
            debug!(components, "no eulerian circuit: graph is disconnected");
            return Err(NoEulerianCircuit::Disconnected { components });
        }

        if let Some(node) = graph.first_odd_vertex() {
            let degree = graph.degree_of(node);
            debug!(node, degree, "no eulerian circuit: odd degree");
            return Err(NoEulerianCircuit::OddDegree { node, degree });
        }

        assert!(
            self.start < graph.number_of_nodes(),
            "start node {} is out of range 0..{}",
            self.start,
            graph.number_of_nodes()
        );

        // a self-loop is left once, so it is counted once
        let mut remaining = graph
            .vertices()
            .map(|u| graph.incident_edges_of(u))
            .collect_vec();

        // the top of `path` is the current node; nodes are moved to `circuit` once exhausted
        let mut path = vec![self.start];
        let endpoints: usize = remaining.iter().map(|&r| r as usize).sum();
        let mut circuit = Vec::with_capacity(endpoints / 2 + 1);

        while let Some(&cur) = path.last() {
            if remaining[cur as usize] > 0 {
                let next = graph.traverse(cur);
                trace!(from = cur, to = next, "traverse edge");

                remaining[cur as usize] -= 1;
                if next != cur {
                    remaining[next as usize] -= 1;
                }
                path.push(next);
            } else {
                circuit.push(cur);
                path.pop();
            }
        }

        circuit.reverse();
        debug!(start = self.start, edges = circuit.len() - 1, "found eulerian circuit");

        Ok(EulerianCircuit { nodes: circuit })
    }
}

/// Shorthands for [`EulerianCircuitBuilder`] on graphs
pub trait EulerianCircuits: AdjacencyList + Degrees + EdgeTraversal + WorkingCopy + Sized {
    /// Computes an Eulerian circuit starting at node `0`.
    /// See [`EulerianCircuitBuilder::build`].
    fn eulerian_circuit(&mut self) -> Result<EulerianCircuit, NoEulerianCircuit> {
        EulerianCircuitBuilder::new(self).build()
    }

    /// Computes an Eulerian circuit starting at `start`.
    /// See [`EulerianCircuitBuilder::build`].
    /// ** Panics if `start >= n` and the graph has an Eulerian circuit **
    fn eulerian_circuit_from(
        &mut self,
        start: Node,
    ) -> Result<EulerianCircuit, NoEulerianCircuit> {
        EulerianCircuitBuilder::new(self).start_at(start).build()
    }
}

impl<G> EulerianCircuits for G where
    G: AdjacencyList + Degrees + EdgeTraversal + WorkingCopy + Sized
{
}
