/*!
# Hamiltonian Necessary Condition

A Hamiltonian cycle visits every node exactly once. Removing any non-empty set `S` of nodes
from a Hamiltonian graph splits the cycle into at most `|S|` paths, hence the remaining graph
has at most `|S|` connected components. [`HamiltonianCheck::check_hamiltonian`] tests this
condition for every proper non-empty subset of nodes.

Passing the check is *no* proof: the Petersen graph passes but has no Hamiltonian cycle.
The check enumerates `2^n - 2` subsets and is therefore only feasible for small graphs.
*/

use std::{fmt::Display, ops::Range};

use itertools::{Itertools, structs::Combinations};
use tracing::{debug, trace};

use super::*;

/// Iterator over all proper non-empty subsets of the nodes `0..n`.
///
/// Subsets are ordered by size first and lexicographically within each size,
/// every subset is sorted in increasing order.
pub struct ProperSubsets {
    n: NumNodes,
    size: usize,
    combinations: Combinations<Range<Node>>,
}

impl ProperSubsets {
    pub fn new(n: NumNodes) -> Self {
        Self {
            n,
            size: 1,
            combinations: (0..n).combinations(1),
        }
    }
}

impl Iterator for ProperSubsets {
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.size >= self.n as usize {
                return None;
            }

            if let Some(subset) = self.combinations.next() {
                return Some(subset);
            }

            self.size += 1;
            self.combinations = (0..self.n).combinations(self.size);
        }
    }
}

/// Outcome of [`HamiltonianCheck::check_hamiltonian`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HamiltonianVerdict {
    /// Every proper subset passed; the graph may or may not be Hamiltonian
    MayBeHamiltonian,

    /// Removing `separator` leaves more than `|separator|` components
    NotHamiltonian {
        separator: Vec<Node>,
        components: NumNodes,
    },
}

impl HamiltonianVerdict {
    /// Returns *false* if the graph is certainly not Hamiltonian
    pub fn may_be_hamiltonian(&self) -> bool {
        matches!(self, Self::MayBeHamiltonian)
    }
}

impl Display for HamiltonianVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MayBeHamiltonian => write!(f, "The graph may be Hamiltonian!"),
            Self::NotHamiltonian {
                separator,
                components,
            } => write!(
                f,
                "The graph is not Hamiltonian! Removing {{{}}} leaves {components} components.",
                separator.iter().join(", ")
            ),
        }
    }
}

/// Checks the necessary condition for Hamiltonicity on the working copy
pub trait HamiltonianCheck: AdjacencyList + WorkingCopy + Sized {
    /// Returns [`HamiltonianVerdict::NotHamiltonian`] with the first subset `S`
    /// (in the order of [`ProperSubsets`]) whose removal leaves more than `|S|` components,
    /// and [`HamiltonianVerdict::MayBeHamiltonian`] if there is no such subset.
    ///
    /// The working copy is reset before and after the check.
    fn check_hamiltonian(&mut self) -> HamiltonianVerdict {
        self.reset_working_copy();

        let mut verdict = HamiltonianVerdict::MayBeHamiltonian;
        for separator in ProperSubsets::new(self.number_of_nodes()) {
            self.set_induced_subgraph(separator.iter().copied());
            let components = self.number_of_connected_components();
            trace!(?separator, components, "checked subset");

            if components as usize > separator.len() {
                verdict = HamiltonianVerdict::NotHamiltonian {
                    separator,
                    components,
                };
                break;
            }
        }

        self.reset_working_copy();
        debug!(%verdict, "hamiltonian check done");

        verdict
    }
}

impl<G> HamiltonianCheck for G where G: AdjacencyList + WorkingCopy + Sized {}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{io::*, testing::*};

    const FORMATS: [FileFormat; 3] = [
        FileFormat::AdjacencyList,
        FileFormat::AdjacencyMatrix,
        FileFormat::IncidenceMatrix,
    ];

    fn verdicts(n: NumNodes, edges: &[Edge]) -> Vec<HamiltonianVerdict> {
        FORMATS
            .into_iter()
            .map(|format| AnyBackend::from_edges_as(format, n, edges.iter()).check_hamiltonian())
            .collect_vec()
    }

    fn not_hamiltonian(separator: Vec<Node>, components: NumNodes) -> HamiltonianVerdict {
        HamiltonianVerdict::NotHamiltonian {
            separator,
            components,
        }
    }

    #[test]
    fn proper_subsets() {
        assert_eq!(ProperSubsets::new(0).count(), 0);
        assert_eq!(ProperSubsets::new(1).count(), 0);

        for n in 2..=12 {
            let subsets = ProperSubsets::new(n).collect_vec();
            assert_eq!(subsets.len(), (1 << n) - 2);
            assert_eq!(subsets.iter().unique().count(), subsets.len());
            assert!(subsets.iter().all(|s| s.iter().tuple_windows().all(|(a, b)| a < b)));
            assert!(subsets.iter().tuple_windows().all(|(a, b)| a.len() <= b.len()));
        }

        assert_eq!(
            ProperSubsets::new(3).collect_vec(),
            vec![vec![0], vec![1], vec![2], vec![0, 1], vec![0, 2], vec![1, 2]]
        );
    }

    #[test]
    fn triangle() {
        let mut graph = AdjacencyListReader::new()
            .try_read_graph("1,2\n0,2\n0,1\n".as_bytes())
            .unwrap();

        assert_eq!(graph.check_hamiltonian(), HamiltonianVerdict::MayBeHamiltonian);
        assert_eq!(graph.check_hamiltonian().to_string(), "The graph may be Hamiltonian!");
    }

    #[test]
    fn cut_vertex() {
        // star with center 0
        for verdict in verdicts(4, &[Edge(0, 1), Edge(0, 2), Edge(0, 3)]) {
            assert_eq!(verdict, not_hamiltonian(vec![0], 3));
        }

        // path 0 - 1 - 2 with a loop at 2
        for verdict in verdicts(3, &[Edge(0, 1), Edge(1, 2), Edge(2, 2)]) {
            assert_eq!(verdict, not_hamiltonian(vec![1], 2));
            assert_eq!(
                verdict.to_string(),
                "The graph is not Hamiltonian! Removing {1} leaves 2 components."
            );
        }

        // two triangles sharing node 2
        let bowtie = [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)].map(|(u, v)| Edge(u, v));
        for verdict in verdicts(5, &bowtie) {
            assert_eq!(verdict, not_hamiltonian(vec![2], 2));
        }
    }

    #[test]
    fn disconnected() {
        for verdict in verdicts(4, &[Edge(0, 1), Edge(2, 3)]) {
            assert_eq!(verdict, not_hamiltonian(vec![0], 2));
        }
    }

    #[test]
    fn condition_is_not_sufficient() {
        // the Petersen graph
        let petersen = (0..5)
            .flat_map(|u| [Edge(u, (u + 1) % 5), Edge(u, u + 5), Edge(u + 5, (u + 2) % 5 + 5)])
            .collect_vec();

        for verdict in verdicts(10, &petersen) {
            assert_eq!(verdict, HamiltonianVerdict::MayBeHamiltonian);
        }
    }

    #[test]
    fn small_graphs() {
        for verdict in verdicts(0, &[]) {
            assert!(verdict.may_be_hamiltonian());
        }
        for verdict in verdicts(1, &[]) {
            assert!(verdict.may_be_hamiltonian());
        }
        // a single edge is no cycle, but removing one of its endpoints leaves one component
        for verdict in verdicts(2, &[Edge(0, 1)]) {
            assert!(verdict.may_be_hamiltonian());
        }
    }

    #[test]
    fn working_copy_is_restored() {
        let mut graph = AdjacencyMatrixBackend::from_edges(4, [(0, 1), (0, 2), (0, 3)]);
        let before = graph.vertices().map(|u| graph.neighbors_of(u).collect_vec()).collect_vec();

        assert!(!graph.check_hamiltonian().may_be_hamiltonian());

        assert_eq!(graph.active_vertices().count(), 4);
        assert_eq!(
            graph.vertices().map(|u| graph.neighbors_of(u).collect_vec()).collect_vec(),
            before
        );
    }

    #[test]
    fn representations_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);

        for n in [3 as NumNodes, 5, 7, 9] {
            for _ in 0..5 {
                let edges = random_multigraph_edges(rng, n, n + n / 2);
                let verdicts = verdicts(n, &edges);
                assert!(verdicts.iter().all_equal());

                if let HamiltonianVerdict::NotHamiltonian {
                    separator,
                    components,
                } = &verdicts[0]
                {
                    let mut graph = AdjacencyListBackend::from_edges(n, edges.iter());
                    graph.set_induced_subgraph(separator.iter().copied());
                    assert_eq!(graph.number_of_connected_components(), *components);
                    assert!(*components as usize > separator.len());
                }
            }
        }
    }
}
