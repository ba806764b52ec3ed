use itertools::Itertools;
use rand::Rng;

use crate::prelude::*;

/// Creates `m` random edges for nodes `0..n`. Parallel edges and self-loops are likely.
pub(crate) fn random_multigraph_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
    (0..m)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
        .collect_vec()
}

/// Creates the edges of a connected multigraph on `n` nodes in which every node has even degree.
/// The graph is the union of a cycle through all nodes and `walks` random closed walks.
pub(crate) fn random_eulerian_edges<R: Rng>(rng: &mut R, n: NumNodes, walks: usize) -> Vec<Edge> {
    let mut edges = if n == 1 {
        vec![Edge(0, 0)]
    } else {
        (0..n).map(|u| Edge(u, (u + 1) % n)).collect_vec()
    };

    for _ in 0..walks {
        let len = rng.random_range(1..=n.max(2));
        let start = rng.random_range(0..n);
        let mut u = start;
        for _ in 1..len {
            let v = rng.random_range(0..n);
            edges.push(Edge(u, v));
            u = v;
        }
        edges.push(Edge(u, start));
    }

    edges
}

/// Sorts normalized edges to compare edge multisets
pub(crate) fn edge_multiset(edges: impl IntoIterator<Item = Edge>) -> Vec<Edge> {
    edges.into_iter().map(|e| e.normalized()).sorted().collect_vec()
}

/// Every backend must answer the uniform contract identically
macro_rules! test_backend_contract {
    ($env:ident, $backend:ty) => {
        #[cfg(test)]
        mod $env {
            use crate::{prelude::*, testing::*};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            fn expected_degrees(n: NumNodes, edges: &[Edge]) -> Vec<NumEdges> {
                let mut degrees = vec![0; n as usize];
                for &Edge(u, v) in edges {
                    degrees[u as usize] += 1;
                    degrees[v as usize] += 1;
                }
                degrees
            }

            fn expected_neighbors(n: NumNodes, edges: &[Edge], removed: &NodeBitSet) -> Vec<NodeBitSet> {
                let mut nbs = vec![NodeBitSet::new(n); n as usize];
                for &Edge(u, v) in edges {
                    if u != v && !removed.get_bit(u) && !removed.get_bit(v) {
                        nbs[u as usize].set_bit(v);
                        nbs[v as usize].set_bit(u);
                    }
                }
                nbs
            }

            #[test]
            fn from_edges() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [1 as NumNodes, 5, 12] {
                    for m in [0, n, n * 3] {
                        let edges = random_multigraph_edges(rng, n, m);
                        let graph = <$backend>::from_edges(n, edges.iter());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                        assert_eq!(graph.number_of_edges(), m);
                        assert!(graph.edges().iter().all(|e| e.is_normalized()));
                        assert_eq!(edge_multiset(graph.edges()), edge_multiset(edges.clone()));

                        let degrees = expected_degrees(n, &edges);
                        assert_eq!(graph.degree_of_each_vertex(), degrees);
                        assert_eq!(graph.is_eulerian(), degrees.iter().all(|d| d % 2 == 0));

                        let loops = edges.iter().filter(|e| e.is_loop()).counts_by(|e| e.0);
                        for u in 0..n {
                            assert_eq!(
                                graph.incident_edges_of(u),
                                degrees[u as usize] - loops.get(&u).copied().unwrap_or(0) as NumEdges
                            );
                        }
                    }
                }
            }

            #[test]
            fn neighbors_are_distinct() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                for n in [1 as NumNodes, 6, 15] {
                    let edges = random_multigraph_edges(rng, n, 4 * n);
                    let graph = <$backend>::from_edges(n, edges.iter());
                    let expected = expected_neighbors(n, &edges, &NodeBitSet::new(n));

                    for u in graph.vertices() {
                        let nbs = graph.neighbors_of(u).collect_vec();
                        assert_eq!(nbs.iter().unique().count(), nbs.len());
                        assert!(!nbs.contains(&u));
                        assert_eq!(NodeBitSet::new_with_bits_set(n, nbs.iter().copied()), expected[u as usize]);
                        assert!(graph.is_active(u));
                    }
                }
            }

            #[test]
            fn traversal_consumes_every_edge_once() {
                let rng = &mut Pcg64Mcg::seed_from_u64(5);

                for n in [1 as NumNodes, 7, 13] {
                    let edges = random_multigraph_edges(rng, n, 3 * n);
                    let mut graph = <$backend>::from_edges(n, edges.iter());
                    let before = graph.vertices().map(|u| graph.neighbors_of(u).collect_vec()).collect_vec();

                    let mut consumed = Vec::new();
                    for u in graph.vertices() {
                        while let Some(v) = graph.try_traverse(u) {
                            consumed.push(Edge(u, v));
                        }
                        assert_eq!(graph.neighbors_of(u).count(), 0);
                    }

                    assert_eq!(edge_multiset(consumed), edge_multiset(edges.clone()));

                    // base graph facts are untouched by traversals
                    assert_eq!(graph.degree_of_each_vertex(), expected_degrees(n, &edges));
                    assert_eq!(graph.number_of_edges(), 3 * n);

                    graph.reset_working_copy();
                    let after = graph.vertices().map(|u| graph.neighbors_of(u).collect_vec()).collect_vec();
                    assert_eq!(before, after);
                }
            }

            #[test]
            #[should_panic]
            fn traverse_without_edges_panics() {
                let mut graph = <$backend>::from_edges(2, [(0, 0)]);
                graph.traverse(1);
            }

            #[test]
            fn induced_subgraph() {
                let rng = &mut Pcg64Mcg::seed_from_u64(6);

                for n in [2 as NumNodes, 8, 14] {
                    for _ in 0..5 {
                        let edges = random_multigraph_edges(rng, n, 3 * n);
                        let mut graph = <$backend>::from_edges(n, edges.iter());
                        let degrees = graph.degree_of_each_vertex();

                        let removed_nodes = graph.vertices().filter(|_| rng.random_bool(0.3)).collect_vec();
                        let removed = NodeBitSet::new_with_bits_set(n, removed_nodes.iter().copied());
                        graph.set_induced_subgraph(removed_nodes.iter().copied());

                        let expected = expected_neighbors(n, &edges, &removed);
                        for u in graph.vertices() {
                            assert_eq!(graph.is_active(u), !removed.get_bit(u));
                            assert_eq!(
                                NodeBitSet::new_with_bits_set(n, graph.neighbors_of(u)),
                                expected[u as usize]
                            );
                        }
                        assert_eq!(
                            graph.active_vertices().collect_vec(),
                            graph.vertices().filter(|&u| !removed.get_bit(u)).collect_vec()
                        );
                        assert_eq!(graph.degree_of_each_vertex(), degrees);

                        // a second reduction starts from the base graph again
                        graph.set_induced_subgraph([]);
                        assert_eq!(graph.active_vertices().count(), n as usize);

                        graph.reset_working_copy();
                        let full = expected_neighbors(n, &edges, &NodeBitSet::new(n));
                        for u in graph.vertices() {
                            assert!(graph.is_active(u));
                            assert_eq!(NodeBitSet::new_with_bits_set(n, graph.neighbors_of(u)), full[u as usize]);
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_backend_contract;
