use std::collections::HashMap;

use itertools::Itertools;

use super::*;

/// Node `u` lists `v` `uv` times, but `v` lists `u` `vu` times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asymmetry {
    pub u: Node,
    pub v: Node,
    pub uv: usize,
    pub vu: usize,
}

/// Multigraph stored as one ordered neighbor list per node.
///
/// An edge `{u, v}` with `u != v` appears once in the list of `u` and once in the list of `v`.
/// A self-loop at `u` appears once in the list of `u`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjList {
    lists: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl AdjList {
    /// Creates the encoding from neighbor lists
    /// ** Panics if a neighbor is `>= n` or the lists are not symmetric, ie. `v` must occur in
    /// the list of `u` as often as `u` in the list of `v` **
    pub fn from_lists(lists: Vec<Vec<Node>>) -> Self {
        let n = lists.len();
        assert!(
            lists.iter().flatten().all(|&v| (v as usize) < n),
            "neighbor out of range 0..{n}"
        );
        if let Some(Asymmetry { u, v, .. }) = Self::find_asymmetry(&lists) {
            panic!("asymmetric adjacency lists at ({u},{v})");
        }

        let endpoints: usize = lists
            .iter()
            .enumerate()
            .map(|(u, list)| list.len() + list.iter().filter(|&&v| v as usize == u).count())
            .sum();

        Self {
            lists,
            num_edges: (endpoints / 2) as NumEdges,
        }
    }

    /// Returns a pair of nodes that list each other a different number of times,
    /// with the smallest such `u`
    /// ** Panics if a neighbor is `>= n` **
    pub fn find_asymmetry(lists: &[Vec<Node>]) -> Option<Asymmetry> {
        let counts: Vec<HashMap<Node, usize>> = lists
            .iter()
            .map(|list| list.iter().copied().counts())
            .collect();

        counts.iter().enumerate().find_map(|(u, counts_u)| {
            let u = u as Node;
            counts_u.iter().find_map(|(&v, &uv)| {
                let vu = counts[v as usize].get(&u).copied().unwrap_or(0);
                (u != v && uv != vu).then_some(Asymmetry { u, v, uv, vu })
            })
        })
    }

    /// Returns the neighbor list of `u` including duplicates and self-loops
    /// ** Panics if `u >= n` **
    pub fn list_of(&self, u: Node) -> &[Node] {
        &self.lists[u as usize]
    }

    /// Removes the first occurrence of `v` in the list of `u`
    fn remove_first_occurrence(&mut self, u: Node, v: Node) {
        let list = &mut self.lists[u as usize];
        let pos = list.iter().position(|&w| w == v);
        debug_assert!(pos.is_some(), "asymmetric adjacency list at ({u},{v})");
        if let Some(pos) = pos {
            list.remove(pos);
        }
    }
}

impl Representation for AdjList {
    const FORMAT: FileFormat = FileFormat::AdjacencyList;

    fn new(n: NumNodes) -> Self {
        Self {
            lists: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }

    fn add_edge(&mut self, u: Node, v: Node) {
        self.lists[u as usize].push(v);
        if u != v {
            self.lists[v as usize].push(u);
        }
        self.num_edges += 1;
    }

    fn number_of_nodes(&self) -> NumNodes {
        self.lists.len() as NumNodes
    }

    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.lists[u as usize]
            .iter()
            .copied()
            .filter(move |&v| v != u)
            .unique()
    }

    fn degree_of(&self, u: Node) -> NumEdges {
        let list = &self.lists[u as usize];
        (list.len() + list.iter().filter(|&&v| v == u).count()) as NumEdges
    }

    fn incident_edges_of(&self, u: Node) -> NumEdges {
        self.lists[u as usize].len() as NumEdges
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.lists.iter().enumerate().flat_map(|(u, list)| {
            let u = u as Node;
            list.iter()
                .filter(move |&&v| u <= v)
                .map(move |&v| Edge(u, v))
        })
    }

    fn try_remove_first_edge_at(&mut self, u: Node) -> Option<Node> {
        let list = &mut self.lists[u as usize];
        if list.is_empty() {
            return None;
        }

        let v = list.remove(0);
        if v != u {
            self.remove_first_occurrence(v, u);
        }
        self.num_edges -= 1;
        Some(v)
    }

    fn remove_edges_at_node(&mut self, u: Node) {
        let list = std::mem::take(&mut self.lists[u as usize]);
        for &v in &list {
            if v != u {
                self.remove_first_occurrence(v, u);
            }
        }
        self.num_edges -= list.len() as NumEdges;
    }
}
