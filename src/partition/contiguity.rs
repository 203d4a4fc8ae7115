use std::collections::VecDeque;

use crate::{graph::{NodeSet, WeightedGraph}, partition::Limits};

/// How a remainder graph is vetted before the enumerator tries to partition it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RemainderCheck {
    /// Partition every remainder as a whole, even when it falls apart into pieces
    /// that cannot each hold a district.
    Unchecked,

    /// Split the remainder into connected components and discard the candidate
    /// district if any component weighs less than `min_weight`. Such a component
    /// can never be covered by whole districts, so no partition is lost.
    #[default]
    Components,
}

impl RemainderCheck {
    /// Check whether `remainder` may still be covered by districts within `limits`.
    pub fn admits(&self, remainder: &WeightedGraph, limits: &Limits) -> bool {
        match self {
            RemainderCheck::Unchecked => true,
            RemainderCheck::Components => remainder.components().iter()
                .all(|component| !limits.below_min(remainder.weight_of(component))),
        }
    }
}

impl WeightedGraph {
    /// Collect the nodes of `within` reachable from `start` without leaving `within`.
    fn reach(&self, start: usize, within: &NodeSet) -> NodeSet {
        let mut visited = NodeSet::new(self.universe());
        visited.insert(start);

        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for v in self.neighbors(u) {
                if within.contains(v) && visited.insert(v) { queue.push_back(v) }
            }
        }
        visited
    }

    /// Check if `nodes` is non-empty, lies in the graph and induces a connected subgraph.
    pub fn is_connected_subset(&self, nodes: &NodeSet) -> bool {
        let Some(start) = nodes.iter().next() else { return false };
        if !nodes.iter().all(|u| self.contains(u)) { return false }
        self.reach(start, nodes).len() == nodes.len()
    }

    /// Check if the whole graph is connected. The empty graph is not.
    #[inline] pub fn is_connected(&self) -> bool { self.is_connected_subset(&self.node_set()) }

    /// Get the connected components of the graph, ordered by their smallest node id.
    pub fn components(&self) -> Vec<NodeSet> {
        let everything = self.node_set();
        let mut seen = NodeSet::new(self.universe());
        let mut components = Vec::new();

        for u in self.nodes() {
            if seen.contains(u) { continue }
            let component = self.reach(u, &everything);
            seen.union_with(&component);
            components.push(component);
        }
        components
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_triangles() -> WeightedGraph {
        WeightedGraph::new(
            vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0],
            &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)],
        ).unwrap()
    }

    #[test]
    fn components_of_disconnected_graph() {
        let graph = two_triangles();
        let components = graph.components();

        assert_eq!(components.len(), 2);
        assert_eq!(components[0].to_vec(), vec![0, 1, 2]);
        assert_eq!(components[1].to_vec(), vec![3, 4, 5]);
        assert!(!graph.is_connected());
    }

    #[test]
    fn connected_subsets() {
        let graph = two_triangles();
        assert!(graph.is_connected_subset(&NodeSet::from_nodes(6, [0, 2])));
        assert!(graph.is_connected_subset(&NodeSet::from_nodes(6, [4])));
        assert!(!graph.is_connected_subset(&NodeSet::from_nodes(6, [2, 3])));
        assert!(!graph.is_connected_subset(&NodeSet::new(6)));
    }

    #[test]
    fn subsets_of_remainders_respect_removed_nodes() {
        let path = WeightedGraph::new(vec![1.0; 4], &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let remainder = path.without(&NodeSet::from_nodes(4, [1]));

        assert!(!remainder.is_connected_subset(&NodeSet::from_nodes(4, [0, 2])));
        assert!(!remainder.is_connected_subset(&NodeSet::from_nodes(4, [1, 2])));
        assert_eq!(remainder.components().len(), 2);
    }

    #[test]
    fn empty_graph_has_no_components() {
        let graph = WeightedGraph::default();
        assert!(graph.components().is_empty());
        assert!(!graph.is_connected());
    }

    #[test]
    fn component_check_rejects_light_pieces() {
        let graph = two_triangles();
        let limits = Limits::new(4.0, 6.0).unwrap();

        assert!(RemainderCheck::Unchecked.admits(&graph, &limits));
        assert!(!RemainderCheck::Components.admits(&graph, &limits));

        let limits = Limits::new(3.0, 6.0).unwrap();
        assert!(RemainderCheck::Components.admits(&graph, &limits));
    }
}
