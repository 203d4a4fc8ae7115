// Named graph fixtures and a brute-force reference enumerator shared by the integration tests.
#![allow(dead_code)]

use std::collections::BTreeSet;

use enumander::{Limits, NodeSet, Partition, WeightedGraph};

/// A partition as sorted districts of sorted node ids.
pub type Canonical = Vec<Vec<usize>>;

/// The six-node map from the 2017 Geometry of Redistricting hackathon.
pub fn hackathon_graph() -> WeightedGraph {
    WeightedGraph::new(
        vec![8.0, 15.0, 0.2, 6.2, 4.4, 0.0],
        &[(0, 1), (0, 4), (1, 2), (2, 3), (3, 4), (3, 5), (4, 5)],
    ).unwrap()
}

/// The hackathon map reweighted so that three districts within 10% of the average exist.
pub fn balanced_hackathon_graph() -> WeightedGraph {
    WeightedGraph::new(
        vec![8.0, 9.0, 1.0, 1.0, 1.0, 6.0],
        &[(0, 1), (0, 4), (1, 2), (2, 3), (3, 4), (3, 5), (4, 5)],
    ).unwrap()
}

/// A path of `n` unit-weight nodes.
pub fn path_graph(n: usize) -> WeightedGraph {
    WeightedGraph::new(vec![1.0; n], &(1..n).map(|i| (i - 1, i)).collect::<Vec<_>>()).unwrap()
}

/// A `rows` x `cols` grid of unit-weight nodes, numbered row by row.
pub fn grid_graph(rows: usize, cols: usize) -> WeightedGraph {
    let id = |r: usize, c: usize| r * cols + c;
    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols { edges.push((id(r, c), id(r, c + 1))) }
            if r + 1 < rows { edges.push((id(r, c), id(r + 1, c))) }
        }
    }
    WeightedGraph::new(vec![1.0; rows * cols], &edges).unwrap()
}

/// Canonical forms of a list of partitions.
pub fn canonical(partitions: &[Partition]) -> BTreeSet<Canonical> {
    partitions.iter().map(|p| p.canonical()).collect()
}

/// Every partition of `graph` into connected districts within `limits`, found by
/// trying every set partition of the node set.
pub fn brute_force_partitions(graph: &WeightedGraph, limits: &Limits) -> BTreeSet<Canonical> {
    fn assign(
        i: usize,
        nodes: &[usize],
        blocks: &mut Vec<Vec<usize>>,
        graph: &WeightedGraph,
        limits: &Limits,
        result: &mut BTreeSet<Canonical>,
    ) {
        if i == nodes.len() {
            let valid = blocks.iter().all(|block| {
                let set = NodeSet::from_nodes(graph.universe(), block.iter().copied());
                graph.is_connected_subset(&set) && limits.contains(graph.weight_of(&set))
            });
            if valid {
                let mut partition = blocks.clone();
                partition.sort();
                result.insert(partition);
            }
            return
        }

        for b in 0..blocks.len() {
            blocks[b].push(nodes[i]);
            assign(i + 1, nodes, blocks, graph, limits, result);
            blocks[b].pop();
        }
        blocks.push(vec![nodes[i]]);
        assign(i + 1, nodes, blocks, graph, limits, result);
        blocks.pop();
    }

    let nodes = graph.nodes().collect::<Vec<_>>();
    let mut result = BTreeSet::new();
    assign(0, &nodes, &mut Vec::new(), graph, limits, &mut result);
    result
}
