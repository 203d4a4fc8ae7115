use crate::{error::{Error, Result}, graph::NodeSet};

/// A weighted, undirected graph in compressed sparse row format.
///
/// Nodes keep the id they were given when the graph was first built, so induced
/// subgraphs produced by [`WeightedGraph::without`] still speak in original node ids.
#[derive(Clone, Debug)]
pub struct WeightedGraph {
    universe: usize,         // number of nodes in the graph this one was derived from
    ids: Vec<usize>,         // ids[i] = node id of local index i (ascending)
    local: Vec<Option<u32>>, // local[id] = local index of node id, if present
    offsets: Vec<u32>,
    edges: Vec<u32>,         // neighbors as local indices
    weights: Vec<f64>,
}

impl Default for WeightedGraph {
    fn default() -> Self { Self::from_parts(0, Vec::new(), Vec::new(), &[]) }
}

impl WeightedGraph {
    /// Construct a graph from node weights and an undirected edge list.
    /// Duplicate edges (in either orientation) are merged.
    pub fn new(weights: Vec<f64>, edges: &[(usize, usize)]) -> Result<Self> {
        let num_nodes = weights.len();
        let mut adjacency = vec![Vec::new(); num_nodes];
        for &(u, v) in edges {
            if u >= num_nodes || v >= num_nodes {
                return Err(Error::invalid_graph(format!("edge ({u}, {v}) references a node outside [0, {num_nodes})")))
            }
            if u == v { return Err(Error::invalid_graph(format!("self loop on node {u}"))) }
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
        Self::from_adjacency(weights, adjacency)
    }

    /// Construct a graph from node weights and per-node adjacency lists.
    /// The lists must describe a symmetric, irreflexive relation.
    pub fn from_adjacency(weights: Vec<f64>, mut adjacency: Vec<Vec<usize>>) -> Result<Self> {
        let num_nodes = weights.len();
        if adjacency.len() != num_nodes {
            return Err(Error::invalid_graph(format!("adjacency.len() ({}) must equal number of weights ({num_nodes})", adjacency.len())))
        }
        if let Some((node, w)) = weights.iter().enumerate().find(|&(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(Error::invalid_graph(format!("node {node} has invalid weight {w}, weights must be finite and non-negative")))
        }

        for (u, list) in adjacency.iter_mut().enumerate() {
            list.sort_unstable();
            list.dedup();
            if let Some(&v) = list.iter().find(|&&v| v >= num_nodes) {
                return Err(Error::invalid_graph(format!("node {u} lists neighbor {v} outside [0, {num_nodes})")))
            }
            if list.binary_search(&u).is_ok() { return Err(Error::invalid_graph(format!("self loop on node {u}"))) }
        }
        for (u, list) in adjacency.iter().enumerate() {
            if let Some(&v) = list.iter().find(|&&v| adjacency[v].binary_search(&u).is_err()) {
                return Err(Error::invalid_graph(format!("adjacency is not symmetric: {u} lists {v} but {v} does not list {u}")))
            }
        }

        let edges = adjacency.iter()
            .map(|list| list.iter().map(|&v| v as u32).collect())
            .collect::<Vec<Vec<u32>>>();

        Ok(Self::from_parts(num_nodes, (0..num_nodes).collect(), weights, &edges))
    }

    /// Assemble the CSR arrays from local adjacency lists.
    fn from_parts(universe: usize, ids: Vec<usize>, weights: Vec<f64>, edges: &[Vec<u32>]) -> Self {
        assert!(ids.len() == weights.len(), "ids.len() must equal weights.len()");
        assert!(edges.len() == ids.len(), "edges.len() must equal number of nodes");

        let mut local = vec![None; universe];
        ids.iter().enumerate().for_each(|(i, &id)| local[id] = Some(i as u32));

        Self {
            universe,
            offsets: std::iter::once(0u32).chain(
                edges.iter()
                    .map(|v| v.len() as u32)
                    .scan(0u32, |acc, len| {*acc += len; Some(*acc)})
            ).collect::<Vec<u32>>(),
            edges: edges.iter().flatten().copied().collect(),
            ids,
            local,
            weights,
        }
    }

    /// Get the number of nodes in the graph.
    #[inline] pub fn node_count(&self) -> usize { self.ids.len() }

    /// Get the number of undirected edges in the graph.
    #[inline] pub fn edge_count(&self) -> usize { self.edges.len() / 2 }

    #[inline] pub fn is_empty(&self) -> bool { self.ids.is_empty() }

    /// Get the number of nodes of the graph this one was derived from; every node id is below it.
    #[inline] pub fn universe(&self) -> usize { self.universe }

    /// Check whether the graph contains node `id`.
    #[inline] pub fn contains(&self, id: usize) -> bool { self.local.get(id).is_some_and(|i| i.is_some()) }

    /// Get the local index of node `id`.
    #[inline]
    fn index(&self, id: usize) -> usize {
        assert!(self.contains(id), "node {} is not in the graph", id);
        self.local[id].unwrap_or_default() as usize
    }

    /// Get the range of edges for a given local index.
    #[inline]
    fn range(&self, index: usize) -> std::ops::Range<usize> {
        self.offsets[index] as usize .. self.offsets[index + 1] as usize
    }

    /// Get an iterator over node ids in ascending order.
    #[inline] pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ { self.ids.iter().copied() }

    /// Get the set of all node ids in the graph.
    #[inline] pub fn node_set(&self) -> NodeSet { NodeSet::from_nodes(self.universe, self.nodes()) }

    /// Get the weight of node `id`.
    #[inline] pub fn weight(&self, id: usize) -> f64 { self.weights[self.index(id)] }

    /// Get the degree (number of neighbors) of node `id`.
    #[inline] pub fn degree(&self, id: usize) -> usize { self.range(self.index(id)).len() }

    /// Get an iterator over the neighbors of node `id`, in ascending order.
    #[inline]
    pub fn neighbors(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        self.range(self.index(id)).map(move |e| self.ids[self.edges[e] as usize])
    }

    /// Sum of all node weights.
    #[inline] pub fn total_weight(&self) -> f64 { self.weights.iter().sum() }

    /// Sum of the weights of the given nodes, all of which must be in the graph.
    #[inline] pub fn weight_of(&self, nodes: &NodeSet) -> f64 { nodes.iter().map(|id| self.weight(id)).sum() }

    /// Get the heaviest node, breaking ties by the smallest node id.
    pub fn heaviest(&self) -> Option<usize> {
        self.ids.iter().zip(self.weights.iter())
            .fold(None, |best: Option<(usize, f64)>, (&id, &w)| match best {
                Some((_, best_w)) if best_w >= w => best,
                _ => Some((id, w)),
            })
            .map(|(id, _)| id)
    }

    /// Get the subgraph induced by every node not in `removed`.
    pub fn without(&self, removed: &NodeSet) -> WeightedGraph {
        let kept = (0..self.node_count())
            .filter(|&i| !removed.contains(self.ids[i]))
            .collect::<Vec<_>>();

        let mut renumber = vec![None; self.node_count()];
        kept.iter().enumerate().for_each(|(new, &old)| renumber[old] = Some(new as u32));

        let edges = kept.iter()
            .map(|&i| self.range(i).filter_map(|e| renumber[self.edges[e] as usize]).collect())
            .collect::<Vec<Vec<u32>>>();

        Self::from_parts(
            self.universe,
            kept.iter().map(|&i| self.ids[i]).collect(),
            kept.iter().map(|&i| self.weights[i]).collect(),
            &edges,
        )
    }
}
