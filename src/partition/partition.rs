use crate::{
    error::{Error, Result},
    graph::{NodeSet, WeightedGraph},
    partition::Limits,
};

/// A connected, weight-bounded set of nodes forming one part of a partition.
#[derive(Clone, Debug, PartialEq)]
pub struct District {
    nodes: NodeSet,
    weight: f64, // sum of node weights, cached at construction
}

impl District {
    #[inline] pub(crate) fn new(nodes: NodeSet, weight: f64) -> Self { Self { nodes, weight } }

    /// Get the set of nodes in the district.
    #[inline] pub fn nodes(&self) -> &NodeSet { &self.nodes }

    /// Get the total weight of the district.
    #[inline] pub fn weight(&self) -> f64 { self.weight }

    /// Get the number of nodes in the district.
    #[inline] pub fn len(&self) -> usize { self.nodes.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    #[inline] pub fn contains(&self, node: usize) -> bool { self.nodes.contains(node) }

    /// Get an iterator over node ids in ascending order.
    #[inline] pub fn iter(&self) -> impl Iterator<Item = usize> + '_ { self.nodes.iter() }
}

/// A complete division of a graph's nodes into disjoint districts.
///
/// Districts are stored in the order the enumerator completes them: the district
/// carved out last (deepest in the search) comes first, the pivot's district of
/// the whole graph comes last.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partition {
    districts: Vec<District>,
}

impl Partition {
    #[inline] pub(crate) fn from_districts(districts: Vec<District>) -> Self { Self { districts } }

    /// The partition of the empty graph.
    #[inline] pub fn empty() -> Self { Self::default() }

    /// Get the districts of the partition.
    #[inline] pub fn districts(&self) -> &[District] { &self.districts }

    /// Get the number of districts in the partition.
    #[inline] pub fn len(&self) -> usize { self.districts.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.districts.is_empty() }

    /// Get an iterator over the districts.
    #[inline] pub fn iter(&self) -> std::slice::Iter<'_, District> { self.districts.iter() }

    /// Order-independent form of the partition: sorted districts of sorted node ids.
    pub fn canonical(&self) -> Vec<Vec<usize>> {
        let mut districts = self.districts.iter().map(|d| d.nodes.to_vec()).collect::<Vec<_>>();
        districts.sort_unstable();
        districts
    }

    /// Get the district index of every node in `0..universe`, `None` for nodes not covered.
    pub fn assignments(&self, universe: usize) -> Vec<Option<usize>> {
        let mut assignments = vec![None; universe];
        for (part, district) in self.districts.iter().enumerate() {
            district.iter().filter(|&u| u < universe).for_each(|u| assignments[u] = Some(part));
        }
        assignments
    }

    /// Re-check that this is a valid partition of `graph` under `limits`: districts are
    /// pairwise disjoint, cover every node, induce connected subgraphs and have in-band weights.
    pub fn validate(&self, graph: &WeightedGraph, limits: &Limits) -> Result<()> {
        let mut covered = NodeSet::new(graph.universe());

        for (part, district) in self.districts.iter().enumerate() {
            if district.is_empty() { return Err(Error::invalid_partition(format!("district {part} is empty"))) }
            if let Some(u) = district.iter().find(|&u| !graph.contains(u)) {
                return Err(Error::invalid_partition(format!("district {part} contains node {u}, which is not in the graph")))
            }
            if !district.nodes.is_disjoint(&covered) {
                return Err(Error::invalid_partition(format!("district {part} overlaps an earlier district")))
            }
            if !graph.is_connected_subset(&district.nodes) {
                return Err(Error::invalid_partition(format!("district {part} is not connected")))
            }

            let weight = graph.weight_of(&district.nodes);
            if !limits.contains(weight) {
                return Err(Error::invalid_partition(format!(
                    "district {part} weighs {weight}, outside [{}, {}]", limits.min_weight(), limits.max_weight()
                )))
            }
            covered.union_with(&district.nodes);
        }

        if covered != graph.node_set() {
            let mut missing = graph.node_set();
            missing.difference_with(&covered);
            return Err(Error::invalid_partition(format!("nodes {:?} are not assigned to any district", missing.to_vec())))
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a District;
    type IntoIter = std::slice::Iter<'a, District>;

    fn into_iter(self) -> Self::IntoIter { self.districts.iter() }
}
