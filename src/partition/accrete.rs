use ahash::AHashSet;
use log::trace;
use smallvec::SmallVec;

use crate::{
    error::Result,
    graph::{NodeSet, WeightedGraph},
    partition::{Cancellation, District, Limits, SearchStats},
};

/// One pending level of the growth search: a connected candidate, the nodes it may
/// no longer absorb, and its neighbor frontier with a cursor into it.
struct Frame {
    candidate: NodeSet,
    weight: f64,
    ignore: NodeSet,
    frontier: SmallVec<[usize; 16]>,
    next: usize,
}

impl Frame {
    fn new(graph: &WeightedGraph, candidate: NodeSet, weight: f64, ignore: NodeSet) -> Self {
        let mut frontier = NodeSet::new(graph.universe());
        for u in candidate.iter() {
            graph.neighbors(u)
                .filter(|&v| !candidate.contains(v) && !ignore.contains(v))
                .for_each(|v| { frontier.insert(v); });
        }

        Self { candidate, weight, ignore, frontier: frontier.iter().collect(), next: 0 }
    }
}

/// Find every connected superset of `seed` (the seed included) whose weight lies within `limits`.
///
/// `seed` must be a non-empty connected set of nodes of `graph` weighing `seed_weight`.
/// Results are distinct and listed in the order the depth-first growth first reaches them.
pub fn accrete(graph: &WeightedGraph, seed: &NodeSet, seed_weight: f64, limits: &Limits) -> Vec<District> {
    let mut stats = SearchStats::default();
    match accrete_with(graph, seed, seed_weight, limits, &Cancellation::never(), &mut stats) {
        Ok(districts) => districts,
        Err(_) => unreachable!("a search that is never cancelled cannot fail"),
    }
}

/// Accretion search consulting `cancellation` at every step and recording into `stats`.
pub(crate) fn accrete_with(
    graph: &WeightedGraph,
    seed: &NodeSet,
    seed_weight: f64,
    limits: &Limits,
    cancellation: &Cancellation,
    stats: &mut SearchStats,
) -> Result<Vec<District>> {
    assert!(!seed.is_empty(), "accretion seed must not be empty");
    debug_assert!(seed.iter().all(|u| graph.contains(u)), "accretion seed must lie in the graph");

    let mut found = Vec::new();
    if limits.exceeds_max(seed_weight) { return Ok(found) }
    if limits.contains(seed_weight) { found.push(District::new(seed.clone(), seed_weight)) }

    // A candidate's feasible supersets do not depend on the path that reached it:
    // every ignored node outside the candidate was too heavy for one of its subsets.
    let mut expanded = AHashSet::from_iter([seed.clone()]);

    let mut stack = vec![Frame::new(graph, seed.clone(), seed_weight, seed.clone())];
    while let Some(frame) = stack.last_mut() {
        cancellation.check()?;
        stats.accretion_steps += 1;

        let Some(&node) = frame.frontier.get(frame.next) else { stack.pop(); continue };
        frame.next += 1;

        let weight = frame.weight + graph.weight(node);
        if limits.exceeds_max(weight) {
            // Too heavy here, and for every later sibling and descendant of this frame.
            frame.ignore.insert(node);
            continue
        }

        let candidate = frame.candidate.with(node);
        if !expanded.insert(candidate.clone()) { stats.duplicate_candidates += 1; continue }

        let ignore = frame.ignore.with(node);
        if limits.contains(weight) {
            trace!(size = candidate.len(), weight = weight; "accepted candidate district");
            found.push(District::new(candidate.clone(), weight));
        }
        stack.push(Frame::new(graph, candidate, weight, ignore));
    }

    stats.candidates += found.len();
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(graph: &WeightedGraph, node: usize) -> (NodeSet, f64) {
        (NodeSet::from_nodes(graph.universe(), [node]), graph.weight(node))
    }

    fn sets(districts: &[District]) -> Vec<Vec<usize>> {
        let mut sets = districts.iter().map(|d| d.nodes().to_vec()).collect::<Vec<_>>();
        sets.sort();
        sets
    }

    #[test]
    fn path_growth_in_discovery_order() {
        // 0 - 1 - 2 - 3, unit weights
        let graph = WeightedGraph::new(vec![1.0; 4], &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let (seed, weight) = seed(&graph, 1);
        let limits = Limits::new(2.0, 3.0).unwrap();

        let found = accrete(&graph, &seed, weight, &limits);
        let order = found.iter().map(|d| d.nodes().to_vec()).collect::<Vec<_>>();

        assert_eq!(order, vec![vec![0, 1], vec![0, 1, 2], vec![1, 2], vec![1, 2, 3]]);
        assert!(found.iter().all(|d| d.weight() == d.len() as f64));
    }

    #[test]
    fn seed_is_reported_when_in_band() {
        let graph = WeightedGraph::new(vec![3.0, 1.0], &[(0, 1)]).unwrap();
        let (seed, weight) = seed(&graph, 0);
        let limits = Limits::new(2.5, 4.0).unwrap();

        assert_eq!(sets(&accrete(&graph, &seed, weight, &limits)), vec![vec![0], vec![0, 1]]);
    }

    #[test]
    fn overweight_seed_yields_nothing() {
        let graph = WeightedGraph::new(vec![15.0, 1.0], &[(0, 1)]).unwrap();
        let (seed, weight) = seed(&graph, 0);
        let limits = Limits::new(10.0, 12.0).unwrap();

        assert!(accrete(&graph, &seed, weight, &limits).is_empty());
    }

    #[test]
    fn heavy_neighbor_is_skipped_but_growth_continues_past_others() {
        // Star: 0 at the center, 1 is heavy, 2 and 3 are light.
        let graph = WeightedGraph::new(vec![1.0, 10.0, 1.0, 1.0], &[(0, 1), (0, 2), (0, 3)]).unwrap();
        let (seed, weight) = seed(&graph, 0);
        let limits = Limits::new(2.0, 3.0).unwrap();

        assert_eq!(sets(&accrete(&graph, &seed, weight, &limits)), vec![vec![0, 2], vec![0, 2, 3], vec![0, 3]]);
    }

    #[test]
    fn sibling_exclusions_do_not_leak() {
        // Square 0-1-2-3-0 with one cheap and one pricey route around it.
        // Node 3 is too heavy next to {0, 1}, yet {0, 3} alone must still be found.
        let graph = WeightedGraph::new(
            vec![1.0, 2.0, 1.0, 2.0],
            &[(0, 1), (1, 2), (2, 3), (3, 0)],
        ).unwrap();
        let (seed, weight) = seed(&graph, 0);
        let limits = Limits::new(3.0, 4.0).unwrap();

        assert_eq!(
            sets(&accrete(&graph, &seed, weight, &limits)),
            vec![vec![0, 1], vec![0, 1, 2], vec![0, 2, 3], vec![0, 3]],
        );
    }

    #[test]
    fn results_are_distinct_connected_supersets() {
        // Triangle plus tail: many growth orders reach the same sets.
        let graph = WeightedGraph::new(
            vec![1.0, 1.0, 1.0, 1.0],
            &[(0, 1), (1, 2), (2, 0), (2, 3)],
        ).unwrap();
        let (seed, weight) = seed(&graph, 0);
        let limits = Limits::new(0.0, 10.0).unwrap();
        let mut stats = SearchStats::default();

        let found = accrete_with(&graph, &seed, weight, &limits, &Cancellation::never(), &mut stats).unwrap();

        assert_eq!(
            sets(&found),
            vec![vec![0], vec![0, 1], vec![0, 1, 2], vec![0, 1, 2, 3], vec![0, 2], vec![0, 2, 3]],
        );
        assert!(found.iter().all(|d| d.contains(0) && graph.is_connected_subset(d.nodes())));
        assert!(stats.duplicate_candidates > 0);
        assert_eq!(stats.candidates, 6);
    }

    #[test]
    fn cancelled_search_reports_cancellation() {
        let graph = WeightedGraph::new(vec![1.0; 3], &[(0, 1), (1, 2)]).unwrap();
        let (seed, weight) = seed(&graph, 0);
        let limits = Limits::new(0.0, 10.0).unwrap();
        let cancel = Cancellation::never().with_timeout(std::time::Duration::ZERO);

        let result = accrete_with(&graph, &seed, weight, &limits, &cancel, &mut SearchStats::default());
        assert!(matches!(result, Err(crate::Error::Cancelled)));
    }
}
