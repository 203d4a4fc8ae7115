use log::{debug, info};
use serde::Serialize;

use crate::{
    error::Result,
    graph::{NodeSet, WeightedGraph},
    partition::{accrete::accrete_with, calc_limits, Cancellation, District, Limits, Partition, RemainderCheck},
};

/// Knobs for a partition enumeration run.
#[derive(Clone, Debug, Default)]
pub struct EnumerateOptions {
    /// Validation applied to each remainder before it is partitioned.
    pub remainder_check: RemainderCheck,
    /// If set, only partitions with exactly this many districts are produced.
    pub part_count: Option<usize>,
    /// Stop condition consulted at every search step.
    pub cancellation: Cancellation,
}

impl EnumerateOptions {
    pub fn with_remainder_check(mut self, remainder_check: RemainderCheck) -> Self {
        self.remainder_check = remainder_check;
        self
    }

    pub fn with_part_count(mut self, part_count: usize) -> Self {
        self.part_count = Some(part_count);
        self
    }

    pub fn with_cancellation(mut self, cancellation: Cancellation) -> Self {
        self.cancellation = cancellation;
        self
    }
}

/// Counters collected during a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Steps taken by the accretion search (one per frontier node tried or frame finished).
    pub accretion_steps: usize,
    /// Candidate districts produced by accretion, summed over all remainders.
    pub candidates: usize,
    /// Candidates reached again through a different growth order and skipped.
    pub duplicate_candidates: usize,
    /// Candidates discarded because their remainder failed validation.
    pub remainders_pruned: usize,
    /// Complete partitions found.
    pub partitions: usize,
}

/// One level of the partition search: a remainder graph, the districts that may be
/// carved out of it around its pivot, and a cursor into them.
struct Level {
    graph: WeightedGraph,
    candidates: Vec<District>,
    next: usize,
}

/// Exhaustive partition search over a fixed set of limits.
#[derive(Debug)]
pub struct Enumerator {
    limits: Limits,
    options: EnumerateOptions,
    stats: SearchStats,
}

impl Enumerator {
    /// Construct an enumerator with default options.
    pub fn new(limits: Limits) -> Self { Self::with_options(limits, EnumerateOptions::default()) }

    pub fn with_options(limits: Limits, options: EnumerateOptions) -> Self {
        Self { limits, options, stats: SearchStats::default() }
    }

    #[inline] pub fn limits(&self) -> &Limits { &self.limits }

    #[inline] pub fn options(&self) -> &EnumerateOptions { &self.options }

    /// Counters accumulated over every run of this enumerator.
    #[inline] pub fn stats(&self) -> &SearchStats { &self.stats }

    /// Open a search level on `graph`: grow every in-band district around its heaviest node.
    fn level(&mut self, graph: WeightedGraph) -> Result<Level> {
        let candidates = match graph.heaviest() {
            Some(pivot) => {
                let seed = NodeSet::from_nodes(graph.universe(), [pivot]);
                accrete_with(&graph, &seed, graph.weight(pivot), &self.limits, &self.options.cancellation, &mut self.stats)?
            }
            None => Vec::new(),
        };
        debug!(nodes = graph.node_count(), candidates = candidates.len(); "opened partition level");
        Ok(Level { graph, candidates, next: 0 })
    }

    /// Check whether a remainder left after placing `placed` districts may still be partitioned.
    fn admits(&self, remainder: &WeightedGraph, placed: usize) -> bool {
        if let Some(count) = self.options.part_count {
            if placed >= count || !self.limits.admits(remainder.total_weight(), count - placed) { return false }
        }
        self.options.remainder_check.admits(remainder, &self.limits)
    }

    /// Enumerate every partition of `graph` into connected districts within the limits.
    ///
    /// Each partition lists the district containing the graph's heaviest node last,
    /// preceded by a partition of the remainder. An empty result means no partition exists.
    pub fn all_partitions(&mut self, graph: &WeightedGraph) -> Result<Vec<Partition>> {
        let mut partitions = Vec::new();
        if graph.is_empty() {
            if self.options.part_count.is_none_or(|count| count == 0) { partitions.push(Partition::empty()) }
            self.stats.partitions += partitions.len();
            return Ok(partitions)
        }

        // path[i] is the district chosen at stack[i]; path.len() + 1 == stack.len() between steps.
        let mut path: Vec<District> = Vec::new();
        let mut stack = vec![self.level(graph.clone())?];

        while let Some(level) = stack.last_mut() {
            self.options.cancellation.check()?;

            let Some(district) = level.candidates.get(level.next).cloned() else {
                stack.pop();
                path.pop();
                continue
            };
            level.next += 1;

            let remainder = level.graph.without(district.nodes());
            path.push(district);

            if remainder.is_empty() {
                if self.options.part_count.is_none_or(|count| count == path.len()) {
                    partitions.push(Partition::from_districts(path.iter().rev().cloned().collect()));
                }
                path.pop();
            } else if self.admits(&remainder, path.len()) {
                let level = self.level(remainder)?;
                stack.push(level);
            } else {
                self.stats.remainders_pruned += 1;
                path.pop();
            }
        }

        self.stats.partitions += partitions.len();
        info!(
            nodes = graph.node_count(),
            partitions = partitions.len(),
            candidates = self.stats.candidates,
            pruned = self.stats.remainders_pruned;
            "partition enumeration finished"
        );
        Ok(partitions)
    }
}

/// Enumerate every partition of `graph` into connected districts within `limits`, with default options.
pub fn all_partitions(graph: &WeightedGraph, limits: &Limits) -> Result<Vec<Partition>> {
    Enumerator::new(*limits).all_partitions(graph)
}

/// Compute limits for `num_parts` districts with imbalance `max_ratio`, then enumerate all partitions.
pub fn enumerate_partitions(graph: &WeightedGraph, num_parts: usize, max_ratio: f64) -> Result<Vec<Partition>> {
    let limits = calc_limits(graph, num_parts, max_ratio)?;
    all_partitions(graph, &limits)
}
