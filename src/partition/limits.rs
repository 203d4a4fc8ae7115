use serde::Serialize;

use crate::{error::{Error, Result}, graph::WeightedGraph};

/// The `[min_weight, max_weight]` band every district weight must fall in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Limits {
    min_weight: f64,
    max_weight: f64,
}

impl Limits {
    /// Relative slack (as a fraction of `max_weight`) allowed on both bounds,
    /// so exact bands survive floating-point summation.
    pub const TOLERANCE: f64 = 1e-9;

    /// Construct a band directly. Bounds must be finite with `0 <= min_weight <= max_weight`.
    pub fn new(min_weight: f64, max_weight: f64) -> Result<Self> {
        if !(min_weight.is_finite() && max_weight.is_finite()) {
            return Err(Error::invalid_parameter(format!("limits must be finite, got [{min_weight}, {max_weight}]")))
        }
        if min_weight < 0.0 || min_weight > max_weight {
            return Err(Error::invalid_parameter(format!("limits must satisfy 0 <= min <= max, got [{min_weight}, {max_weight}]")))
        }
        Ok(Self { min_weight, max_weight })
    }

    #[inline] pub fn min_weight(&self) -> f64 { self.min_weight }

    #[inline] pub fn max_weight(&self) -> f64 { self.max_weight }

    #[inline] fn slack(&self) -> f64 { Self::TOLERANCE * self.max_weight.max(1.0) }

    /// Check if `weight` is heavier than any district may be.
    #[inline] pub fn exceeds_max(&self, weight: f64) -> bool { weight > self.max_weight + self.slack() }

    /// Check if `weight` is lighter than any district may be.
    #[inline] pub fn below_min(&self, weight: f64) -> bool { weight < self.min_weight - self.slack() }

    /// Check if `weight` is an acceptable district weight.
    #[inline] pub fn contains(&self, weight: f64) -> bool { !self.below_min(weight) && !self.exceeds_max(weight) }

    /// Check if `weight` could be split into exactly `count` districts as far as weight alone goes.
    #[inline]
    pub fn admits(&self, weight: f64, count: usize) -> bool {
        let count = count as f64;
        weight >= count * self.min_weight - count * self.slack()
            && weight <= count * self.max_weight + count * self.slack()
    }
}

/// Derive the district weight band for splitting `graph` into `num_parts` parts,
/// each differing from the average by no more than a factor of `max_ratio`.
pub fn calc_limits(graph: &WeightedGraph, num_parts: usize, max_ratio: f64) -> Result<Limits> {
    if num_parts == 0 { return Err(Error::invalid_parameter("num_parts must be at least 1")) }
    if !max_ratio.is_finite() || max_ratio < 1.0 {
        return Err(Error::invalid_parameter(format!("max_ratio must be a finite number >= 1.0, got {max_ratio}")))
    }
    if graph.is_empty() { return Err(Error::invalid_parameter("cannot compute limits for an empty graph")) }

    let average = graph.total_weight() / num_parts as f64;
    Limits::new(average / max_ratio, average * max_ratio)
}
