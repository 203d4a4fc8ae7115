#![doc = "Exhaustive enumeration of weight-balanced, connected graph partitions"]
mod error;
mod graph;
mod partition;

pub mod io;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use graph::{NodeSet, WeightedGraph};

#[doc(inline)]
pub use partition::{
    accrete, all_partitions, calc_limits, enumerate_partitions,
    Cancellation, District, EnumerateOptions, Enumerator, Limits, Partition, RemainderCheck, SearchStats,
};
