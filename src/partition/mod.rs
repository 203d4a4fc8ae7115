mod accrete;
mod cancel;
mod contiguity;
mod enumerate;
mod limits;
mod partition;

pub use accrete::accrete;
pub use cancel::Cancellation;
pub use contiguity::RemainderCheck;
pub use enumerate::{all_partitions, enumerate_partitions, EnumerateOptions, Enumerator, SearchStats};
pub use limits::{calc_limits, Limits};
pub use partition::{District, Partition};
