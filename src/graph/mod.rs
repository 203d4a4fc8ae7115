mod graph;
mod node_set;

pub use graph::WeightedGraph;
pub use node_set::NodeSet;
