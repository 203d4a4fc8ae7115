//! Reading graphs and writing enumeration results.
//!
//! Graphs are JSON objects with a `nodes` list of `{ "id", "weight" }` records and an
//! `edges` list of id pairs. Ids may be strings or integers; they become node labels,
//! while node ids inside the crate are positions in the `nodes` list.

mod json;

pub use json::{
    read_graph_from_json_file, read_graph_from_json_reader, read_graph_from_json_str,
    write_partitions_to_json_file, write_partitions_to_json_writer, LabeledGraph,
};
