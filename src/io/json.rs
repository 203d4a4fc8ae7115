use std::{fs::File, io::{BufReader, BufWriter, Read, Write}, path::Path};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    graph::WeightedGraph,
    partition::{Limits, Partition},
};

/// Node identifier as written in a graph file: a string or an integer.
#[derive(Deserialize)]
#[serde(untagged)]
enum NodeKey {
    Name(String),
    Index(u64),
}

impl NodeKey {
    fn into_label(self) -> String {
        match self {
            NodeKey::Name(name) => name,
            NodeKey::Index(index) => index.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct NodeRecord {
    id: NodeKey,
    weight: f64,
}

#[derive(Deserialize)]
struct GraphRecord {
    nodes: Vec<NodeRecord>,
    #[serde(default)]
    edges: Vec<(NodeKey, NodeKey)>,
}

#[derive(Serialize)]
struct DistrictRecord<'a> {
    nodes: Vec<&'a str>,
    weight: f64,
}

#[derive(Serialize)]
struct PartitionsRecord<'a> {
    limits: &'a Limits,
    count: usize,
    partitions: Vec<Vec<DistrictRecord<'a>>>,
}

/// A graph together with the external labels of its nodes, in file order.
#[derive(Clone, Debug)]
pub struct LabeledGraph {
    graph: WeightedGraph,
    labels: Vec<String>,
}

impl LabeledGraph {
    /// Get a reference to the underlying graph.
    #[inline] pub fn graph(&self) -> &WeightedGraph { &self.graph }

    /// Get the labels of all nodes, indexed by node id.
    #[inline] pub fn labels(&self) -> &[String] { &self.labels }

    /// Get the label of node `id`.
    #[inline] pub fn label(&self, id: usize) -> &str { &self.labels[id] }

    /// Find the node id carrying `label`.
    pub fn id_of(&self, label: &str) -> Option<usize> { self.labels.iter().position(|l| l == label) }
}

/// Build a labeled graph from its JSON record.
fn graph_from_record(record: GraphRecord) -> Result<LabeledGraph> {
    let mut index = AHashMap::with_capacity(record.nodes.len());
    let mut labels = Vec::with_capacity(record.nodes.len());
    let mut weights = Vec::with_capacity(record.nodes.len());

    for node in record.nodes {
        let label = node.id.into_label();
        if index.insert(label.clone(), labels.len()).is_some() {
            return Err(Error::invalid_graph(format!("duplicate node id {label:?}")))
        }
        labels.push(label);
        weights.push(node.weight);
    }

    let lookup = |key: NodeKey| -> Result<usize> {
        let label = key.into_label();
        index.get(&label).copied().ok_or_else(|| Error::invalid_graph(format!("edge references unknown node {label:?}")))
    };
    let edges = record.edges.into_iter()
        .map(|(u, v)| Ok((lookup(u)?, lookup(v)?)))
        .collect::<Result<Vec<_>>>()?;

    Ok(LabeledGraph { graph: WeightedGraph::new(weights, &edges)?, labels })
}

/// Reads a labeled graph from JSON text.
pub fn read_graph_from_json_str(text: &str) -> Result<LabeledGraph> {
    graph_from_record(serde_json::from_str(text)?)
}

/// Reads a labeled graph from any JSON reader.
pub fn read_graph_from_json_reader(reader: impl Read) -> Result<LabeledGraph> {
    graph_from_record(serde_json::from_reader(reader)?)
}

/// Reads a labeled graph from a JSON file at `path`.
pub fn read_graph_from_json_file(path: &Path) -> Result<LabeledGraph> {
    read_graph_from_json_reader(BufReader::new(File::open(path)?))
}

/// Writes partitions (with node labels) and the limits they satisfy as JSON.
pub fn write_partitions_to_json_writer(
    writer: impl Write,
    graph: &LabeledGraph,
    limits: &Limits,
    partitions: &[Partition],
) -> Result<()> {
    let record = PartitionsRecord {
        limits,
        count: partitions.len(),
        partitions: partitions.iter().map(|partition| {
            partition.iter().map(|district| DistrictRecord {
                nodes: district.iter().map(|id| graph.label(id)).collect(),
                weight: district.weight(),
            }).collect()
        }).collect(),
    };
    serde_json::to_writer_pretty(writer, &record)?;
    Ok(())
}

/// Writes partitions (with node labels) and the limits they satisfy to a JSON file at `path`.
pub fn write_partitions_to_json_file(
    path: &Path,
    graph: &LabeledGraph,
    limits: &Limits,
    partitions: &[Partition],
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_partitions_to_json_writer(&mut writer, graph, limits, partitions)?;
    writer.flush()?;
    Ok(())
}
