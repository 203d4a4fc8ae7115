use std::fs;

use enumander::{
    calc_limits, enumerate_partitions,
    io::{read_graph_from_json_file, write_partitions_to_json_file},
    Error,
};

const HACKATHON_JSON: &str = r#"{
    "nodes": [
        { "id": "north",  "weight": 8.0 },
        { "id": "west",   "weight": 9.0 },
        { "id": "center", "weight": 1.0 },
        { "id": "south",  "weight": 1.0 },
        { "id": "east",   "weight": 1.0 },
        { "id": "coast",  "weight": 6.0 }
    ],
    "edges": [
        ["north", "west"], ["north", "east"], ["west", "center"], ["center", "south"],
        ["south", "east"], ["south", "coast"], ["east", "coast"]
    ]
}"#;

#[test]
fn file_round_trip_through_enumeration() {
    let dir = tempfile::tempdir().unwrap();
    let graph_path = dir.path().join("graph.json");
    let out_path = dir.path().join("partitions.json");
    fs::write(&graph_path, HACKATHON_JSON).unwrap();

    let labeled = read_graph_from_json_file(&graph_path).unwrap();
    assert_eq!(labeled.graph().node_count(), 6);
    assert_eq!(labeled.graph().edge_count(), 7);

    let limits = calc_limits(labeled.graph(), 3, 1.1).unwrap();
    let partitions = enumerate_partitions(labeled.graph(), 3, 1.1).unwrap();
    assert_eq!(partitions.len(), 2);

    write_partitions_to_json_file(&out_path, &labeled, &limits, &partitions).unwrap();
    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();

    assert_eq!(written["count"], 2);
    let partitions = written["partitions"].as_array().unwrap();
    for partition in partitions {
        let districts = partition.as_array().unwrap();
        assert_eq!(districts.len(), 3);
        // The heaviest node is placed first, so its district is listed last.
        assert_eq!(districts[2]["nodes"], serde_json::json!(["west"]));
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_graph_from_json_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn asymmetric_or_malformed_files_are_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let loop_path = dir.path().join("loop.json");
    fs::write(&loop_path, r#"{ "nodes": [{ "id": 0, "weight": 1 }], "edges": [[0, 0]] }"#).unwrap();
    assert!(matches!(read_graph_from_json_file(&loop_path), Err(Error::InvalidGraph(_))));

    let negative_path = dir.path().join("negative.json");
    fs::write(&negative_path, r#"{ "nodes": [{ "id": 0, "weight": -2 }] }"#).unwrap();
    assert!(matches!(read_graph_from_json_file(&negative_path), Err(Error::InvalidGraph(_))));

    let garbage_path = dir.path().join("garbage.json");
    fs::write(&garbage_path, "not json").unwrap();
    assert!(matches!(read_graph_from_json_file(&garbage_path), Err(Error::Json(_))));
}
