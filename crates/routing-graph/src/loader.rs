//! CSV graph loader.
//!
//! # CSV formats
//!
//! `nodes.csv` — one row per node, `id` in `[0, node_count)`:
//!
//! ```csv
//! id,x,y
//! 0,0.0,0.0
//! 1,0.0,1.0
//! ```
//!
//! `edges.csv` — one row per directed edge, `id` in `[0, edge_count)`:
//!
//! ```csv
//! id,from,to,base_length,base_speed_limit
//! 0,0,1,100.0,10.0
//! ```
//!
//! Node and edge counts are taken from the row counts themselves — there is
//! no separate header record — so every `id` in either file must be present
//! exactly once and fall within `[0, row_count)`. A duplicate or
//! out-of-range id surfaces as [`GraphError::BadNode`]/[`GraphError::BadEdge`]
//! from the underlying [`GraphBuilder`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use routing_core::{EdgeId, NodeId, Point};

use crate::error::GraphError;
use crate::graph::{Graph, GraphBuilder};

#[derive(Deserialize)]
struct NodeRecord {
    id: u32,
    x: f64,
    y: f64,
}

#[derive(Deserialize)]
struct EdgeRecord {
    id: u32,
    from: u32,
    to: u32,
    base_length: f64,
    base_speed_limit: f64,
}

/// Load a [`Graph`] from a pair of CSV files on disk.
pub fn load_graph_csv(nodes_path: &Path, edges_path: &Path) -> Result<Graph, GraphError> {
    let nodes_file = std::fs::File::open(nodes_path)?;
    let edges_file = std::fs::File::open(edges_path)?;
    load_graph_readers(nodes_file, edges_file)
}

/// Like [`load_graph_csv`] but accepts any `Read` source — useful for tests
/// (`std::io::Cursor`) or non-filesystem transports.
pub fn load_graph_readers<N: Read, E: Read>(
    nodes_reader: N,
    edges_reader: E,
) -> Result<Graph, GraphError> {
    let node_rows = read_records::<NodeRecord, _>(nodes_reader)?;
    let edge_rows = read_records::<EdgeRecord, _>(edges_reader)?;

    let mut builder = GraphBuilder::new(node_rows.len(), edge_rows.len());

    for row in node_rows {
        let id = NodeId::try_from(row.id as usize)
            .map_err(|_| GraphError::Parse(format!("node id {} does not fit NodeId", row.id)))?;
        builder.set_node(id, Point::new(row.x, row.y))?;
    }

    for row in edge_rows {
        let id = EdgeId::try_from(row.id as usize)
            .map_err(|_| GraphError::Parse(format!("edge id {} does not fit EdgeId", row.id)))?;
        let from = NodeId(row.from);
        let to = NodeId(row.to);
        builder.add_edge(id, from, to, row.base_length, row.base_speed_limit)?;
    }

    builder.build()
}

fn read_records<T, R>(reader: R) -> Result<Vec<T>, GraphError>
where
    T: for<'de> Deserialize<'de>,
    R: Read,
{
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<T>()
        .map(|r| r.map_err(|e| GraphError::Parse(e.to_string())))
        .collect()
}
