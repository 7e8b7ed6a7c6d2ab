//! JSON graph files.
//!
//! ```json
//! { "directed": false,
//!   "nodes": [{ "id": "a", "label": "X" }, { "id": "b", "label": "X" }],
//!   "edges": [["a", "b"]] }
//! ```
//!
//! Matrix indices follow the order of `nodes`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use ullman_subgraph::{ConfigurationError, LabeledGraph};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphFile {
    #[serde(default)]
    directed: bool,
    nodes: Vec<NodeEntry>,
    #[serde(default)]
    edges: Vec<(String, String)>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeEntry {
    id: String,
    label: String,
}

/// A graph file could not be turned into a graph.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a valid graph document.
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The document describes an inconsistent graph.
    #[error(transparent)]
    Invalid(#[from] ConfigurationError),
}

/// Read and build the graph stored at `path`.
pub fn load(path: &Path) -> Result<LabeledGraph, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    let file: GraphFile = serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_owned(),
        source,
    })?;
    debug!(
        "{}: {} nodes, {} edges, directed {}",
        path.display(),
        file.nodes.len(),
        file.edges.len(),
        file.directed
    );

    let mut builder = LabeledGraph::builder().directed(file.directed);
    for node in file.nodes {
        builder = builder.node(node.id, node.label);
    }
    for (from, to) in file.edges {
        builder = builder.edge(from, to);
    }
    Ok(builder.build()?)
}
