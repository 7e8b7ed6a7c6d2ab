#![allow(dead_code)]

use std::sync::OnceLock;

use ullman_subgraph::LabeledGraph;

pub fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Undirected graph from `(id, label)` nodes and `(a, b)` edges.
pub fn graph(nodes: &[(&str, &str)], edges: &[(&str, &str)]) -> LabeledGraph {
    let mut b = LabeledGraph::builder();
    for (id, label) in nodes {
        b = b.node(*id, *label);
    }
    for (from, to) in edges {
        b = b.edge(*from, *to);
    }
    b.build().expect("fixture graph is well formed")
}

/// Complete graph on `ids`, every node labeled `label`.
pub fn clique(ids: &[&str], label: &str) -> LabeledGraph {
    let nodes: Vec<(&str, &str)> = ids.iter().map(|id| (*id, label)).collect();
    let mut edges = Vec::new();
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            edges.push((*a, *b));
        }
    }
    graph(&nodes, &edges)
}

/// Path `ids[0] - ids[1] - ...`, every node labeled `label`.
pub fn path(ids: &[&str], label: &str) -> LabeledGraph {
    let nodes: Vec<(&str, &str)> = ids.iter().map(|id| (*id, label)).collect();
    let edges: Vec<(&str, &str)> = ids.windows(2).map(|w| (w[0], w[1])).collect();
    graph(&nodes, &edges)
}

/// Pairs of an embedding as owned strings, in needle order.
pub fn pairs(e: &ullman_subgraph::Embedding<String>) -> Vec<(String, String)> {
    e.iter().map(|(n, h)| (n.clone(), h.clone())).collect()
}
