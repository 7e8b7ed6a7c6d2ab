//! A ready-made labeled graph implementing [`Graph`].
//!
//! Nodes carry string identities and string labels. Matrix indices follow
//! declaration order and degrees are derived from the matrix.

use std::collections::HashMap;

use crate::error::ConfigurationError;
use crate::graph::{AdjacencyMatrix, Graph, GraphNode};

/// A node of a [`LabeledGraph`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LabeledNode {
    id: String,
    label: String,
    degree: usize,
}

impl LabeledNode {
    /// A node with an explicit degree.
    pub fn new(id: impl Into<String>, label: impl Into<String>, degree: usize) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            degree,
        }
    }
}

impl GraphNode for LabeledNode {
    type Id = String;
    type Label = String;

    fn id(&self) -> &String {
        &self.id
    }

    fn label(&self) -> &String {
        &self.label
    }

    fn degree(&self) -> usize {
        self.degree
    }
}

/// Graph with string-identified, string-labeled nodes.
#[derive(Clone, Debug)]
pub struct LabeledGraph {
    nodes: Vec<LabeledNode>,
    index: HashMap<String, usize>,
    adjacency: AdjacencyMatrix,
    directed: bool,
}

impl LabeledGraph {
    /// Start building an undirected graph.
    #[must_use]
    pub fn builder() -> LabeledGraphBuilder {
        LabeledGraphBuilder::default()
    }

    /// Node with identity `id`.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&LabeledNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }
}

impl Graph for LabeledGraph {
    type Node = LabeledNode;

    fn adjacency_matrix(&self) -> &AdjacencyMatrix {
        &self.adjacency
    }

    fn nodes(&self) -> impl Iterator<Item = &LabeledNode> {
        self.nodes.iter()
    }

    fn index_of(&self, id: &String) -> Option<usize> {
        self.index.get(id).copied()
    }
}

/// Builder for [`LabeledGraph`].
#[derive(Clone, Debug, Default)]
pub struct LabeledGraphBuilder {
    directed: bool,
    nodes: Vec<(String, String)>,
    edges: Vec<(String, String)>,
}

impl LabeledGraphBuilder {
    /// Treat edges as directed (`a -> b` only) instead of undirected.
    #[must_use]
    pub const fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Declare a node. Its matrix index is its position among declared nodes.
    #[must_use]
    pub fn node(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.nodes.push((id.into(), label.into()));
        self
    }

    /// Declare an edge between two declared nodes.
    #[must_use]
    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.edges.push((from.into(), to.into()));
        self
    }

    /// Build the graph, deriving each node's degree from the matrix.
    ///
    /// Undirected degree is the row sum; directed degree is the row sum plus
    /// the column sum.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::DuplicateNode`] if an identity is declared twice,
    /// [`ConfigurationError::UnknownNode`] if an edge names an undeclared node.
    pub fn build(self) -> Result<LabeledGraph, ConfigurationError> {
        let mut index: HashMap<String, usize> = HashMap::with_capacity(self.nodes.len());
        for (i, (id, _)) in self.nodes.iter().enumerate() {
            if index.insert(id.clone(), i).is_some() {
                return Err(ConfigurationError::DuplicateNode { id: id.clone() });
            }
        }

        let lookup = |id: &String| {
            index
                .get(id)
                .copied()
                .ok_or_else(|| ConfigurationError::UnknownNode { id: id.clone() })
        };

        let mut adjacency = AdjacencyMatrix::new(self.nodes.len());
        for (from, to) in &self.edges {
            let (a, b) = (lookup(from)?, lookup(to)?);
            adjacency.set(a, b, true);
            if !self.directed {
                adjacency.set(b, a, true);
            }
        }

        let nodes = self
            .nodes
            .into_iter()
            .enumerate()
            .map(|(i, (id, label))| {
                let degree = if self.directed {
                    adjacency.row_sum(i) + adjacency.col_sum(i)
                } else {
                    adjacency.row_sum(i)
                };
                LabeledNode { id, label, degree }
            })
            .collect();

        Ok(LabeledGraph {
            nodes,
            index,
            adjacency,
            directed: self.directed,
        })
    }
}
