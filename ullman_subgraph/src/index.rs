use tracing::trace;

use crate::error::ConfigurationError;
use crate::graph::{AdjacencyMatrix, Graph, GraphNode, GraphRole, NodeId};

/// Validated, index-ordered view of one graph.
///
/// Building the index checks that the graph's identity to index map is a
/// bijection onto `0..n`, where `n` is the adjacency matrix dimension. After
/// that, node `i` of the index is the node the graph places at matrix row `i`.
pub struct GraphIndex<'g, G: Graph> {
    graph: &'g G,
    nodes: Vec<&'g G::Node>,
    role: GraphRole,
}

impl<'g, G: Graph> GraphIndex<'g, G> {
    /// Resolve every node of `graph` to its matrix index.
    ///
    /// # Errors
    ///
    /// A [`ConfigurationError`] naming `role` if the node count differs from
    /// the matrix dimension, or the index map is not a bijection onto `0..n`.
    pub fn build(graph: &'g G, role: GraphRole) -> Result<Self, ConfigurationError> {
        let dim = graph.adjacency_matrix().dim();
        let listed: Vec<&'g G::Node> = graph.nodes().collect();
        if listed.len() != dim {
            return Err(ConfigurationError::NodeCountMismatch {
                role,
                nodes: listed.len(),
                dim,
            });
        }

        let mut slots: Vec<Option<&'g G::Node>> = vec![None; dim];
        for node in listed {
            let id = node.id();
            let index = graph
                .index_of(id)
                .ok_or_else(|| ConfigurationError::MissingIndex {
                    role,
                    id: format!("{id:?}"),
                })?;
            let slot = slots
                .get_mut(index)
                .ok_or_else(|| ConfigurationError::IndexOutOfRange {
                    role,
                    id: format!("{id:?}"),
                    index,
                    dim,
                })?;
            if slot.is_some() {
                return Err(ConfigurationError::DuplicateIndex { role, index });
            }
            trace!("{role} node {:?} -> index {}", id, index);
            *slot = Some(node);
        }

        // Every slot is filled: `dim` distinct in-range indices for `dim` nodes.
        let nodes = slots.into_iter().flatten().collect();
        Ok(Self { graph, nodes, role })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node at matrix index `index`.
    ///
    /// # Panics
    ///
    /// If `index >= len()`.
    #[must_use]
    pub fn node(&self, index: usize) -> &'g G::Node {
        self.nodes[index]
    }

    /// Identity of the node at `index`.
    #[must_use]
    pub fn id(&self, index: usize) -> &'g NodeId<G> {
        self.nodes[index].id()
    }

    /// Nodes in index order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &'g G::Node> + Clone + '_ {
        self.nodes.iter().copied()
    }

    /// The underlying adjacency matrix.
    #[must_use]
    pub fn adjacency(&self) -> &'g AdjacencyMatrix {
        self.graph.adjacency_matrix()
    }

    #[must_use]
    pub const fn role(&self) -> GraphRole {
        self.role
    }
}
