//! Errors raised while validating graph inputs.

use thiserror::Error;

use crate::graph::GraphRole;

/// A graph handed to the matcher is malformed.
///
/// An empty result is never reported through this type; a search that
/// finds nothing simply yields no embeddings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A row of an adjacency matrix has the wrong length.
    #[error("adjacency matrix is not square: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        /// Offending row.
        row: usize,
        /// Entries found in that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// An adjacency matrix entry is neither 0 nor 1.
    #[error("adjacency matrix entry ({row}, {col}) is {value}, expected 0 or 1")]
    NonBinaryEntry {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
        /// Value found.
        value: u8,
    },

    /// The number of nodes does not match the matrix dimension.
    #[error("{role} graph has {nodes} nodes but a {dim}x{dim} adjacency matrix")]
    NodeCountMismatch {
        /// Which graph.
        role: GraphRole,
        /// Nodes reported by the graph.
        nodes: usize,
        /// Matrix dimension.
        dim: usize,
    },

    /// A node has no matrix index.
    #[error("{role} graph has no index for node {id}")]
    MissingIndex {
        /// Which graph.
        role: GraphRole,
        /// Debug rendering of the node identity.
        id: String,
    },

    /// A node index lies outside `0..dim`.
    #[error("{role} graph maps node {id} to index {index}, outside 0..{dim}")]
    IndexOutOfRange {
        /// Which graph.
        role: GraphRole,
        /// Debug rendering of the node identity.
        id: String,
        /// Reported index.
        index: usize,
        /// Matrix dimension.
        dim: usize,
    },

    /// Two nodes share one matrix index.
    #[error("{role} graph maps more than one node to index {index}")]
    DuplicateIndex {
        /// Which graph.
        role: GraphRole,
        /// The shared index.
        index: usize,
    },

    /// A node identity was declared twice while building a graph.
    #[error("node {id} declared more than once")]
    DuplicateNode {
        /// The repeated identity.
        id: String,
    },

    /// An edge refers to a node that was never declared.
    #[error("edge refers to unknown node {id}")]
    UnknownNode {
        /// The missing identity.
        id: String,
    },
}
