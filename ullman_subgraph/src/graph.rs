//! Graph abstractions consumed by the matcher.
//!
//! The matcher does not own graphs. It reads them through [`Graph`] and
//! [`GraphNode`]: a square 0/1 adjacency matrix, a stable identity to index
//! map, and a label and degree per node. Both graphs must stay unmodified
//! while a query is running.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Which side of a query a graph plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphRole {
    /// The small graph being embedded.
    Needle,
    /// The large graph being searched.
    Haystack,
}

impl fmt::Display for GraphRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Needle => f.write_str("needle"),
            Self::Haystack => f.write_str("haystack"),
        }
    }
}

/// Square boolean adjacency matrix, stored row-major.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct AdjacencyMatrix {
    dim: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// An `dim x dim` matrix with no edges.
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![false; dim * dim],
        }
    }

    /// Build a matrix from 0/1 rows.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::NonSquareMatrix`] if any row length differs from
    /// the row count, [`ConfigurationError::NonBinaryEntry`] for entries other
    /// than 0 or 1.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, ConfigurationError> {
        let dim = rows.len();
        let mut matrix = Self::new(dim);
        for (row, entries) in rows.iter().enumerate() {
            let entries = entries.as_ref();
            if entries.len() != dim {
                return Err(ConfigurationError::NonSquareMatrix {
                    row,
                    len: entries.len(),
                    expected: dim,
                });
            }
            for (col, &value) in entries.iter().enumerate() {
                match value {
                    0 => {}
                    1 => matrix.set(row, col, true),
                    _ => return Err(ConfigurationError::NonBinaryEntry { row, col, value }),
                }
            }
        }
        Ok(matrix)
    }

    #[must_use]
    pub const fn dim(&self) -> usize {
        self.dim
    }

    /// Whether there is an edge `row -> col`.
    ///
    /// # Panics
    ///
    /// If either index is `>= dim`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.dim && col < self.dim, "index ({row}, {col}) out of bounds");
        self.cells[row * self.dim + col]
    }

    /// Set or clear the entry `row -> col`.
    ///
    /// # Panics
    ///
    /// If either index is `>= dim`.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        assert!(row < self.dim && col < self.dim, "index ({row}, {col}) out of bounds");
        self.cells[row * self.dim + col] = value;
    }

    /// Number of set entries in `row`.
    #[must_use]
    pub fn row_sum(&self, row: usize) -> usize {
        self.cells[row * self.dim..(row + 1) * self.dim]
            .iter()
            .filter(|&&c| c)
            .count()
    }

    /// Number of set entries in `col`.
    #[must_use]
    pub fn col_sum(&self, col: usize) -> usize {
        (0..self.dim).filter(|&row| self.get(row, col)).count()
    }

    /// Whether the matrix equals its transpose.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        (0..self.dim).all(|i| (i + 1..self.dim).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// All set entries as `(row, col)` pairs, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(|(k, _)| (k / self.dim, k % self.dim))
    }
}

impl fmt::Debug for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = (0..self.dim)
            .map(|r| {
                (0..self.dim)
                    .map(|c| if self.get(r, c) { '1' } else { '0' })
                    .collect()
            })
            .collect();
        f.debug_struct("AdjacencyMatrix")
            .field("dim", &self.dim)
            .field("rows", &rows)
            .finish()
    }
}

/// A node as the matcher sees it.
pub trait GraphNode {
    /// Identity of the node, unique within its graph.
    type Id: Clone + Eq + Hash + fmt::Debug;
    /// Label compared by equality when building the compatibility mask.
    type Label: Eq;

    /// The node identity.
    fn id(&self) -> &Self::Id;

    /// The node label.
    fn label(&self) -> &Self::Label;

    /// Degree, consistent with the node's row/column sums in the adjacency matrix.
    fn degree(&self) -> usize;
}

/// A graph as the matcher sees it.
///
/// `index_of` must be a bijection from the node identities onto
/// `0..adjacency_matrix().dim()` and stay stable for the life of a query.
/// [`GraphIndex::build`](crate::GraphIndex::build) checks this.
pub trait Graph {
    type Node: GraphNode;

    /// The adjacency matrix, indexed by [`Graph::index_of`].
    fn adjacency_matrix(&self) -> &AdjacencyMatrix;

    /// Every node in the graph, in any order.
    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;

    /// Matrix index of the node with identity `id`.
    fn index_of(&self, id: &<Self::Node as GraphNode>::Id) -> Option<usize>;
}

/// Identity type of a graph's nodes.
pub type NodeId<G> = <<G as Graph>::Node as GraphNode>::Id;
