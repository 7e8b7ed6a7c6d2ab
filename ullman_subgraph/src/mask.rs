//! Static row/column compatibility table.

use itertools::iproduct;
use tracing::debug;

use crate::graph::{Graph, GraphNode};
use crate::index::GraphIndex;

/// `M x N` table of which needle node (row) may ever map to which haystack
/// node (column).
///
/// `allows(i, j)` holds iff the labels are equal and the needle node's degree
/// does not exceed the haystack node's. Built once per query and never
/// modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompatibilityMask {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl CompatibilityMask {
    /// Compare every needle node against every haystack node in index order.
    pub fn build<G: Graph>(needle: &GraphIndex<'_, G>, haystack: &GraphIndex<'_, G>) -> Self {
        let (rows, cols) = (needle.len(), haystack.len());
        let cells: Vec<bool> = iproduct!(needle.nodes(), haystack.nodes())
            .map(|(n, h)| n.label() == h.label() && n.degree() <= h.degree())
            .collect();

        let mask = Self { rows, cols, cells };
        debug!(
            "compatibility mask {}x{}: {} allowed pairs",
            rows,
            cols,
            mask.allowed_pairs()
        );
        mask
    }

    /// Build a mask from explicit rows of booleans.
    ///
    /// # Panics
    ///
    /// If the rows do not all have the same length.
    #[must_use]
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == cols),
            "mask rows must have equal length"
        );
        Self {
            rows: rows.len(),
            cols,
            cells: rows.concat(),
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Whether needle node `row` may map to haystack node `col`.
    #[must_use]
    pub fn allows(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// Total number of allowed pairs.
    #[must_use]
    pub fn allowed_pairs(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Whether some row has no allowed column at all.
    #[must_use]
    pub fn is_unsatisfiable(&self) -> bool {
        (0..self.rows).any(|row| (0..self.cols).all(|col| !self.allows(row, col)))
    }
}
