//! Edge-preservation test for a complete candidate assignment.
//!
//! A candidate maps needle row `i` to haystack column `c[i]`. It is accepted
//! iff every needle edge `i -> j` lands on a haystack edge `c[i] -> c[j]`.
//! Extra haystack edges among the mapped nodes are allowed.

use crate::graph::AdjacencyMatrix;

/// Decides whether a candidate assignment preserves every needle edge.
///
/// Implementations are pure and must agree on every input. They are shared
/// by every query, including queries running on other threads.
pub trait EdgeVerifier: Sync {
    /// `columns[i]` is the haystack index assigned to needle index `i`.
    fn preserves_edges(
        &self,
        needle: &AdjacencyMatrix,
        haystack: &AdjacencyMatrix,
        columns: &[usize],
    ) -> bool;
}

/// Looks up `haystack[c[i]][c[j]]` for each needle edge `(i, j)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdjacencyLookup;

impl EdgeVerifier for AdjacencyLookup {
    fn preserves_edges(
        &self,
        needle: &AdjacencyMatrix,
        haystack: &AdjacencyMatrix,
        columns: &[usize],
    ) -> bool {
        debug_assert_eq!(needle.dim(), columns.len());
        needle
            .edges()
            .all(|(i, j)| haystack.get(columns[i], columns[j]))
    }
}

/// Materialises the permutation matrix `P` and compares `C = P·B·Pᵗ` against
/// the needle matrix entrywise.
#[derive(Clone, Copy, Debug, Default)]
pub struct PermutationProduct;

impl EdgeVerifier for PermutationProduct {
    fn preserves_edges(
        &self,
        needle: &AdjacencyMatrix,
        haystack: &AdjacencyMatrix,
        columns: &[usize],
    ) -> bool {
        debug_assert_eq!(needle.dim(), columns.len());
        let p = DenseMatrix::permutation(columns, haystack.dim());
        let b = DenseMatrix::from(haystack);
        let c = p.multiply(&b).multiply(&p.transpose());

        needle.edges().all(|(i, j)| c.get(i, j) != 0)
    }
}

/// Row-major integer matrix used only for the product test.
#[derive(Clone, Debug, PartialEq, Eq)]
struct DenseMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl DenseMatrix {
    fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// `M x N` indicator with a single 1 per row, at the assigned column.
    fn permutation(columns: &[usize], cols: usize) -> Self {
        let mut p = Self::zeros(columns.len(), cols);
        for (row, &col) in columns.iter().enumerate() {
            p.cells[row * cols + col] = 1;
        }
        p
    }

    fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.cols + col]
    }

    fn transpose(&self) -> Self {
        let mut t = Self::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                t.cells[c * self.rows + r] = self.get(r, c);
            }
        }
        t
    }

    fn multiply(&self, rhs: &Self) -> Self {
        debug_assert_eq!(self.cols, rhs.rows);
        let mut out = Self::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.get(i, k);
                if a == 0 {
                    continue;
                }
                for j in 0..rhs.cols {
                    out.cells[i * rhs.cols + j] += a * rhs.get(k, j);
                }
            }
        }
        out
    }
}

impl From<&AdjacencyMatrix> for DenseMatrix {
    fn from(m: &AdjacencyMatrix) -> Self {
        let mut d = Self::zeros(m.dim(), m.dim());
        for (r, c) in m.edges() {
            d.cells[r * m.dim() + c] = 1;
        }
        d
    }
}
