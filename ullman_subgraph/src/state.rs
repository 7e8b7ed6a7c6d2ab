/// Partial row -> column assignment for one query.
///
/// Rows are always assigned in order, so the assignment is a stack: rows
/// `0..len()` hold a column, later rows are unassigned. Assigned columns are
/// pairwise distinct.
#[derive(Clone, Debug)]
pub(crate) struct Assignment {
    columns: Vec<usize>,
    used: Vec<bool>,
}

impl Assignment {
    #[contracts::debug_ensures(ret.is_empty())]
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            columns: Vec::with_capacity(rows),
            used: vec![false; cols],
        }
    }

    /// Number of assigned rows.
    pub(crate) fn len(&self) -> usize {
        self.columns.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub(crate) fn is_used(&self, col: usize) -> bool {
        self.used[col]
    }

    /// Assign `col` to the next row.
    #[contracts::debug_requires(!self.is_used(col))]
    #[contracts::debug_ensures(self.is_used(col) && self.len() == old(self.len()) + 1)]
    pub(crate) fn push(&mut self, col: usize) {
        self.used[col] = true;
        self.columns.push(col);
    }

    /// Unassign the last row, returning its column.
    #[contracts::debug_ensures(ret.is_none_or(|col| !self.is_used(col)))]
    pub(crate) fn pop(&mut self) -> Option<usize> {
        let col = self.columns.pop();
        if let Some(c) = col {
            self.used[c] = false;
        }
        col
    }

    /// Columns of the assigned rows, row 0 first.
    pub(crate) fn columns(&self) -> &[usize] {
        &self.columns
    }
}
