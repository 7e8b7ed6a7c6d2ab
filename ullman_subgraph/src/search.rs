//! Depth-first enumeration of mask-respecting injective assignments.

use tracing::trace;

use crate::mask::CompatibilityMask;
use crate::state::Assignment;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Nothing produced yet.
    Fresh,
    /// The last call returned a complete assignment.
    Yielded,
    /// No further assignments.
    Exhausted,
}

/// Lazily enumerates every injective row -> column assignment allowed by a
/// [`CompatibilityMask`], in lexicographic order of the column vector.
///
/// The search is the row-by-row backtracking of Ullman (1976) with the
/// per-row cursors kept on an explicit stack. The mask is the only pruning.
/// A single enumerator is not replayable; build a new one to start over.
#[derive(Clone, Debug)]
pub struct PermutationEnumerator {
    mask: CompatibilityMask,
    state: Assignment,
    /// First column to try for row `state.len()`.
    resume_from: usize,
    phase: Phase,
    produced: u64,
}

impl PermutationEnumerator {
    /// Start an enumeration over `mask`.
    #[must_use]
    pub fn new(mask: CompatibilityMask) -> Self {
        let state = Assignment::new(mask.rows(), mask.cols());
        Self {
            mask,
            state,
            resume_from: 0,
            phase: Phase::Fresh,
            produced: 0,
        }
    }

    #[must_use]
    pub const fn mask(&self) -> &CompatibilityMask {
        &self.mask
    }

    /// Number of complete assignments produced so far.
    #[must_use]
    pub const fn produced(&self) -> u64 {
        self.produced
    }

    /// Whether the enumeration has finished.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.phase == Phase::Exhausted
    }

    /// Advance to the next complete assignment.
    ///
    /// Returns the assigned column of every row, row 0 first, or `None` once
    /// all assignments have been produced. With zero rows the empty
    /// assignment is produced exactly once. With more rows than columns
    /// nothing is produced.
    pub fn advance(&mut self) -> Option<&[usize]> {
        let rows = self.mask.rows();
        let cols = self.mask.cols();

        match self.phase {
            Phase::Exhausted => return None,
            Phase::Fresh if rows == 0 => {
                self.phase = Phase::Exhausted;
                self.produced += 1;
                return Some(self.state.columns());
            }
            Phase::Fresh if rows > cols => {
                trace!("{} rows cannot fit into {} columns", rows, cols);
                self.phase = Phase::Exhausted;
                return None;
            }
            Phase::Fresh => self.resume_from = 0,
            Phase::Yielded => self.backtrack_last(),
        }

        loop {
            let row = self.state.len();
            let next = (self.resume_from..cols)
                .find(|&col| self.mask.allows(row, col) && !self.state.is_used(col));

            match next {
                Some(col) => {
                    self.state.push(col);
                    if self.state.len() == rows {
                        self.phase = Phase::Yielded;
                        self.produced += 1;
                        return Some(self.state.columns());
                    }
                    self.resume_from = 0;
                }
                None => {
                    if self.state.is_empty() {
                        trace!("enumeration exhausted after {} assignments", self.produced);
                        self.phase = Phase::Exhausted;
                        return None;
                    }
                    self.backtrack_last();
                }
            }
        }
    }

    /// The assignment most recently returned by [`advance`](Self::advance).
    ///
    /// Only meaningful directly after `advance` returned `Some`.
    #[must_use]
    pub fn current(&self) -> &[usize] {
        self.state.columns()
    }

    /// Release the deepest assigned row and resume it from its next column.
    fn backtrack_last(&mut self) {
        if let Some(col) = self.state.pop() {
            self.resume_from = col + 1;
        }
    }
}
