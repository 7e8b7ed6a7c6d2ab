/// Counters for one query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Complete candidate assignments handed to the verifier.
    pub candidates: u64,
    /// Candidates the verifier accepted.
    pub accepted: u64,
}

impl SearchStats {
    /// Candidates the verifier rejected.
    #[must_use]
    pub const fn rejected(&self) -> u64 {
        self.candidates - self.accepted
    }
}
