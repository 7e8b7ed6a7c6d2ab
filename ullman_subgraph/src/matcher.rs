//! Subgraph monomorphism queries.
//!
//! A [`SubgraphMatcher`] validates a needle and a haystack graph once. Each
//! query then builds its own compatibility mask and enumerator, so queries
//! never share mutable state and the matcher itself is immutable.

use tracing::{debug, trace};

use crate::config::Config;
use crate::embedding::{Embedding, map_assignment};
use crate::error::ConfigurationError;
use crate::graph::{Graph, GraphRole, NodeId};
use crate::index::GraphIndex;
use crate::mask::CompatibilityMask;
use crate::search::PermutationEnumerator;
use crate::stats::SearchStats;
use crate::verify::EdgeVerifier;

/// Entry point for subgraph monomorphism searches.
pub struct SubgraphMatcher<'needle, 'haystack, G: Graph> {
    /// Index of the small graph being embedded.
    needle: GraphIndex<'needle, G>,
    /// Index of the graph searched.
    haystack: GraphIndex<'haystack, G>,
    config: Config,
}

impl<'needle, 'haystack, G: Graph> SubgraphMatcher<'needle, 'haystack, G> {
    /// Validate both graphs and prepare for queries.
    ///
    /// # Errors
    ///
    /// A [`ConfigurationError`] if either graph's identity to index map is
    /// not a bijection onto its adjacency matrix rows.
    pub fn new(
        needle: &'needle G,
        haystack: &'haystack G,
        config: Config,
    ) -> Result<Self, ConfigurationError> {
        let needle = GraphIndex::build(needle, GraphRole::Needle)?;
        let haystack = GraphIndex::build(haystack, GraphRole::Haystack)?;
        debug!(
            "matcher ready: needle {} nodes, haystack {} nodes, verify {:?}",
            needle.len(),
            haystack.len(),
            config.verify
        );
        Ok(Self {
            needle,
            haystack,
            config,
        })
    }

    /// Validate, then collect every embedding.
    ///
    /// # Errors
    ///
    /// See [`SubgraphMatcher::new`].
    pub fn enumerate_all(
        needle: &'needle G,
        haystack: &'haystack G,
        config: Config,
    ) -> Result<Vec<Embedding<NodeId<G>>>, ConfigurationError> {
        Ok(Self::new(needle, haystack, config)?.all_embeddings().collect())
    }

    /// Lazily enumerate every embedding, in lexicographic order of the
    /// assigned haystack indices.
    ///
    /// Each call starts a fresh search. Dropping the iterator abandons it.
    #[must_use]
    pub fn all_embeddings(&self) -> Embeddings<'_, G> {
        let mask = CompatibilityMask::build(&self.needle, &self.haystack);
        Embeddings {
            needle: &self.needle,
            haystack: &self.haystack,
            enumerator: PermutationEnumerator::new(mask),
            verifier: self.config.verify.verifier(),
            stats: SearchStats::default(),
        }
    }

    /// The first embedding in enumeration order, if any.
    #[must_use]
    pub fn first_embedding(&self) -> Option<Embedding<NodeId<G>>> {
        self.all_embeddings().next()
    }

    /// Whether any embedding exists. Stops at the first accepted candidate
    /// without building the mapping.
    #[must_use]
    pub fn has_embedding(&self) -> bool {
        self.all_embeddings().next_verified().is_some()
    }

    /// Number of embeddings, without building any mapping.
    #[must_use]
    pub fn count_embeddings(&self) -> usize {
        let mut query = self.all_embeddings();
        let mut count = 0;
        while query.next_verified().is_some() {
            count += 1;
        }
        count
    }

    #[must_use]
    pub const fn needle(&self) -> &GraphIndex<'needle, G> {
        &self.needle
    }

    #[must_use]
    pub const fn haystack(&self) -> &GraphIndex<'haystack, G> {
        &self.haystack
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}

/// Lazy sequence of embeddings for one query.
///
/// Owns the query's mask and assignment state; nothing is shared with other
/// queries. Finite, and not replayable.
pub struct Embeddings<'m, G: Graph> {
    needle: &'m GraphIndex<'m, G>,
    haystack: &'m GraphIndex<'m, G>,
    enumerator: PermutationEnumerator,
    verifier: &'static dyn EdgeVerifier,
    stats: SearchStats,
}

impl<G: Graph> Embeddings<'_, G> {
    /// Counters for this query so far.
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The mask this query enumerates.
    #[must_use]
    pub const fn mask(&self) -> &CompatibilityMask {
        self.enumerator.mask()
    }

    /// Advance to the next candidate that passes verification.
    fn next_verified(&mut self) -> Option<&[usize]> {
        let needle = self.needle.adjacency();
        let haystack = self.haystack.adjacency();
        let verifier = self.verifier;

        loop {
            let accepted = match self.enumerator.advance() {
                Some(columns) => {
                    let ok = verifier.preserves_edges(needle, haystack, columns);
                    trace!("{} {:?}", if ok { "accepted" } else { "rejected" }, columns);
                    ok
                }
                None => {
                    debug!(
                        "query exhausted: {} candidates, {} embeddings",
                        self.stats.candidates, self.stats.accepted
                    );
                    return None;
                }
            };
            self.stats.candidates += 1;
            if accepted {
                self.stats.accepted += 1;
                return Some(self.enumerator.current());
            }
        }
    }
}

impl<G: Graph> Iterator for Embeddings<'_, G> {
    type Item = Embedding<NodeId<G>>;

    fn next(&mut self) -> Option<Self::Item> {
        let (needle, haystack) = (self.needle, self.haystack);
        let columns = self.next_verified()?;
        Some(map_assignment(needle, haystack, columns))
    }
}
