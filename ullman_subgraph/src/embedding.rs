use std::hash::Hash;

use indexmap::IndexMap;
use serde::Serialize;

use crate::graph::{Graph, NodeId};
use crate::index::GraphIndex;

/// One subgraph embedding: needle node identity -> haystack node identity.
///
/// Holds exactly one entry per needle node, in needle index order. Distinct
/// needle nodes map to distinct haystack nodes. Owns its identities, so it
/// outlives the query that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Embedding<I: Hash + Eq> {
    mapping: IndexMap<I, I>,
}

impl<I: Hash + Eq> Embedding<I> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Whether the needle graph was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Haystack identity assigned to a needle identity.
    #[must_use]
    pub fn get(&self, needle: &I) -> Option<&I> {
        self.mapping.get(needle)
    }

    /// `(needle, haystack)` pairs in needle index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&I, &I)> {
        self.mapping.iter()
    }

    /// Haystack identities in needle index order.
    pub fn haystack_ids(&self) -> impl ExactSizeIterator<Item = &I> {
        self.mapping.values()
    }

    /// The underlying ordered map.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<I, I> {
        self.mapping
    }
}

impl<'a, I: Hash + Eq> IntoIterator for &'a Embedding<I> {
    type Item = (&'a I, &'a I);
    type IntoIter = indexmap::map::Iter<'a, I, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.mapping.iter()
    }
}

/// Turn a verified assignment into an [`Embedding`].
///
/// `columns[i]` is the haystack index assigned to needle index `i`. The
/// assignment must be complete, injective and already verified; anything
/// else is a caller bug.
#[contracts::debug_requires(columns.len() == needle.len())]
#[contracts::debug_ensures(ret.len() == columns.len())]
pub(crate) fn map_assignment<G: Graph>(
    needle: &GraphIndex<'_, G>,
    haystack: &GraphIndex<'_, G>,
    columns: &[usize],
) -> Embedding<NodeId<G>> {
    let mapping = columns
        .iter()
        .enumerate()
        .map(|(row, &col)| (needle.id(row).clone(), haystack.id(col).clone()))
        .collect();
    Embedding { mapping }
}
