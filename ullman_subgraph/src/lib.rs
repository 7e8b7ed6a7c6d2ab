//! Subgraph monomorphism search after Ullman (1976).
//!
//! Given a small *needle* graph and a large *haystack* graph, find injective
//! maps from needle nodes to haystack nodes such that every needle edge lands
//! on a haystack edge. A needle node may only map to a haystack node with the
//! same label and at least the same degree.
//!
//! ```
//! use ullman_subgraph::{Config, LabeledGraph, SubgraphMatcher};
//!
//! let needle = LabeledGraph::builder()
//!     .node("a", "X")
//!     .node("b", "X")
//!     .edge("a", "b")
//!     .build()?;
//! let haystack = LabeledGraph::builder()
//!     .node("p", "X")
//!     .node("q", "X")
//!     .node("r", "X")
//!     .edge("p", "q")
//!     .edge("q", "r")
//!     .edge("r", "p")
//!     .build()?;
//!
//! let matcher = SubgraphMatcher::new(&needle, &haystack, Config::default())?;
//! assert_eq!(matcher.all_embeddings().count(), 6);
//!
//! let first = matcher.first_embedding().unwrap();
//! assert_eq!(first.get(&"a".to_string()).map(String::as_str), Some("p"));
//! assert_eq!(first.get(&"b".to_string()).map(String::as_str), Some("q"));
//! # Ok::<(), ullman_subgraph::ConfigurationError>(())
//! ```

pub mod config;
pub mod graph;
pub mod verify;

mod embedding;
mod error;
mod index;
mod labeled;
mod mask;
mod matcher;
mod search;
mod state;
mod stats;

pub use config::{Config, ConfigBuilder, VerifyMethod};
pub use embedding::Embedding;
pub use error::ConfigurationError;
pub use graph::{AdjacencyMatrix, Graph, GraphNode, GraphRole, NodeId};
pub use index::GraphIndex;
pub use labeled::{LabeledGraph, LabeledGraphBuilder, LabeledNode};
pub use mask::CompatibilityMask;
pub use matcher::{Embeddings, SubgraphMatcher};
pub use search::PermutationEnumerator;
pub use stats::SearchStats;
pub use verify::{AdjacencyLookup, EdgeVerifier, PermutationProduct};
