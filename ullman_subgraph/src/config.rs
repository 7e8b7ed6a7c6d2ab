//! Configuration for a subgraph search.
//!
//! The only knob is how candidates are verified. Both methods accept and
//! reject exactly the same candidates; they differ in cost.
//!
//! ```
//! use ullman_subgraph::{Config, VerifyMethod};
//!
//! let cfg = Config::builder().matrix_product().build();
//! assert_eq!(cfg.verify, VerifyMethod::MatrixProduct);
//! assert_eq!(Config::default().verify, VerifyMethod::Lookup);
//! ```

use serde::{Deserialize, Serialize};

use crate::verify::{AdjacencyLookup, EdgeVerifier, PermutationProduct};

/// Search configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// How each candidate assignment is checked against the adjacency matrices.
    pub verify: VerifyMethod,
}

impl Config {
    /// Start from the default configuration.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Candidate verification strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerifyMethod {
    /// Direct adjacency lookups per needle edge, `O(M²)` per candidate.
    #[default]
    Lookup,
    /// Build `P·B·Pᵗ` and compare entrywise, `O(M²·N)` per candidate.
    MatrixProduct,
}

impl VerifyMethod {
    /// The verifier implementing this method.
    #[must_use]
    pub fn verifier(self) -> &'static dyn EdgeVerifier {
        match self {
            Self::Lookup => &AdjacencyLookup,
            Self::MatrixProduct => &PermutationProduct,
        }
    }
}

/// Builder for [`Config`].
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    verify: VerifyMethod,
}

impl ConfigBuilder {
    /// Use the given verification method.
    #[must_use]
    pub const fn verify(mut self, method: VerifyMethod) -> Self {
        self.verify = method;
        self
    }

    /// Verify by direct adjacency lookup.
    #[must_use]
    pub const fn lookup(self) -> Self {
        self.verify(VerifyMethod::Lookup)
    }

    /// Verify by permutation matrix product.
    #[must_use]
    pub const fn matrix_product(self) -> Self {
        self.verify(VerifyMethod::MatrixProduct)
    }

    /// Finish.
    #[must_use]
    pub const fn build(self) -> Config {
        Config {
            verify: self.verify,
        }
    }
}
