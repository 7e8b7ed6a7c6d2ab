use std::path::PathBuf;

use clap::Parser;
use ullman_subgraph::{Config, VerifyMethod};

/// Ullman subgraph matcher - find every embedding of one labeled graph in another
#[derive(Parser, Debug)]
#[command(name = "ullman")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Graph file of the small graph to embed (JSON)
    pub needle: PathBuf,

    /// Graph file of the graph to search (JSON)
    pub haystack: PathBuf,

    /// Which query to run
    #[arg(short = 'q', long, value_enum, default_value = "all")]
    pub query: QueryMode,

    /// How candidate assignments are verified
    #[arg(long, value_enum, default_value = "lookup")]
    pub verify: VerifyMethodArg,

    /// Stop after this many embeddings (only with `--query all`)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Print embeddings as JSON objects, one per line
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Args {
    /// Convert command-line arguments into a search configuration
    pub fn to_config(&self) -> Config {
        Config::builder().verify(self.verify.clone().into()).build()
    }
}

/// Query to run against the loaded graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum QueryMode {
    /// Every embedding, in enumeration order
    #[value(name = "all")]
    All,
    /// The first embedding only
    #[value(name = "first")]
    First,
    /// Whether any embedding exists
    #[value(name = "exists")]
    Exists,
    /// Number of embeddings
    #[value(name = "count")]
    Count,
}

/// Command-line argument wrapper for VerifyMethod
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum VerifyMethodArg {
    /// Direct adjacency lookups
    #[value(name = "lookup")]
    Lookup,
    /// Permutation matrix product
    #[value(name = "matrix-product")]
    MatrixProduct,
}

impl From<VerifyMethodArg> for VerifyMethod {
    fn from(arg: VerifyMethodArg) -> Self {
        match arg {
            VerifyMethodArg::Lookup => Self::Lookup,
            VerifyMethodArg::MatrixProduct => Self::MatrixProduct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["ullman", "n.json", "h.json"]).unwrap();
        assert_eq!(args.query, QueryMode::All);
        assert_eq!(args.to_config(), Config::default());
        assert_eq!(args.limit, None);
        assert!(!args.json);
    }

    #[test]
    fn parses_every_option() {
        let args = Args::try_parse_from([
            "ullman",
            "n.json",
            "h.json",
            "--query",
            "count",
            "--verify",
            "matrix-product",
            "--limit",
            "3",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.needle, PathBuf::from("n.json"));
        assert_eq!(args.query, QueryMode::Count);
        assert_eq!(args.to_config().verify, VerifyMethod::MatrixProduct);
        assert_eq!(args.limit, Some(3));
        assert!(args.json);
    }

    #[test]
    fn rejects_unknown_query() {
        assert!(Args::try_parse_from(["ullman", "n.json", "h.json", "-q", "some"]).is_err());
    }
}
