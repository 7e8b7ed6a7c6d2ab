//! Ullman subgraph matcher CLI
//!
//! Loads a needle and a haystack graph from JSON files and reports the
//! embeddings of the needle in the haystack.

mod args;
mod graph_file;

use std::io::Write;

use clap::Parser;
use tracing::info;
use ullman_subgraph::{Embedding, SubgraphMatcher};

use args::{Args, QueryMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    run(&args, std::io::stdout().lock())
}

/// Load both graphs and write the query result to `out`.
///
/// Logging is controlled through `RUST_LOG` and goes to stderr.
fn run(args: &Args, mut out: impl Write) -> Result<(), Box<dyn std::error::Error>> {
    info!("Loading needle: {}", args.needle.display());
    let needle = graph_file::load(&args.needle)?;
    info!("Loading haystack: {}", args.haystack.display());
    let haystack = graph_file::load(&args.haystack)?;

    let matcher = SubgraphMatcher::new(&needle, &haystack, args.to_config())?;
    info!("Running {:?} query with {:?} verification", args.query, args.verify);

    match args.query {
        QueryMode::All => {
            let mut query = matcher.all_embeddings();
            let limit = args.limit.unwrap_or(usize::MAX);
            for (i, embedding) in query.by_ref().take(limit).enumerate() {
                print_embedding(&mut out, i, &embedding, args.json)?;
            }
            let stats = query.stats();
            info!(
                "{} embeddings from {} candidates ({} rejected)",
                stats.accepted,
                stats.candidates,
                stats.rejected()
            );
        }
        QueryMode::First => match matcher.first_embedding() {
            Some(embedding) => print_embedding(&mut out, 0, &embedding, args.json)?,
            None if args.json => writeln!(out, "null")?,
            None => writeln!(out, "no embedding")?,
        },
        QueryMode::Exists => writeln!(out, "{}", matcher.has_embedding())?,
        QueryMode::Count => writeln!(out, "{}", matcher.count_embeddings())?,
    }

    Ok(())
}

fn print_embedding(
    out: &mut impl Write,
    i: usize,
    embedding: &Embedding<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        writeln!(out, "{}", serde_json::to_string(embedding)?)?;
    } else {
        let pairs: Vec<String> = embedding
            .iter()
            .map(|(n, h)| format!("{n} -> {h}"))
            .collect();
        writeln!(out, "{i}: {}", pairs.join(", "))?;
    }
    Ok(())
}
