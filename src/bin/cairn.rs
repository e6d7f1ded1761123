//! Cairn CLI binary.
//!
//! Indexes a JSON corpus of `{"title", "content"}` documents with the
//! deterministic hashing embedder and ranks it against a query.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cairn::config::SearchConfig;
use cairn::document::DocumentDraft;
use cairn::embedding::HashingEmbedder;
use cairn::error::Result;
use cairn::search::SearchService;
use cairn::storage::memory::MemoryDocumentStore;

#[derive(Debug, Parser)]
#[command(name = "cairn", version, about = "Embedding-indexed similarity search")]
struct CairnArgs {
    /// Path to a JSON array of {"title", "content"} documents.
    #[arg(long)]
    corpus: PathBuf,

    /// Query text to rank the corpus against.
    #[arg(long)]
    query: String,

    /// Number of results to return (defaults to the configured default).
    #[arg(long)]
    top_k: Option<usize>,

    /// Dimensionality of the hashing embedder.
    #[arg(long, default_value_t = HashingEmbedder::DEFAULT_DIMENSION)]
    dimension: usize,

    /// Increase log verbosity (-v for info, -vv for debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let args = CairnArgs::parse();

    let default_level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(args: CairnArgs) -> Result<()> {
    let file = File::open(&args.corpus)?;
    let drafts: Vec<DocumentDraft> = serde_json::from_reader(BufReader::new(file))?;

    let service = SearchService::new(
        Arc::new(MemoryDocumentStore::new()),
        Arc::new(HashingEmbedder::new(args.dimension)?),
        SearchConfig::default(),
    );

    service.index(drafts).await?;
    let results = service.search(&args.query, args.top_k).await?;

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
