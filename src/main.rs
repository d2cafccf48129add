// src/main.rs
mod corpus;
mod extractors;
mod newsgroups;
mod storage;
mod utils;

use clap::Parser;

use corpus::TextCollection;
use newsgroups::client::NewsgroupsClient;
use newsgroups::models::{Remove, Subset};
use storage::StorageManager;
use utils::AppError;

/// Command Line Interface for the 20 Newsgroups document extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of leading documents to write out
    #[arg(short = 'n', long, default_value = "20")]
    count: usize,

    /// Output directory for the extracted documents
    #[arg(short, long, default_value = "sample_docs")]
    output_dir: String,

    /// Which dataset split(s) to draw from
    #[arg(long, value_enum, default_value = "all")]
    subset: Subset,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting extraction for args: {:?}", args);

    // 3. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 4. Fetch the dataset, headers/footers/quotes already stripped
    let client = NewsgroupsClient::new()?;
    let collection = client
        .fetch_collection(args.subset, Remove::all(), Some(args.count))
        .await?;
    tracing::info!("Collection ready with {} records", collection.len());

    // 5. Write the leading records as individual files
    let written = extractors::extract_documents(&collection, args.count, &storage)?;

    tracing::info!(
        "Extraction finished. Wrote {} documents to {}",
        written,
        storage.base_dir().display()
    );

    Ok(())
}
