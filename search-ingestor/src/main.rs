//! Entry point for the search ingestor.
//!
//! Reads newline-delimited JSON documents from a file or stdin and
//! submits them to the search service in one bulk request.

use std::env;
use std::fs::File;
use std::io::{self, BufReader};

use tracing::{error, info};

use search_ingestor::input::read_documents;
use search_ingestor::{Dependencies, IngestorError};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "Ingestor failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), IngestorError> {
    let deps = Dependencies::new().await?;

    let documents = match input_path() {
        Some(path) => {
            info!(path = %path, "Reading documents");
            read_documents(BufReader::new(File::open(&path)?))?
        }
        None => {
            info!("Reading documents from stdin");
            read_documents(io::stdin().lock())?
        }
    };

    info!(count = documents.len(), "Submitting documents");

    // Ingest failures are logged by the client and swallowed; the summary
    // below is the only caller-visible signal.
    match deps.client.bulk_ingest(&deps.index_prefix, &documents).await {
        Some(response) => info!(
            took_ms = response.took,
            errors = response.errors,
            "Bulk ingest complete"
        ),
        None => error!("Bulk ingest failed; see preceding errors"),
    }

    Ok(())
}

fn input_path() -> Option<String> {
    env::args().nth(1).or_else(|| env::var("INPUT_FILE").ok())
}
