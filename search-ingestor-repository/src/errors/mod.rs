//! Error types for the search ingestor repository.

mod ingest_error;

pub use ingest_error::IngestError;
