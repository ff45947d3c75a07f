//! OpenSearch implementation of the ingest provider.
//!
//! This module provides a concrete implementation of `IngestProvider`
//! using Amazon OpenSearch Service as the backend.

mod client;

pub use client::OpenSearchClient;
