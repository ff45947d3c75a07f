//! # Search Ingestor Repository
//!
//! This crate provides the client for submitting documents to the search
//! service. It includes definitions for errors, the provider interface,
//! rolling index-name derivation, bulk payload rendering, and a concrete
//! implementation for Amazon OpenSearch Service with SigV4 request signing.

pub mod bulk;
pub mod client;
pub mod errors;
pub mod index_name;
pub mod interfaces;
pub mod opensearch;

pub use client::IngestClient;
pub use errors::IngestError;
pub use index_name::rolling_index_name;
pub use interfaces::IngestProvider;
pub use opensearch::OpenSearchClient;
