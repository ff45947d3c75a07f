//! Ingest provider trait definition.
//!
//! This module defines the abstract interface for document ingest
//! operations, allowing for different backend implementations
//! (OpenSearch, Elasticsearch, etc.).

use async_trait::async_trait;

use crate::errors::IngestError;
use search_ingestor_shared::{BulkResponse, Document, IngestResponse};

/// Abstracts the underlying search backend.
///
/// Implementations are injected into `IngestClient` to enable dependency
/// injection and easy testing with mock implementations. The provider
/// executes raw service operations; index-name derivation and payload
/// rendering happen above this seam.
#[async_trait]
pub trait IngestProvider: Send + Sync {
    /// Submit a single document to the given index.
    ///
    /// Create-or-replace semantics are delegated to the search service;
    /// the document id is assigned server-side.
    ///
    /// # Arguments
    ///
    /// * `index` - The fully derived index name
    /// * `document` - The document to index
    ///
    /// # Returns
    ///
    /// * `Ok(IngestResponse)` - The service's structured response
    /// * `Err(IngestError)` - If the request fails at transport or service level
    async fn index_document(
        &self,
        index: &str,
        document: &Document,
    ) -> Result<IngestResponse, IngestError>;

    /// Submit a prepared bulk payload in one request.
    ///
    /// Each element of `lines` is one newline-delimited payload line, in
    /// order. An empty line set still issues a request; the outcome of an
    /// empty bulk call is whatever the service defines.
    ///
    /// # Arguments
    ///
    /// * `default_index` - Index the bulk request is addressed to; action
    ///   lines carry their own explicit target
    /// * `lines` - Alternating action and document lines
    ///
    /// # Returns
    ///
    /// * `Ok(BulkResponse)` - Aggregate and per-item results from the service
    /// * `Err(IngestError)` - If the request fails at transport or service level
    async fn bulk(
        &self,
        default_index: &str,
        lines: Vec<String>,
    ) -> Result<BulkResponse, IngestError>;

    /// Check whether the search service is reachable.
    async fn health_check(&self) -> Result<bool, IngestError>;
}
