//! Ingest client implementation.
//!
//! This module provides the main client for submitting documents to the
//! search service. Application code uses this to ingest documents singly
//! or in bulk into rolling daily indices.

use chrono::Utc;
use tracing::{error, info};

use crate::bulk::bulk_lines;
use crate::errors::IngestError;
use crate::index_name::rolling_index_name;
use crate::interfaces::IngestProvider;
use search_ingestor_shared::{BulkResponse, Document, IngestResponse};

/// The main client for submitting documents to the search service.
///
/// Each operation has two forms. The `try_*` form returns a typed result
/// so callers and tests can observe failures. The plain form preserves the
/// historical contract of this system: every transport and service error
/// is logged and swallowed, and the caller only sees `None`.
pub struct IngestClient {
    provider: Box<dyn IngestProvider>,
}

impl IngestClient {
    /// Create a new IngestClient backed by the given provider.
    pub fn new(provider: Box<dyn IngestProvider>) -> Self {
        Self { provider }
    }

    /// Submit a single document, swallowing any failure.
    ///
    /// Errors are logged and `None` is returned; nothing propagates to the
    /// caller. Use [`IngestClient::try_ingest`] to observe failures.
    pub async fn ingest(&self, index_prefix: &str, document: &Document) -> Option<IngestResponse> {
        match self.try_ingest(index_prefix, document).await {
            Ok(response) => Some(response),
            Err(e) => {
                error!(error = %e, index_prefix = %index_prefix, "Failed to ingest document");
                None
            }
        }
    }

    /// Submit a single document.
    ///
    /// The target index is `{prefix}-{date}` with the UTC date taken from
    /// the clock at call time.
    ///
    /// # Arguments
    ///
    /// * `index_prefix` - Non-empty prefix of the rolling index
    /// * `document` - The document to index
    ///
    /// # Returns
    ///
    /// * `Ok(IngestResponse)` - The service's structured response
    /// * `Err(IngestError)` - If validation, transport, or the service fails
    pub async fn try_ingest(
        &self,
        index_prefix: &str,
        document: &Document,
    ) -> Result<IngestResponse, IngestError> {
        validate_prefix(index_prefix)?;

        let index = rolling_index_name(index_prefix, Utc::now().date_naive());
        let response = self.provider.index_document(&index, document).await?;

        info!(
            id = %response.id,
            index = %response.index,
            result = %response.result,
            "Indexed document"
        );

        Ok(response)
    }

    /// Submit multiple documents in one bulk request, swallowing any failure.
    ///
    /// Same logging and swallow policy as [`IngestClient::ingest`]. Partial
    /// failures inside a successful bulk response are reported by the
    /// service in the returned summary and are not inspected here.
    pub async fn bulk_ingest(
        &self,
        index_prefix: &str,
        documents: &[Document],
    ) -> Option<BulkResponse> {
        match self.try_bulk_ingest(index_prefix, documents).await {
            Ok(response) => Some(response),
            Err(e) => {
                error!(
                    error = %e,
                    index_prefix = %index_prefix,
                    count = documents.len(),
                    "Failed to bulk ingest documents"
                );
                None
            }
        }
    }

    /// Submit multiple documents in one bulk request.
    ///
    /// The index date is derived once for the whole batch, before
    /// iterating; `try_ingest` derives it per call. An empty document
    /// slice renders an empty payload and still issues the request.
    ///
    /// # Arguments
    ///
    /// * `index_prefix` - Non-empty prefix of the rolling index
    /// * `documents` - Documents to index, submitted in input order
    ///
    /// # Returns
    ///
    /// * `Ok(BulkResponse)` - Aggregate and per-item results from the service
    /// * `Err(IngestError)` - If validation, transport, or the service fails
    pub async fn try_bulk_ingest(
        &self,
        index_prefix: &str,
        documents: &[Document],
    ) -> Result<BulkResponse, IngestError> {
        validate_prefix(index_prefix)?;

        let index = rolling_index_name(index_prefix, Utc::now().date_naive());
        let lines = bulk_lines(&index, documents)?;
        let response = self.provider.bulk(index_prefix, lines).await?;

        info!(
            took_ms = response.took,
            errors = response.errors,
            items = response.items.len(),
            "Bulk indexed documents"
        );

        Ok(response)
    }

    /// Check whether the search service is reachable.
    pub async fn health_check(&self) -> Result<bool, IngestError> {
        self.provider.health_check().await
    }
}

fn validate_prefix(index_prefix: &str) -> Result<(), IngestError> {
    if index_prefix.is_empty() {
        return Err(IngestError::validation("index prefix must not be empty"));
    }
    Ok(())
}
