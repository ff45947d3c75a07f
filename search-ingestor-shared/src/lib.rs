//! # Search Ingestor Shared
//!
//! Shared types and data structures for the search ingestor system.
//!
//! This crate defines the document type accepted by the ingest client and
//! the response shapes reported back by the search service.

use serde::Deserialize;
use serde_json::{Map, Value};

/// A document submitted for indexing.
///
/// Documents are arbitrary JSON objects; no schema is enforced on the
/// client side. The search service is free to apply its own mappings.
pub type Document = Map<String, Value>;

/// Response returned by the search service for a single index request.
///
/// Only the fields this system reports on are deserialized; everything
/// else in the service response is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestResponse {
    /// Identifier assigned to the document by the service.
    #[serde(rename = "_id")]
    pub id: String,
    /// The concrete index the document landed in.
    #[serde(rename = "_index")]
    pub index: String,
    /// Operation outcome as reported by the service ("created", "updated").
    #[serde(default)]
    pub result: String,
}

/// Response returned by the search service for a bulk request.
///
/// Per-item results are carried verbatim; this system reports the
/// aggregate `errors` flag but never inspects or retries individual items.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkResponse {
    /// Time the service spent on the request, in milliseconds.
    pub took: u64,
    /// True if at least one item in the batch failed.
    pub errors: bool,
    /// Raw per-item results, one entry per submitted document.
    #[serde(default)]
    pub items: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ingest_response_deserializes() {
        let body = json!({
            "_index": "logs-2023.07.15",
            "_id": "dQzsvokBd0PJBRl3dIgB",
            "_version": 1,
            "result": "created",
            "_shards": { "total": 2, "successful": 2, "failed": 0 }
        });

        let response: IngestResponse = serde_json::from_value(body).unwrap();

        assert_eq!(response.id, "dQzsvokBd0PJBRl3dIgB");
        assert_eq!(response.index, "logs-2023.07.15");
        assert_eq!(response.result, "created");
    }

    #[test]
    fn test_bulk_response_deserializes() {
        let body = json!({
            "took": 30,
            "errors": false,
            "items": [
                { "index": { "_index": "logs-2023.07.15", "_id": "1", "status": 201 } },
                { "index": { "_index": "logs-2023.07.15", "_id": "2", "status": 201 } }
            ]
        });

        let response: BulkResponse = serde_json::from_value(body).unwrap();

        assert_eq!(response.took, 30);
        assert!(!response.errors);
        assert_eq!(response.items.len(), 2);
    }

    #[test]
    fn test_bulk_response_with_partial_failures() {
        let body = json!({
            "took": 12,
            "errors": true,
            "items": [
                { "index": { "_index": "logs-2023.07.15", "status": 201 } },
                { "index": { "error": { "type": "mapper_parsing_exception" }, "status": 400 } }
            ]
        });

        let response: BulkResponse = serde_json::from_value(body).unwrap();

        // Partial failures stay opaque; only the flag is surfaced.
        assert!(response.errors);
        assert_eq!(response.items.len(), 2);
    }

    #[test]
    fn test_bulk_response_without_items() {
        let body = json!({ "took": 1, "errors": false });

        let response: BulkResponse = serde_json::from_value(body).unwrap();

        assert!(response.items.is_empty());
    }
}
