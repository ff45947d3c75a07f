//! Bulk payload rendering.
//!
//! A bulk request body is a sequence of newline-delimited JSON lines: one
//! action line followed by one document line per input document.

use serde_json::json;

use crate::errors::IngestError;
use search_ingestor_shared::Document;

/// Render the payload lines for a bulk index request.
///
/// Produces exactly two lines per document, in input order: the action
/// line targeting `index`, then the compact-serialized document. The
/// transport appends the terminating newline after each line.
pub fn bulk_lines(index: &str, documents: &[Document]) -> Result<Vec<String>, IngestError> {
    let mut lines = Vec::with_capacity(documents.len() * 2);
    for document in documents {
        let action = json!({ "index": { "_index": index } });
        lines.push(action.to_string());
        lines.push(serde_json::to_string(document)?);
    }
    Ok(lines)
}
