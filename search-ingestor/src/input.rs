//! Input parsing for the search ingestor.
//!
//! Documents arrive as newline-delimited JSON, one object per line.

use std::io::BufRead;

use crate::IngestorError;
use search_ingestor_shared::Document;

/// Read newline-delimited JSON documents from the given reader.
///
/// Blank lines are skipped. A line that is not a JSON object fails the
/// whole read with a parse error naming the offending line.
pub fn read_documents<R: BufRead>(reader: R) -> Result<Vec<Document>, IngestorError> {
    let mut documents = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let document: Document = serde_json::from_str(&line)
            .map_err(|e| IngestorError::parse(format!("line {}: {}", line_no + 1, e)))?;
        documents.push(document);
    }
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_documents() {
        let input = "{\"a\":1}\n{\"b\":2}\n";

        let documents = read_documents(Cursor::new(input)).unwrap();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0]["a"], 1);
        assert_eq!(documents[1]["b"], 2);
    }

    #[test]
    fn test_read_documents_skips_blank_lines() {
        let input = "{\"a\":1}\n\n   \n{\"b\":2}\n";

        let documents = read_documents(Cursor::new(input)).unwrap();

        assert_eq!(documents.len(), 2);
    }

    #[test]
    fn test_read_documents_empty_input() {
        let documents = read_documents(Cursor::new("")).unwrap();
        assert!(documents.is_empty());
    }

    #[test]
    fn test_read_documents_rejects_malformed_line() {
        let input = "{\"a\":1}\nnot json\n";

        let result = read_documents(Cursor::new(input));

        match result {
            Err(IngestorError::ParseError(msg)) => assert!(msg.starts_with("line 2")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_documents_rejects_non_object_line() {
        let input = "[1,2,3]\n";

        let result = read_documents(Cursor::new(input));

        assert!(matches!(result, Err(IngestorError::ParseError(_))));
    }
}
