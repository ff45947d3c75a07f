//! # Search Ingestor
//!
//! Main library for the rolling-index document ingestor.
//!
//! This crate provides the entry point and configuration for submitting
//! newline-delimited JSON documents to the search service.

pub mod config;
pub mod input;

pub use config::Dependencies;

use thiserror::Error;

/// Errors that can occur during ingestor initialization or execution.
#[derive(Error, Debug)]
pub enum IngestorError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Ingest error.
    #[error("Ingest error: {0}")]
    IngestError(#[from] search_ingestor_repository::IngestError),

    /// Error parsing input documents.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl IngestorError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}
