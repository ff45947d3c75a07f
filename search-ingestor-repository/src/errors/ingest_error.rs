//! Ingest error types.
//!
//! This module defines the error types that can occur during ingest
//! operations.

use thiserror::Error;

/// Errors that can occur while constructing the client or submitting
/// documents.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Credentials or region could not be resolved, or the endpoint is
    /// invalid. Surfaces at construction time.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Failed to build the transport to the search service.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Request dispatch failed before a response was received.
    #[error("Transport error: {0}")]
    TransportError(#[from] opensearch::Error),

    /// The service answered with a non-success status.
    #[error("Service error (status {status}): {body}")]
    ServiceError { status: u16, body: String },

    /// Document or payload (de)serialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Invalid caller input.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl IngestError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a service error from a response status and body.
    pub fn service(status: u16, body: impl Into<String>) -> Self {
        Self::ServiceError {
            status,
            body: body.into(),
        }
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
