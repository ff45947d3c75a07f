//! Dependency initialization and wiring for the search ingestor.

use std::env;
use tracing::info;

use crate::IngestorError;
use search_ingestor_repository::{IngestClient, OpenSearchClient};

/// Default rolling index prefix.
const DEFAULT_INDEX_PREFIX: &str = "documents";

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured ingest client ready to submit documents.
    pub client: IngestClient,
    /// Prefix of the rolling index documents are submitted to.
    pub index_prefix: String,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_HOST`: OpenSearch Service domain endpoint (required)
    /// - `INDEX_PREFIX`: Rolling index prefix (default: documents)
    ///
    /// Region and credentials are resolved through the AWS default
    /// provider chain.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IngestorError)` - If initialization fails
    pub async fn new() -> Result<Self, IngestorError> {
        let host = env::var("OPENSEARCH_HOST")
            .map_err(|_| IngestorError::config("OPENSEARCH_HOST must be set"))?;
        let index_prefix =
            env::var("INDEX_PREFIX").unwrap_or_else(|_| DEFAULT_INDEX_PREFIX.to_string());

        info!(
            host = %host,
            index_prefix = %index_prefix,
            "Initializing dependencies"
        );

        // Initialize the signed OpenSearch provider
        let provider = OpenSearchClient::connect(&host, None)
            .await
            .map_err(|e| IngestorError::config(format!("Failed to create OpenSearch client: {}", e)))?;

        let client = IngestClient::new(Box::new(provider));

        // Verify OpenSearch is reachable
        let healthy = client
            .health_check()
            .await
            .map_err(|e| IngestorError::config(format!("OpenSearch health check failed: {}", e)))?;

        if !healthy {
            return Err(IngestorError::config("OpenSearch cluster is unreachable"));
        }

        info!("OpenSearch connection verified");

        Ok(Self {
            client,
            index_prefix,
        })
    }
}
