//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `IngestProvider`
//! using the OpenSearch Rust client with SigV4 request signing.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::SharedCredentialsProvider;
use opensearch::auth::Credentials;
use opensearch::http::transport::{SingleNodeConnectionPool, TransportBuilder};
use opensearch::{BulkParts, IndexParts, OpenSearch};
use tracing::{debug, error, info};
use url::Url;

use crate::errors::IngestError;
use crate::interfaces::IngestProvider;
use search_ingestor_shared::{BulkResponse, Document, IngestResponse};

/// Service identifier used when signing requests.
const SERVICE: &str = "es";

/// OpenSearch ingest provider.
///
/// Every request is signed with SigV4 using credentials and region from
/// the AWS configuration resolved at construction time. The transport and
/// its connection pool are owned by this client and released when it is
/// dropped.
///
/// # Example
///
/// ```ignore
/// let client = OpenSearchClient::connect("search-logs.us-east-1.es.amazonaws.com", None).await?;
/// let ingest = IngestClient::new(Box::new(client));
/// ingest.bulk_ingest("logs", &documents).await;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
    host: String,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client for the given endpoint host.
    ///
    /// The endpoint is reached over TLS on port 443 with certificate
    /// verification enabled (the transport default).
    ///
    /// # Arguments
    ///
    /// * `host` - Hostname of the OpenSearch Service domain endpoint
    /// * `session` - Optional pre-resolved AWS configuration; when `None`,
    ///   the default provider chain is consulted
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(IngestError::ConfigError)` - If no region or credentials can
    ///   be resolved, or the host is not a valid endpoint
    /// * `Err(IngestError::ConnectionError)` - If transport setup fails
    pub async fn connect(host: &str, session: Option<SdkConfig>) -> Result<Self, IngestError> {
        let session = match session {
            Some(config) => config,
            None => aws_config::defaults(BehaviorVersion::latest()).load().await,
        };

        let region = session
            .region()
            .cloned()
            .ok_or_else(|| IngestError::config("no AWS region resolved"))?;
        let credentials: SharedCredentialsProvider = session
            .credentials_provider()
            .ok_or_else(|| IngestError::config("no AWS credentials resolved"))?;

        let url = Url::parse(&format!("https://{}:443", host))
            .map_err(|e| IngestError::config(format!("invalid endpoint host {}: {}", host, e)))?;

        let conn_pool = SingleNodeConnectionPool::new(url);
        let transport = TransportBuilder::new(conn_pool)
            .auth(Credentials::AwsSigV4(credentials, region.clone()))
            .service_name(SERVICE)
            .disable_proxy()
            .build()
            .map_err(|e| IngestError::connection(e.to_string()))?;

        info!(host = %host, region = %region, "Created OpenSearch ingest client");

        Ok(Self {
            client: OpenSearch::new(transport),
            host: host.to_string(),
        })
    }

    /// Hostname this client was built for.
    pub fn host(&self) -> &str {
        &self.host
    }
}

#[async_trait]
impl IngestProvider for OpenSearchClient {
    async fn index_document(
        &self,
        index: &str,
        document: &Document,
    ) -> Result<IngestResponse, IngestError> {
        debug!(index = %index, "Indexing document");

        let response = self
            .client
            .index(IndexParts::Index(index))
            .body(document)
            .send()
            .await?;

        let status = response.status_code();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Index request failed");
            return Err(IngestError::service(status.as_u16(), body));
        }

        Ok(response.json::<IngestResponse>().await?)
    }

    async fn bulk(
        &self,
        default_index: &str,
        lines: Vec<String>,
    ) -> Result<BulkResponse, IngestError> {
        debug!(
            index = %default_index,
            lines = lines.len(),
            "Submitting bulk request"
        );

        let response = self
            .client
            .bulk(BulkParts::Index(default_index))
            .body(lines)
            .send()
            .await?;

        let status = response.status_code();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Bulk request failed");
            return Err(IngestError::service(status.as_u16(), body));
        }

        Ok(response.json::<BulkResponse>().await?)
    }

    async fn health_check(&self) -> Result<bool, IngestError> {
        let response = self.client.ping().send().await?;
        Ok(response.status_code().is_success())
    }
}

impl std::fmt::Debug for OpenSearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenSearchClient")
            .field("host", &self.host)
            .finish()
    }
}
