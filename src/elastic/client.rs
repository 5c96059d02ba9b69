use super::error::BackendError;
use super::types::{BulkResponse, BulkSummary, ErrorEnvelope, SearchResponse};
use crate::config::ElasticConfig;
use crate::query::types::QueryDocument;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

const NDJSON: &str = "application/x-ndjson";

/// Thin Elasticsearch REST client.
///
/// Built once at startup and shared by every request handler. Cloning is cheap: the
/// inner `reqwest::Client` is reference counted and holds the connection pool.
#[derive(Debug, Clone)]
pub struct ElasticClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ElasticClient {
    pub fn new(config: &ElasticConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http_client,
            base_url: config.url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Runs `query` against `index` with total hit tracking enabled.
    pub async fn search(
        &self,
        index: &str,
        query: &QueryDocument,
    ) -> Result<SearchResponse, BackendError> {
        let url = format!(
            "{}/{}/_search?track_total_hits=true",
            self.base_url,
            urlencoding::encode(index)
        );
        tracing::debug!("Query:: {}", query.query);

        let response = self
            .http_client
            .post(url)
            .json(query)
            .send()
            .await
            .map_err(BackendError::Unavailable)?;

        let status = response.status();
        let result: SearchResponse = decode(response).await?;

        tracing::info!(
            "[{}] {} hits; took: {}ms",
            status,
            result.hits.total_value(),
            result.took
        );
        Ok(result)
    }

    /// Sends a prepared NDJSON bulk body.
    pub async fn bulk(&self, body: String) -> Result<BulkSummary, BackendError> {
        let url = format!("{}/_bulk", self.base_url);

        let response = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, NDJSON)
            .body(body)
            .send()
            .await
            .map_err(BackendError::Unavailable)?;

        let result: BulkResponse = decode(response).await?;
        let summary = result.summary();
        if result.errors {
            tracing::warn!("Bulk request reported {} failed items", summary.failed);
        }
        tracing::debug!("Bulk request took {}ms", result.took);
        Ok(summary)
    }

    /// Checks that the cluster root endpoint answers with a success status.
    pub async fn ping(&self) -> Result<(), BackendError> {
        let response = self
            .http_client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .map_err(BackendError::Unavailable)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.bytes().await.map_err(BackendError::Unavailable)?;
        Err(error_from_body(status, &body))
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
    let status = response.status();
    let body = response.bytes().await.map_err(BackendError::Unavailable)?;

    if !status.is_success() {
        return Err(error_from_body(status, &body));
    }

    serde_json::from_slice(&body).map_err(|e| BackendError::Malformed(e.to_string()))
}

/// Maps a non-success response onto [`BackendError::Query`].
///
/// Falls back to the raw body text when it is not an Elasticsearch error envelope.
pub fn error_from_body(status: StatusCode, body: &[u8]) -> BackendError {
    let (kind, reason) = match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.describe(),
        Err(_) => (
            "http_error".to_string(),
            String::from_utf8_lossy(body).trim().to_string(),
        ),
    };

    BackendError::Query {
        status: status.as_u16(),
        kind,
        reason,
    }
}
