//! Client for the upstream intent-search service
//!
//! Opens the search as an event-stream and hands the body to the stream
//! aggregator. Nothing is retried.

use futures::StreamExt;
use reqwest::{header::ACCEPT, Client, Request, Url};

use crate::config::GatewayConfig;
use crate::domain::models::{IntentQuery, IntentResults};
use crate::shared::constants::EVENT_STREAM_MIME;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{log_upstream_open, log_upstream_rejected};
use crate::stream::aggregate_byte_stream;

#[derive(Debug, Clone)]
pub struct IntentClient {
    http: Client,
    base_url: String,
}

impl IntentClient {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        Url::parse(&config.upstream_url).map_err(|e| {
            AppError::Internal(format!("invalid upstream url {:?}: {}", config.upstream_url, e))
        })?;

        let http = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.upstream_url.trim_end_matches('/').to_string(),
        })
    }

    /// Upstream URL for a query; the raw text becomes one encoded path segment.
    pub fn intent_url(&self, query: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(query))
    }

    /// Build the streaming GET for a validated query.
    pub fn build_request(&self, query: &IntentQuery) -> Result<Request> {
        let key = query.validate()?;

        let mut params = vec![("key", key), ("domain", query.domain.as_str())];
        if let Some(thread_id) = query.thread() {
            params.push(("thread_id", thread_id));
        }

        let request = self
            .http
            .get(self.intent_url(&query.query))
            .query(&params)
            .header(ACCEPT, EVENT_STREAM_MIME)
            .build()?;

        Ok(request)
    }

    /// Run one search and aggregate the streamed results.
    ///
    /// Fails before any network activity when the key is missing. A non-success
    /// status is returned as `UpstreamStatus` without reading the body.
    pub async fn search(&self, query: &IntentQuery) -> Result<IntentResults> {
        let request = self.build_request(query)?;

        let mut log_url = request.url().clone();
        log_url.set_query(None);

        let response = self.http.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            log_upstream_rejected(log_url.as_str(), status.as_u16());
            return Err(AppError::UpstreamStatus(status));
        }
        log_upstream_open(log_url.as_str(), status.as_u16());

        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(std::io::Error::other));

        aggregate_byte_stream(body).await
    }
}
