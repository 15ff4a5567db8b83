//! Runtime configuration
//!
//! Every setting comes from a command-line flag with an environment fallback.

use std::time::Duration;

use clap::Args;

use crate::domain::models::IntentQuery;
use crate::shared::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_DOMAIN, DEFAULT_TIMEOUT_SECS, DEFAULT_UPSTREAM_URL,
};

/// Settings for talking to the upstream intent-search service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base path; the encoded query is appended as the last segment
    pub upstream_url: String,
    /// Deadline for the whole upstream exchange, stream included
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl GatewayConfig {
    pub fn with_upstream_url(upstream_url: impl Into<String>) -> Self {
        Self {
            upstream_url: upstream_url.into(),
            ..Self::default()
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[derive(Debug, Clone, Args)]
pub struct UpstreamArgs {
    /// Upstream intent endpoint (query is appended as a path segment)
    #[arg(long, env = "INTENT_UPSTREAM_URL", default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    /// Total upstream request timeout, in seconds
    #[arg(long, env = "INTENT_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Upstream connect timeout, in seconds
    #[arg(long, env = "INTENT_CONNECT_TIMEOUT_SECS", default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
    pub connect_timeout_secs: u64,
}

impl UpstreamArgs {
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            upstream_url: self.upstream_url.clone(),
            request_timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}

/// `serve`: run the HTTP gateway
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    #[command(flatten)]
    pub upstream: UpstreamArgs,
}

/// `search`: run one query and print the aggregated products as JSON
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Natural-language product query
    pub query: String,

    #[arg(long, env = "INTENT_API_KEY", hide_env_values = true)]
    pub key: Option<String>,

    #[arg(long)]
    pub thread_id: Option<String>,

    #[arg(long, default_value = DEFAULT_DOMAIN)]
    pub domain: String,

    /// Print every product instead of the five-item preview
    #[arg(long)]
    pub all: bool,

    #[command(flatten)]
    pub upstream: UpstreamArgs,
}

impl SearchArgs {
    pub fn intent_query(&self) -> IntentQuery {
        IntentQuery {
            query: self.query.clone(),
            thread_id: self.thread_id.clone(),
            domain: self.domain.clone(),
            key: self.key.clone(),
        }
    }
}
