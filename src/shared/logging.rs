//! Structured logging module for the intent gateway
//!
//! Provides consistent, contextual logging across the request path.
//! Uses tracing spans for request tracking and structured fields.

use crate::stream::StreamSummary;

/// Operations that emit structured logs
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    IntentRequest,
    UpstreamOpen,
    FrameParse,
    Aggregation,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::IntentRequest => "intent_request",
            LogOperation::UpstreamOpen => "upstream_open",
            LogOperation::FrameParse => "frame_parse",
            LogOperation::Aggregation => "aggregation",
        }
    }
}

/// Log an incoming intent request
pub fn log_intent_request(query: &str, domain: &str, thread_id: Option<&str>) {
    tracing::info!(
        operation = LogOperation::IntentRequest.as_str(),
        query = query,
        domain = domain,
        thread_id = thread_id,
        "Starting intent request"
    );
}

/// Log the upstream stream being opened
pub fn log_upstream_open(url: &str, status: u16) {
    tracing::debug!(
        operation = LogOperation::UpstreamOpen.as_str(),
        url = url,
        status = status,
        "Upstream stream opened"
    );
}

/// Log an upstream that refused the request
pub fn log_upstream_rejected(url: &str, status: u16) {
    tracing::warn!(
        operation = LogOperation::UpstreamOpen.as_str(),
        url = url,
        status = status,
        "Upstream returned non-success status"
    );
}

/// Log a frame whose payload could not be parsed; the raw payload is kept for diagnosis
pub fn log_malformed_frame(line_number: usize, payload: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::FrameParse.as_str(),
        line = line_number,
        payload = payload,
        error = error,
        "Skipping malformed frame"
    );
}

/// Log the aggregation outcome once the stream has closed
pub fn log_aggregation_summary(summary: &StreamSummary, product_count: usize) {
    tracing::info!(
        operation = LogOperation::Aggregation.as_str(),
        lines = summary.lines,
        frames = summary.frames,
        malformed_frames = summary.malformed_frames,
        duplicates = summary.duplicates,
        missing_ids = summary.missing_ids,
        product_count = product_count,
        "Stream aggregation completed"
    );
}

/// Macro for creating a structured request span
#[macro_export]
macro_rules! request_span {
    ($request_id:expr, $domain:expr) => {
        tracing::info_span!(
            "intent_gateway",
            request_id = %$request_id,
            domain = $domain
        )
    };
}
