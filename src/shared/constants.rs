// Upstream intent-search service
pub const DEFAULT_UPSTREAM_URL: &str = "https://agent.cnstrc.com/v1/intent";
pub const DEFAULT_DOMAIN: &str = "explorer";
pub const EVENT_STREAM_MIME: &str = "text/event-stream";

// SSE framing
pub const DATA_PREFIX: &str = "data:";
/// Payload some streams send as a keep-alive or terminator
pub const DONE_SENTINEL: &str = "[DONE]";

// Timeouts (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
