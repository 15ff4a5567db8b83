//! SSE line classification and frame payload navigation
//!
//! Only `data:` lines carry meaning for the intent protocol. Other SSE
//! fields (`event:`, `id:`, `retry:`, comments) are skipped.

use serde_json::Value;

use crate::shared::constants::{DATA_PREFIX, DONE_SENTINEL};

/// What a single line of the upstream stream turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SseLine<'a> {
    /// Empty line (SSE event delimiter)
    Blank,
    /// Non-`data:` field or comment
    Ignored,
    /// `data:` line with an empty or `[DONE]` payload
    KeepAlive,
    /// `data:` line with a payload to parse
    Data(&'a str),
}

/// Classify one line. Trailing CR/LF is tolerated.
pub fn classify_line(line: &str) -> SseLine<'_> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return SseLine::Blank;
    }

    let Some(rest) = line.strip_prefix(DATA_PREFIX) else {
        return SseLine::Ignored;
    };

    let payload = rest.trim();
    if payload.is_empty() || payload == DONE_SENTINEL {
        SseLine::KeepAlive
    } else {
        SseLine::Data(payload)
    }
}

/// The `response.results` list of a parsed frame.
///
/// Any missing or differently-shaped level yields an empty slice.
pub fn result_entries(frame: &Value) -> &[Value] {
    frame
        .get("response")
        .and_then(|response| response.get("results"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
