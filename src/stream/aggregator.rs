//! Per-request aggregation of streamed result batches
//!
//! A [`StreamAggregator`] owns the seen-id set and the ordered product list
//! for exactly one upstream stream. It is fed line by line and never shared.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::frame::{classify_line, result_entries, SseLine};
use crate::domain::models::product::{product_id, IntentResults, ProductRecord};
use crate::shared::logging::log_malformed_frame;

/// Counters describing what the stream contained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Lines read from the transport
    pub lines: usize,
    /// `data:` payloads that parsed as JSON
    pub frames: usize,
    /// `data:` payloads that failed to parse
    pub malformed_frames: usize,
    /// Empty or `[DONE]` payloads
    pub keep_alives: usize,
    /// Entries whose id had already been seen
    pub duplicates: usize,
    /// Entries without a usable id
    pub missing_ids: usize,
}

#[derive(Debug, Default)]
pub struct StreamAggregator {
    seen_ids: HashSet<String>,
    products: Vec<ProductRecord>,
    summary: StreamSummary,
}

impl StreamAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line of the SSE stream. Returns how many new products it added.
    ///
    /// Malformed payloads are logged and skipped; they never fail the stream.
    pub fn ingest_line(&mut self, line: &str) -> usize {
        self.summary.lines += 1;

        match classify_line(line) {
            SseLine::Blank | SseLine::Ignored => 0,
            SseLine::KeepAlive => {
                self.summary.keep_alives += 1;
                0
            }
            SseLine::Data(payload) => match serde_json::from_str::<Value>(payload) {
                Ok(frame) => {
                    self.summary.frames += 1;
                    self.ingest_frame(&frame)
                }
                Err(e) => {
                    self.summary.malformed_frames += 1;
                    log_malformed_frame(self.summary.lines, payload, &e.to_string());
                    0
                }
            },
        }
    }

    /// Extract products from an already-parsed frame.
    pub fn ingest_frame(&mut self, frame: &Value) -> usize {
        let empty = Map::new();
        let mut added = 0;

        for entry in result_entries(frame) {
            let Some(entry) = entry.as_object() else {
                self.summary.missing_ids += 1;
                continue;
            };
            let data = entry
                .get("data")
                .and_then(Value::as_object)
                .unwrap_or(&empty);

            let Some(id) = product_id(data.get("id")) else {
                self.summary.missing_ids += 1;
                continue;
            };
            if self.seen_ids.contains(&id) {
                self.summary.duplicates += 1;
                continue;
            }

            self.seen_ids.insert(id.clone());
            self.products.push(ProductRecord::from_entry(id, entry, data));
            added += 1;
        }

        added
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Consume the aggregator once the stream has closed.
    pub fn finish(self) -> (IntentResults, StreamSummary) {
        (IntentResults::from_products(self.products), self.summary)
    }
}
