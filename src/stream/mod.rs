// Streamed result aggregation
// SSE line handling, per-request dedup state, async body consumption

pub mod aggregator;
pub mod frame;
pub mod reader;

pub use aggregator::{StreamAggregator, StreamSummary};
pub use frame::{classify_line, result_entries, SseLine};
pub use reader::{aggregate_byte_stream, aggregate_reader};
