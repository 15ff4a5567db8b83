//! Incremental consumption of an open SSE body
//!
//! Lines are read one at a time as the transport delivers them; consumption
//! ends only when the underlying stream closes.

use bytes::Buf;
use futures::Stream;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::io::StreamReader;

use super::aggregator::StreamAggregator;
use crate::domain::models::IntentResults;
use crate::shared::errors::Result;
use crate::shared::logging::log_aggregation_summary;

/// Drain a buffered reader into a fresh aggregator.
///
/// Lines are decoded lossily so a single undecodable line surfaces as a
/// malformed frame instead of a transport error.
pub async fn aggregate_reader<R>(mut reader: R) -> Result<IntentResults>
where
    R: AsyncBufRead + Unpin,
{
    let mut aggregator = StreamAggregator::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        aggregator.ingest_line(&line);
    }

    let (results, summary) = aggregator.finish();
    log_aggregation_summary(&summary, results.all_products.len());
    Ok(results)
}

/// Drain a stream of byte chunks (e.g. an HTTP body) into a fresh aggregator.
pub async fn aggregate_byte_stream<S, B, E>(stream: S) -> Result<IntentResults>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: Buf,
    E: Into<std::io::Error>,
{
    let reader = StreamReader::new(stream);
    tokio::pin!(reader);
    aggregate_reader(reader).await
}
