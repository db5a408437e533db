//! Partitioning and parallel dispatch
//!
//! Chunks the lazily produced line stream into bounded partitions and fans
//! them out to a pool of blocking workers. At most `workers` partitions are in
//! flight at once, so resident memory stays proportional to
//! `partition_size * workers` plus the frequency table itself, never to the
//! input length. Partitions complete in any order; per-token increments are
//! commutative, so the finished table is identical for any partition size or
//! worker count.

use std::sync::Arc;

use futures::{StreamExt, TryStreamExt};
use tracing::trace;

use crate::error::{Error, Result};
use crate::processor::{tokenize, CancelFlag, FrequencyTable};
use crate::source::LineStream;

/// Drain the line stream into the shared table.
///
/// A source error or worker failure aborts the whole aggregation: the cancel
/// flag is raised so in-flight workers stop at their next partition boundary,
/// and the caller discards the table.
pub(crate) async fn aggregate_lines(
    lines: LineStream,
    partition_size: usize,
    workers: usize,
    table: &Arc<FrequencyTable>,
    cancel: &CancelFlag,
) -> Result<()> {
    debug_assert!(partition_size >= 1);
    debug_assert!(workers >= 1);

    let mut partitions = lines
        .try_chunks(partition_size)
        .map_err(|err| err.1)
        .map(|chunk| {
            let table = Arc::clone(table);
            let cancel = cancel.clone();
            async move {
                if cancel.is_cancelled() {
                    return Err(Error::Cancelled);
                }
                let partition = chunk?;
                trace!(lines = partition.len(), "dispatching partition");
                let worker_cancel = cancel.clone();
                tokio::task::spawn_blocking(move || {
                    process_partition(&partition, &table, &worker_cancel)
                })
                .await
                .map_err(|e| Error::Processing(format!("worker task failed: {e}")))?
            }
        })
        .buffer_unordered(workers);

    while let Some(result) = partitions.next().await {
        if let Err(err) = result {
            cancel.cancel();
            return Err(err);
        }
    }
    Ok(())
}

/// Tokenize one partition and merge its counts into the shared table.
/// Cancellation is checked once per partition, bounding the latency of a
/// cooperative stop by one partition's processing time.
fn process_partition(
    partition: &[String],
    table: &FrequencyTable,
    cancel: &CancelFlag,
) -> Result<()> {
    if cancel.is_cancelled() {
        return Err(Error::Cancelled);
    }
    for line in partition {
        for token in tokenize(line) {
            table.increment(token);
        }
    }
    Ok(())
}
