//! Concurrent word frequency aggregation engine
//!
//! The pipeline runs in stages: the incoming line stream is grouped into
//! partitions, partitions fan out to a bounded worker pool, every worker
//! tokenizes its lines and merges counts into the shared [`FrequencyTable`],
//! and once all workers finish the table is projected into a deterministic
//! [`OrderedResult`]. The full table is computed before any output is
//! produced.

pub mod frequency;
pub mod ordering;
mod partition;
pub mod tokenizer;

pub use frequency::FrequencyTable;
pub use ordering::OrderedResult;
pub use tokenizer::tokenize;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::source::{LineSource, LineStream};

/// Cooperative cancellation signal shared between the scheduler and its
/// workers. Checked at partition boundaries, not mid-line.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Word frequency processor: partitions a line stream and aggregates token
/// counts in parallel. A `partition_size` of 1 degenerates to per-line
/// dispatch through the same path.
#[derive(Debug)]
pub struct FrequencyProcessor {
    partition_size: usize,
    workers: usize,
    cancel: CancelFlag,
}

impl FrequencyProcessor {
    /// Create a processor. Rejects a partition size or worker count below 1
    /// before any processing starts.
    pub fn new(partition_size: usize, workers: usize) -> Result<Self> {
        if partition_size < 1 {
            return Err(Error::Config(format!(
                "partition size must be at least 1, got {partition_size}"
            )));
        }
        if workers < 1 {
            return Err(Error::Config(format!(
                "worker count must be at least 1, got {workers}"
            )));
        }
        Ok(Self {
            partition_size,
            workers,
            cancel: CancelFlag::new(),
        })
    }

    /// Number of workers to use when the configuration does not say:
    /// one per available execution unit.
    pub fn default_workers() -> usize {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    }

    /// Handle for requesting a cooperative stop of an in-flight run.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Aggregate a line stream into a frequency table.
    pub async fn count(&self, lines: LineStream) -> Result<FrequencyTable> {
        debug!(
            partition_size = self.partition_size,
            workers = self.workers,
            "starting aggregation"
        );
        let table = Arc::new(FrequencyTable::with_shards(self.workers * 4));
        partition::aggregate_lines(lines, self.partition_size, self.workers, &table, &self.cancel)
            .await?;

        // All workers have completed, so this is the last reference.
        let table = Arc::try_unwrap(table).map_err(|_| {
            Error::Processing("frequency table still shared after workers finished".to_string())
        })?;
        debug!(
            distinct_tokens = table.len(),
            total_tokens = table.total(),
            "aggregation finished"
        );
        Ok(table)
    }

    /// Run the full pass over a source: open, aggregate, order.
    pub async fn process(&self, source: &mut dyn LineSource) -> Result<OrderedResult> {
        let lines = source.open().await?;
        let table = self.count(lines).await?;
        Ok(OrderedResult::from_table(table))
    }
}
