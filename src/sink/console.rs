//! Console result sink

use async_trait::async_trait;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::debug;

use crate::error::Result;
use crate::processor::OrderedResult;
use crate::sink::ResultSink;

/// Writes the ordered result to standard output in the canonical
/// `<token>,<count>` record format.
#[derive(Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResultSink for ConsoleSink {
    async fn write(&mut self, result: &OrderedResult) -> Result<()> {
        debug!(entries = result.len(), "writing result to stdout");
        let mut writer = BufWriter::new(tokio::io::stdout());
        for (token, count) in result {
            writer
                .write_all(format!("{token},{count}\n").as_bytes())
                .await?;
        }
        writer.flush().await?;
        Ok(())
    }
}
