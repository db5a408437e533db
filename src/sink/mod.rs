//! Result sinks
//!
//! A sink externalizes a finished, ordered frequency table. The canonical
//! record format is one `<token>,<count>` line per entry, newline terminated,
//! no header, in the ordered result's order.

use async_trait::async_trait;

use crate::error::Result;
use crate::processor::OrderedResult;

pub mod console;
pub mod file;

pub use console::ConsoleSink;
pub use file::FileSink;

/// Contract for result consumers.
#[async_trait]
pub trait ResultSink: Send {
    /// Externalize the ordered result. Called exactly once per run, after the
    /// full table has been computed.
    async fn write(&mut self, result: &OrderedResult) -> Result<()>;
}
