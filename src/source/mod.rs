//! Input line sources
//!
//! A source produces a lazy, sequentially consumed stream of text lines in
//! original order. Concrete sources are selected by explicit configuration at
//! construction time; the processor only sees the trait.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::Result;

pub mod console;
pub mod file;

pub use console::ConsoleSource;
pub use file::FileSource;

/// Lazily produced sequence of input lines. The stream ends on natural
/// exhaustion or on the source's termination convention (an empty line for
/// interactive sources).
pub type LineStream = BoxStream<'static, Result<String>>;

/// Contract for input line producers.
#[async_trait]
pub trait LineSource: Send {
    /// Open the source and return its line stream. May block between lines
    /// (pending I/O or interactive input); that wait belongs to the source,
    /// not to the aggregation engine.
    async fn open(&mut self) -> Result<LineStream>;
}
