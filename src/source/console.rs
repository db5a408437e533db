//! Interactive console line source

use async_trait::async_trait;
use futures::{future, StreamExt, TryStreamExt};
use tokio::io::AsyncBufReadExt;
use tokio_stream::wrappers::LinesStream;
use tracing::debug;

use crate::error::{Error, Result};
use crate::source::{LineSource, LineStream};

/// Reads lines from standard input. By convention, an empty line (or EOF)
/// terminates the sequence.
#[derive(Default)]
pub struct ConsoleSource;

impl ConsoleSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LineSource for ConsoleSource {
    async fn open(&mut self) -> Result<LineStream> {
        debug!("reading lines from stdin until an empty line");
        let lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        let stream = LinesStream::new(lines)
            .map_err(Error::from)
            .try_take_while(|line| future::ready(Ok(!line.is_empty())))
            .boxed();
        Ok(stream)
    }
}
