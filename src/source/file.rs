//! File-backed line source

use std::path::PathBuf;

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;
use tracing::debug;

use crate::error::{Error, Result};
use crate::source::{LineSource, LineStream};

/// Reads input lines from a `.txt` file without materializing the file in
/// memory. The path is validated eagerly so a bad input aborts the run before
/// any processing starts.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            return Err(Error::UnsupportedFormat {
                path,
                expected: ".txt",
            });
        }
        if !path.exists() {
            return Err(Error::NotFound(path));
        }
        Ok(Self { path })
    }
}

#[async_trait]
impl LineSource for FileSource {
    async fn open(&mut self) -> Result<LineStream> {
        debug!(path = %self.path.display(), "opening file source");
        let file = File::open(&self.path).await?;
        let lines = BufReader::new(file).lines();
        Ok(LinesStream::new(lines).map_err(Error::from).boxed())
    }
}
