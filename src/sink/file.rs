//! File-backed result sink

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::processor::OrderedResult;
use crate::sink::ResultSink;

const SUPPORTED_EXTENSIONS: [&str; 2] = ["txt", "csv"];

/// Writes the ordered result to a new file, one `<token>,<count>` record per
/// line. The destination is validated eagerly: an existing file is never
/// overwritten, and only `.txt`/`.csv` destinations are accepted.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !SUPPORTED_EXTENSIONS.contains(&extension) {
            return Err(Error::UnsupportedFormat {
                path,
                expected: ".txt or .csv",
            });
        }
        if path.exists() {
            return Err(Error::AlreadyExists(path));
        }
        Ok(Self { path })
    }
}

#[async_trait]
impl ResultSink for FileSink {
    async fn write(&mut self, result: &OrderedResult) -> Result<()> {
        debug!(path = %self.path.display(), entries = result.len(), "writing result file");
        let file = File::create(&self.path).await?;
        let mut writer = BufWriter::new(file);
        for (token, count) in result {
            writer
                .write_all(format!("{token},{count}\n").as_bytes())
                .await?;
        }
        writer.flush().await?;
        info!(path = %self.path.display(), "result written");
        Ok(())
    }
}
