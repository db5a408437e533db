use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the word frequency pipeline.
///
/// Structural problems (configuration, missing input, destination collisions)
/// are detected before any line is read; `Processing` covers failures while a
/// run is in flight.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported format for {}: expected {expected}", path.display())]
    UnsupportedFormat { path: PathBuf, expected: &'static str },

    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Processing cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, Error>;
