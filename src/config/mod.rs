//! Runtime configuration
//!
//! Three layers, lowest precedence first: an optional `wordfreq.toml`
//! settings file, `WORDFREQ_*` environment variables, and explicit CLI flags.
//! All structural validation happens here, before any line is read.

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Lines per partition when nothing else is configured.
pub const DEFAULT_PARTITION_SIZE: usize = 1;

/// Settings file consulted in the working directory.
pub const SETTINGS_FILE: &str = "wordfreq.toml";

/// Which input collaborator to construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSelection {
    /// Read lines from a text file.
    File(PathBuf),
    /// Read lines interactively until an empty line.
    Console,
}

/// Which output collaborator to construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkSelection {
    /// Write the result to a new file.
    File(PathBuf),
    /// Write the result to standard output.
    Console,
}

/// Fully resolved configuration for one processing run.
#[derive(Debug, Clone)]
pub struct Options {
    pub source: SourceSelection,
    pub sink: SinkSelection,
    /// Lines per partition, >= 1. A value of 1 means per-line dispatch.
    pub partition_size: usize,
    /// Worker pool size, >= 1.
    pub workers: usize,
}

impl Options {
    pub fn validate(&self) -> Result<()> {
        if self.partition_size < 1 {
            return Err(Error::Config(format!(
                "partition size must be at least 1, got {}",
                self.partition_size
            )));
        }
        if self.workers < 1 {
            return Err(Error::Config(format!(
                "worker count must be at least 1, got {}",
                self.workers
            )));
        }
        Ok(())
    }
}

/// Defaults loaded from the settings file and environment. Environment
/// variables override the file; CLI flags override both.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub partition_size: Option<usize>,
    pub workers: Option<usize>,
}

impl Settings {
    /// Load settings from `wordfreq.toml` in the working directory (if any)
    /// and overlay the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            let parsed: Settings = toml::from_str(&raw).map_err(|e| {
                Error::Config(format!("invalid settings file {}: {e}", path.display()))
            })?;
            debug!(path = %path.display(), "loaded settings file");
            parsed
        } else {
            Settings::default()
        };
        settings.overlay_env();
        Ok(settings)
    }

    fn overlay_env(&mut self) {
        if let Some(value) = env_usize("WORDFREQ_PARTITION_SIZE") {
            self.partition_size = Some(value);
        }
        if let Some(value) = env_usize("WORDFREQ_WORKERS") {
            self.workers = Some(value);
        }
    }
}

fn env_usize(key: &str) -> Option<usize> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = raw.as_str(), "ignoring unparsable environment variable");
            None
        }
    }
}
