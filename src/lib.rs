//! # wordfreq
//!
//! Count occurrences of word-like tokens across a stream of text lines and
//! emit a deterministically ordered frequency table.
//!
//! ## Usage
//!
//! ```bash
//! wordfreq --from-file input.txt --to-file output.txt --partition-size 1000
//! ```
//!
//! ## Modules
//!
//! - `config` - Layered runtime configuration (settings file, env, CLI)
//! - `error` - Crate-wide error taxonomy
//! - `factory` - Builds source/sink/processor collaborators from options
//! - `processor` - Tokenizer, concurrent frequency table, partition scheduler,
//!   deterministic result ordering
//! - `sink` - Result writers (file, console)
//! - `source` - Input line producers (file, console)

pub mod config;
pub mod error;
pub mod factory;
pub mod processor;
pub mod sink;
pub mod source;

pub use error::{Error, Result};

use tracing::info;

/// Execute one full processing run: validate the configuration, build the
/// collaborators, aggregate, order, and write. The frequency table exists
/// only for the duration of the run; on any failure it is discarded and no
/// partial output is produced.
pub async fn run(options: config::Options) -> Result<()> {
    // Structural validation first: a bad partition size, missing input, or
    // destination collision aborts before any line is read.
    let processor = factory::create_processor(&options)?;
    let mut source = factory::create_source(&options)?;
    let mut sink = factory::create_sink(&options)?;

    // Ctrl-C requests a cooperative stop at the next partition boundary.
    let cancel = processor.cancel_flag();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let result = processor.process(source.as_mut()).await?;
    info!(distinct_tokens = result.len(), "processing complete");
    sink.write(&result).await?;
    Ok(())
}
