use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use tracing::{debug, error};

use wordfreq::config::{self, Options, Settings, SinkSelection, SourceSelection};
use wordfreq::processor::FrequencyProcessor;

/// Count word frequencies across a stream of text lines
#[derive(Parser)]
#[command(name = "wordfreq")]
#[command(about = "Count word frequencies and emit an ordered frequency table", long_about = None)]
#[command(version)]
#[command(group(ArgGroup::new("input").required(true).args(["from_file", "from_console"])))]
#[command(group(ArgGroup::new("output").required(true).args(["to_file", "to_console"])))]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Read input lines from a text file
    #[arg(long, value_name = "PATH")]
    from_file: Option<PathBuf>,

    /// Read input lines from the console until an empty line
    #[arg(long)]
    from_console: bool,

    /// Write the frequency table to a new file
    #[arg(long, value_name = "PATH")]
    to_file: Option<PathBuf>,

    /// Write the frequency table to standard output
    #[arg(long)]
    to_console: bool,

    /// Lines per partition (default: settings file, env, or 1)
    #[arg(long, value_name = "N")]
    partition_size: Option<usize>,

    /// Worker pool size (default: number of available CPUs)
    #[arg(long, value_name = "N")]
    workers: Option<usize>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!("wordfreq started with verbosity level: {}", cli.verbose);

    if let Err(e) = run(cli).await {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::load()?;

    // The clap groups guarantee exactly one selection on each side.
    let source = match cli.from_file {
        Some(path) => SourceSelection::File(path),
        None => {
            debug_assert!(cli.from_console);
            SourceSelection::Console
        }
    };
    let sink = match cli.to_file {
        Some(path) => SinkSelection::File(path),
        None => {
            debug_assert!(cli.to_console);
            SinkSelection::Console
        }
    };

    let options = Options {
        source,
        sink,
        partition_size: cli
            .partition_size
            .or(settings.partition_size)
            .unwrap_or(config::DEFAULT_PARTITION_SIZE),
        workers: cli
            .workers
            .or(settings.workers)
            .unwrap_or_else(FrequencyProcessor::default_workers),
    };

    wordfreq::run(options).await?;
    Ok(())
}
