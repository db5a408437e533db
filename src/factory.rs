//! Construction of pipeline collaborators from validated options
//!
//! Sources, sinks, and the processor are selected by explicit configuration
//! at construction time. Every constructor here validates eagerly, so a
//! misconfigured run aborts before a single line is read.

use crate::config::{Options, SinkSelection, SourceSelection};
use crate::error::Result;
use crate::processor::FrequencyProcessor;
use crate::sink::{ConsoleSink, FileSink, ResultSink};
use crate::source::{ConsoleSource, FileSource, LineSource};

pub fn create_source(options: &Options) -> Result<Box<dyn LineSource>> {
    match &options.source {
        SourceSelection::File(path) => Ok(Box::new(FileSource::new(path)?)),
        SourceSelection::Console => Ok(Box::new(ConsoleSource::new())),
    }
}

pub fn create_sink(options: &Options) -> Result<Box<dyn ResultSink>> {
    match &options.sink {
        SinkSelection::File(path) => Ok(Box::new(FileSink::new(path)?)),
        SinkSelection::Console => Ok(Box::new(ConsoleSink::new())),
    }
}

pub fn create_processor(options: &Options) -> Result<FrequencyProcessor> {
    options.validate()?;
    FrequencyProcessor::new(options.partition_size, options.workers)
}
