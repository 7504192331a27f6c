use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use ringlog::{Drain, LogBuilder, MultiLogBuilder, Output, Stderr};

/// Install the global logger, writing to stderr at the given level. The
/// returned drain must be flushed for queued messages to be written.
pub fn configure(level: LevelFilter) -> Result<Box<dyn Drain>> {
    let output: Box<dyn Output> = Box::new(Stderr::new());

    let log = LogBuilder::new()
        .output(output)
        .build()
        .map_err(|e| anyhow!("failed to initialize log: {e}"))?;

    Ok(MultiLogBuilder::new()
        .level_filter(level)
        .default(log)
        .build()
        .start())
}

/// Write out any queued log messages.
pub fn flush(drain: &mut dyn Drain) -> Result<()> {
    drain.flush().context("failed to flush log")
}
