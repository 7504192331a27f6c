use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open the input for reading: the given file, or standard input.
pub fn open(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            log::debug!("reading from {}", path.display());
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            log::debug!("reading from stdin");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}

/// Call `f` with each line of the input, line terminator included, until the
/// input is exhausted or `f` returns an error. Returns the number of lines.
pub fn for_each_line<R, F>(mut reader: R, mut f: F) -> Result<u64>
where
    R: BufRead,
    F: FnMut(&str) -> Result<()>,
{
    let mut line = String::new();
    let mut lines = 0;

    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .with_context(|| format!("failed to read line {}", lines + 1))?;
        if read == 0 {
            break;
        }

        lines += 1;
        f(&line)?;
    }

    log::trace!("read {lines} lines");
    Ok(lines)
}
