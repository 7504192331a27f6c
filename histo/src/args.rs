use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Print a histogram of the letters, digits, whitespace, word lengths or line
/// lengths found in text input.
#[derive(Parser, Debug, Clone)]
#[command(name = "histo", version, about)]
pub struct Args {
    /// What to count
    #[arg(value_enum)]
    pub mode: Mode,

    /// Number of buckets; defaults to a size suited to the mode
    #[arg(short, long)]
    pub buckets: Option<usize>,

    /// Whether a final word with no separator after it is counted
    #[arg(long, value_enum, default_value_t = Trailing::Ignore)]
    pub trailing: Trailing,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Bars)]
    pub format: Format,

    /// Read from a file instead of standard input
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Leave buckets with a zero count out of the report
    #[arg(long)]
    pub skip_empty: bool,

    /// Percentiles to report, e.g. `--percentiles 50,90,99`
    #[arg(long, value_delimiter = ',')]
    pub percentiles: Vec<f64>,

    /// Log level for diagnostics written to stderr
    #[arg(long, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Mode {
    /// Case-folded ASCII letters
    Letters,
    /// Decimal digits
    Digits,
    /// Newlines, tabs and blanks
    Whitespace,
    /// Word lengths
    Words,
    /// Line lengths
    Lines,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Letters => "letters",
            Self::Digits => "digits",
            Self::Whitespace => "whitespace",
            Self::Words => "words",
            Self::Lines => "lines",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Trailing {
    Ignore,
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Format {
    /// One row per bucket with a bar of `*` characters
    Bars,
    /// One `label | count` row per bucket
    Table,
    Json,
}
