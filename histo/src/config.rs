use crate::args::{Args, Format, Mode, Trailing};
use bucketed::classify::{Digits, Letters, LineLength, TrailingWord, Whitespace, WordLength};
use std::path::PathBuf;

/// The resolved settings for a single histogram run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub mode: Mode,
    pub buckets: usize,
    pub trailing: TrailingWord,
    pub format: Format,
    pub input: Option<PathBuf>,
    pub skip_empty: bool,
    pub percentiles: Vec<f64>,
}

impl Mode {
    /// The number of buckets used when none is given on the command line.
    pub fn default_buckets(&self) -> usize {
        match self {
            Self::Letters => Letters::BUCKETS,
            Self::Digits => Digits::BUCKETS,
            Self::Whitespace => Whitespace::BUCKETS,
            Self::Words => WordLength::BUCKETS,
            Self::Lines => LineLength::BUCKETS,
        }
    }
}

impl From<Trailing> for TrailingWord {
    fn from(trailing: Trailing) -> Self {
        match trailing {
            Trailing::Ignore => Self::Ignore,
            Trailing::Count => Self::Count,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            buckets: args.buckets.unwrap_or_else(|| args.mode.default_buckets()),
            mode: args.mode,
            trailing: args.trailing.into(),
            format: args.format,
            input: args.input,
            skip_empty: args.skip_empty,
            percentiles: args.percentiles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn default_buckets() {
        for (mode, buckets) in [
            ("letters", 26),
            ("digits", 10),
            ("whitespace", 3),
            ("words", 30),
            ("lines", 1000),
        ] {
            let config = Config::from(Args::try_parse_from(["histo", mode]).unwrap());
            assert_eq!(config.buckets, buckets, "{mode}");
        }
    }

    #[test]
    fn explicit_buckets() {
        let args = Args::try_parse_from(["histo", "words", "-b", "12", "--trailing", "count"]).unwrap();
        let config = Config::from(args);
        assert_eq!(config.buckets, 12);
        assert_eq!(config.trailing, TrailingWord::Count);
    }
}
