use thiserror::Error;

/// Errors returned when constructing a histogram.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum BuildError {
    #[error("the number of buckets must be greater than zero")]
    InvalidConfiguration,
}

/// Errors returned for operations on a histogram.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum Error {
    #[error("bucket index {index} is outside of the histogram range 0..{buckets}")]
    IndexOutOfRange { index: usize, buckets: usize },
    #[error("the histogram is empty")]
    Empty,
    #[error("percentiles must be within the range 0.0..=100.0")]
    InvalidPercentile,
    #[error("histograms with {left} and {right} buckets cannot be combined")]
    Mismatch { left: usize, right: usize },
}
