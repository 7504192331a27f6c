//! Buckets pair a bucket index with the number of observations that were
//! classified into it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A bucket is a single slot of the histogram and a count of observations
/// that fall into that slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bucket {
    pub(crate) index: usize,
    pub(crate) count: u64,
}

impl Bucket {
    /// Returns the index of the bucket within the histogram.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of observations within the bucket.
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl From<Bucket> for (usize, u64) {
    fn from(bucket: Bucket) -> Self {
        (bucket.index, bucket.count)
    }
}
