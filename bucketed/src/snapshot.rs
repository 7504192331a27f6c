use crate::{Bucket, Config, Error, _Histograms};

/// A read-only copy of a histogram's buckets, taken at a point in time. The
/// source histogram may keep counting without affecting the snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    config: Config,
    buckets: Box<[u64]>,
}

impl _Histograms for Snapshot {
    fn config(&self) -> &Config {
        &self.config
    }

    fn total_count(&self) -> u128 {
        self.buckets.iter().map(|v| *v as u128).sum()
    }

    fn get_count(&self, index: usize) -> u64 {
        self.buckets[index]
    }
}

impl Snapshot {
    pub(crate) fn new(config: Config, buckets: Box<[u64]>) -> Self {
        debug_assert_eq!(config.total_bins(), buckets.len());
        Self { config, buckets }
    }

    /// Returns the number of buckets in the snapshot.
    pub fn total_bins(&self) -> usize {
        self.config.total_bins()
    }

    /// Returns the count for the bucket at `index`, if it exists.
    pub fn count(&self, index: usize) -> Option<u64> {
        self.buckets.get(index).copied()
    }

    pub fn get(&self, index: usize) -> Option<Bucket> {
        self.count(index).map(|count| Bucket { index, count })
    }

    /// Returns the sum of the counts across every bucket.
    pub fn total(&self) -> u128 {
        self.total_count()
    }

    /// Returns the largest single bucket count, useful to scale a rendering.
    pub fn max_count(&self) -> u64 {
        self.buckets.iter().copied().max().unwrap_or(0)
    }

    /// Returns an iterator across every bucket in index order.
    pub fn iter(&self) -> impl Iterator<Item = Bucket> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .map(|(index, count)| Bucket {
                index,
                count: *count,
            })
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.buckets
    }

    /// Returns the per-bucket difference between this snapshot and an older
    /// one of the same histogram. Counters wrap, matching how the histogram
    /// itself accumulates.
    pub fn wrapping_sub(&self, other: &Snapshot) -> Result<Snapshot, Error> {
        if self.total_bins() != other.total_bins() {
            return Err(Error::Mismatch {
                left: self.total_bins(),
                right: other.total_bins(),
            });
        }

        let buckets: Box<[u64]> = self
            .buckets
            .iter()
            .zip(other.buckets.iter())
            .map(|(this, other)| this.wrapping_sub(*other))
            .collect();

        Ok(Self::new(self.config, buckets))
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = Bucket;
    type IntoIter = Box<dyn Iterator<Item = Bucket> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
