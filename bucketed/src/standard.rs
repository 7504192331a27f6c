use crate::{Bucket, BuildError, Config, Error, Snapshot, _Histograms};

/// A simple histogram with a fixed number of buckets, each holding a 64bit
/// counter. Buckets are addressed directly by index and every index is
/// checked against the bucket table before it is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    pub(crate) buckets: Box<[u64]>,
    pub(crate) config: Config,
}

impl _Histograms for Histogram {
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

impl Histogram {
    /// Construct a new `Histogram` with `buckets` zeroed buckets.
    ///
    /// # Constraints
    /// * `buckets` must be greater than zero
    pub fn new(buckets: usize) -> Result<Self, BuildError> {
        let config = Config::new(buckets)?;

        Ok(Self::from_config(config))
    }

    /// Increment the bucket at `index` by one.
    pub fn increment(&mut self, index: usize) -> Result<(), Error> {
        self.add(index, 1)
    }

    /// Increment the bucket at `index` by `count`. An index outside of the
    /// histogram is an error and leaves every bucket unchanged.
    pub fn add(&mut self, index: usize, count: u64) -> Result<(), Error> {
        let index = self.config.checked_index(index)?;
        self.buckets[index] = self.buckets[index].wrapping_add(count);
        Ok(())
    }

    /// Returns the bucket at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<Bucket> {
        self.config
            .checked_index(index)
            .ok()
            .map(|index| self.get_bucket(index))
    }

    /// Returns the number of buckets in the histogram.
    pub fn total_bins(&self) -> usize {
        self.config.total_bins()
    }

    /// Returns the sum of the counts across every bucket.
    pub fn total_count(&self) -> u128 {
        _Histograms::total_count(self)
    }

    /// Zero every bucket in place. The number of buckets does not change.
    pub fn reset(&mut self) {
        self.buckets.fill(0);
    }

    /// Take a read-only copy of the current bucket counts.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.config, self.buckets.clone())
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

    pub fn config(&self) -> Config {
        self.config
    }

    pub(crate) fn from_config(config: Config) -> Self {
        let buckets: Box<[u64]> = vec![0; config.total_bins()].into();

        Self { buckets, config }
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Histograms;
    use rand::Rng;

    #[test]
    fn zero_buckets() {
        assert_eq!(Histogram::new(0), Err(BuildError::InvalidConfiguration));
    }

    #[test]
    fn starts_empty() {
        for buckets in [1, 10, 26, 30, 1000] {
            let histogram = Histogram::new(buckets).unwrap();
            assert_eq!(histogram.total_bins(), buckets);
            assert_eq!(histogram.iter().count(), buckets);
            assert!(histogram.iter().all(|b| b.count() == 0));
        }
    }

    #[test]
    fn increment() {
        let mut histogram = Histogram::new(10).unwrap();
        for _ in 0..7 {
            histogram.increment(3).unwrap();
        }
        histogram.add(9, 5).unwrap();

        assert_eq!(histogram.get(3).map(|b| b.count()), Some(7));
        assert_eq!(histogram.get(9).map(|b| b.count()), Some(5));
        assert_eq!(histogram.get(10), None);
        assert_eq!(histogram.total_count(), 12);
        for index in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(histogram.as_slice()[index], 0);
        }
    }

    #[test]
    fn out_of_range() {
        let mut histogram = Histogram::new(26).unwrap();
        histogram.increment(25).unwrap();

        let before = histogram.clone();
        assert_eq!(
            histogram.increment(26),
            Err(Error::IndexOutOfRange {
                index: 26,
                buckets: 26
            })
        );
        assert_eq!(
            histogram.add(usize::MAX, 1),
            Err(Error::IndexOutOfRange {
                index: usize::MAX,
                buckets: 26
            })
        );
        assert_eq!(histogram, before);
    }

    #[test]
    fn wrapping() {
        let mut histogram = Histogram::new(1).unwrap();
        histogram.add(0, u64::MAX).unwrap();
        histogram.increment(0).unwrap();
        assert_eq!(histogram.as_slice(), &[0]);
    }

    #[test]
    fn reset() {
        let mut histogram = Histogram::new(30).unwrap();
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            histogram.increment(rng.gen_range(0..30)).unwrap();
        }
        assert_eq!(histogram.total_count(), 1000);

        histogram.reset();
        assert_eq!(histogram.total_bins(), 30);
        assert_eq!(histogram.total_count(), 0);
        assert!(histogram.snapshot().iter().all(|b| b.count() == 0));
    }

    #[test]
    // Tests percentiles
    fn percentiles() {
        let mut histogram = Histogram::new(101).unwrap();
        assert_eq!(histogram.percentile(50.0), Err(Error::Empty));

        for i in 0..=100 {
            histogram.increment(i).unwrap();
            assert_eq!(
                histogram.percentile(0.0),
                Ok(Bucket { index: 0, count: 1 })
            );
            assert_eq!(
                histogram.percentile(100.0),
                Ok(Bucket { index: i, count: 1 })
            );
        }
        assert_eq!(histogram.percentile(25.0).map(|b| b.index()), Ok(25));
        assert_eq!(histogram.percentile(50.0).map(|b| b.index()), Ok(50));
        assert_eq!(histogram.percentile(75.0).map(|b| b.index()), Ok(75));
        assert_eq!(histogram.percentile(90.0).map(|b| b.index()), Ok(90));
        assert_eq!(histogram.percentile(99.0).map(|b| b.index()), Ok(99));
        assert_eq!(histogram.percentile(99.9).map(|b| b.index()), Ok(100));

        let percentiles: Vec<(f64, usize)> = histogram
            .percentiles(&[99.0, 50.0, 90.0, 99.9])
            .unwrap()
            .iter()
            .map(|(p, b)| (*p, b.index()))
            .collect();

        assert_eq!(
            percentiles,
            vec![(50.0, 50), (90.0, 90), (99.0, 99), (99.9, 100)]
        );

        assert_eq!(
            histogram.percentile(100.1),
            Err(Error::InvalidPercentile)
        );
        assert_eq!(
            histogram.percentile(f64::NAN),
            Err(Error::InvalidPercentile)
        );
    }

    #[test]
    fn percentiles_share_bucket() {
        let mut histogram = Histogram::new(5).unwrap();
        histogram.add(2, 10).unwrap();

        let percentiles: Vec<usize> = histogram
            .percentiles(&[10.0, 50.0, 100.0])
            .unwrap()
            .iter()
            .map(|(_, b)| b.index())
            .collect();
        assert_eq!(percentiles, vec![2, 2, 2]);
    }
}
