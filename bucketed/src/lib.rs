//! This crate contains a fixed-arity histogram that counts discrete input
//! units (characters, words, lines, ...) into a bounded set of buckets.
//!
//! Each unit is mapped to a bucket index by a [`Classifier`]. The classifier
//! is a policy supplied by the caller: it can be a plain closure, or one of the
//! classifiers in the [`classify`] module such as letter frequency or word
//! length. A classifier may also decline to count a unit at all.
//!
//! The bucket table never grows. Any index that falls outside of it is
//! reported as [`Error::IndexOutOfRange`] and the table is left untouched.
//!
//! * `Histogram` - the raw bucket table, indexed directly
//! * `Counter` - a histogram driven by a classifier over a stream of units
//! * `Snapshot` - a read-only copy of the buckets for reporting
//!
//! ```
//! use bucketed::classify::Letters;
//! use bucketed::Counter;
//!
//! let mut counter = Counter::new(26, Letters).unwrap();
//! counter.observe_all("ab ab\ncc".chars()).unwrap();
//!
//! let snapshot = counter.snapshot();
//! assert_eq!(snapshot.count(0), Some(2));
//! assert_eq!(snapshot.count(2), Some(2));
//! assert_eq!(snapshot.count(3), Some(0));
//! ```

pub mod classify;

mod bucket;
mod config;
mod counter;
mod errors;
mod snapshot;
mod standard;

pub use bucket::Bucket;
pub use classify::Classifier;
pub use config::Config;
pub use counter::Counter;
pub use errors::{BuildError, Error};
pub use snapshot::Snapshot;
pub use standard::Histogram;

/// A private trait that allows us to share logic across `Histogram` and
/// `Snapshot` types.
trait _Histograms {
    fn config(&self) -> &Config;

    fn total_count(&self) -> u128;

    fn get_count(&self, index: usize) -> u64;

    fn get_bucket(&self, index: usize) -> Bucket {
        Bucket {
            index,
            count: self.get_count(index),
        }
    }
}

/// A histogram stores counts per bucket and produces summary statistics about
/// the distribution of bucket indices.
pub trait Histograms {
    /// Returns the bucket in which the requested percentile falls. Percentiles
    /// are expressed in the range `0.0..=100.0`.
    fn percentile(&self, percentile: f64) -> Result<Bucket, Error> {
        self.percentiles(&[percentile])?
            .first()
            .map(|(_, bucket)| *bucket)
            .ok_or(Error::Empty)
    }

    /// Returns the buckets for each of the requested percentiles, sorted by
    /// percentile.
    fn percentiles(&self, percentiles: &[f64]) -> Result<Vec<(f64, Bucket)>, Error>;
}

impl<T: _Histograms> Histograms for T {
    fn percentiles(&self, percentiles: &[f64]) -> Result<Vec<(f64, Bucket)>, Error> {
        if percentiles
            .iter()
            .any(|p| !(0.0..=100.0).contains(p))
        {
            return Err(Error::InvalidPercentile);
        }

        // get the total count across all buckets
        let total: u128 = self.total_count();

        // if the histogram is empty, then there is nothing to report
        if total == 0_u128 {
            return Err(Error::Empty);
        }

        // sort the requested percentiles so we can find them in a single pass
        let mut percentiles = percentiles.to_vec();
        percentiles.sort_by(|a, b| a.total_cmp(b));

        let mut result = Vec::with_capacity(percentiles.len());

        let mut have = 0_u128;
        let mut percentile_idx = 0_usize;
        let mut current_idx = 0_usize;
        let mut max_idx = 0_usize;

        // outer loop walks through the requested percentiles
        'outer: loop {
            // if we have all the requested percentiles, return the result
            if percentile_idx >= percentiles.len() {
                return Ok(result);
            }

            // calculate the count we need to have for the requested percentile
            let percentile = percentiles[percentile_idx];
            let needed = ((percentile / 100.0 * total as f64).ceil() as u128).max(1);

            // if the count is already that high, push to the results and
            // continue onto the next percentile
            if have >= needed {
                result.push((percentile, self.get_bucket(current_idx - 1)));
                percentile_idx += 1;
                continue;
            }

            // the inner loop walks through the buckets
            'inner: loop {
                // if we've run out of buckets, break the outer loop
                if current_idx >= self.config().total_bins() {
                    break 'outer;
                }

                let current_count = self.get_count(current_idx);

                // track the highest index with a non-zero count
                if current_count > 0 {
                    max_idx = current_idx;
                }

                have += current_count as u128;

                // if this is enough for the requested percentile, push to the
                // results and break the inner loop to move onto the next
                // percentile
                if have >= needed {
                    result.push((percentile, self.get_bucket(current_idx)));
                    percentile_idx += 1;
                    current_idx += 1;
                    break 'inner;
                }

                current_idx += 1;
            }
        }

        // fill the remaining percentiles with the highest non-zero bucket. this
        // only happens when rounding pushes `needed` past the total.
        for percentile in percentiles.iter().skip(result.len()) {
            result.push((*percentile, self.get_bucket(max_idx)));
        }

        Ok(result)
    }
}
