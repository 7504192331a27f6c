use crate::{BuildError, Error};

/// The validated shape of a histogram: how many buckets it holds. Every
/// histogram, counter and snapshot carries one so that indices can be checked
/// before they touch the bucket table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    buckets: usize,
}

impl Config {
    /// Create a new `Config` for a histogram with `buckets` buckets.
    ///
    /// # Constraints
    /// * `buckets` must be greater than zero
    pub const fn new(buckets: usize) -> Result<Self, BuildError> {
        if buckets == 0 {
            return Err(BuildError::InvalidConfiguration);
        }

        Ok(Self { buckets })
    }

    /// Returns the number of buckets.
    pub const fn total_bins(&self) -> usize {
        self.buckets
    }

    /// Checks that an index falls within `0..total_bins()` and returns it.
    pub(crate) fn checked_index(&self, index: usize) -> Result<usize, Error> {
        if index < self.buckets {
            Ok(index)
        } else {
            Err(Error::IndexOutOfRange {
                index,
                buckets: self.buckets,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_buckets() {
        assert_eq!(Config::new(0), Err(BuildError::InvalidConfiguration));
    }

    #[test]
    fn bounds() {
        let config = Config::new(10).unwrap();
        assert_eq!(config.total_bins(), 10);
        assert_eq!(config.checked_index(0), Ok(0));
        assert_eq!(config.checked_index(9), Ok(9));
        assert_eq!(
            config.checked_index(10),
            Err(Error::IndexOutOfRange {
                index: 10,
                buckets: 10
            })
        );
        assert!(config.checked_index(usize::MAX).is_err());
    }
}
