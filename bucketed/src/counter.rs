use crate::{BuildError, Classifier, Error, Histogram, Snapshot};
use core::marker::PhantomData;

/// A histogram driven by a classifier. Each observed unit is classified and,
/// if the classifier returns an index, the matching bucket is incremented.
///
/// The counter does not own the input. Callers pull units from their source
/// and hand them to [`Counter::observe`] one at a time, then call
/// [`Counter::finish`] once the source is exhausted.
pub struct Counter<C, U> {
    histogram: Histogram,
    classifier: C,
    observed: u64,
    skipped: u64,
    _unit: PhantomData<fn(U)>,
}

impl<C, U> Counter<C, U>
where
    C: Classifier<U>,
{
    /// Construct a new `Counter` with `buckets` zeroed buckets which uses
    /// `classifier` to map units onto buckets.
    ///
    /// # Constraints
    /// * `buckets` must be greater than zero
    pub fn new(buckets: usize, classifier: C) -> Result<Self, BuildError> {
        Ok(Self {
            histogram: Histogram::new(buckets)?,
            classifier,
            observed: 0,
            skipped: 0,
            _unit: PhantomData,
        })
    }

    /// Classify a unit and count it. A unit the classifier skips changes
    /// nothing but the `skipped` total. An index outside of the histogram is
    /// returned as an error and leaves every bucket unchanged.
    pub fn observe(&mut self, unit: U) -> Result<(), Error> {
        self.observed += 1;

        match self.classifier.classify(unit) {
            Some(index) => self.record(index),
            None => {
                self.skipped += 1;
                Ok(())
            }
        }
    }

    /// Observe every unit from `units` in order, stopping at the first error.
    pub fn observe_all<I>(&mut self, units: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = U>,
    {
        for unit in units {
            self.observe(unit)?;
        }
        Ok(())
    }

    /// Signal the end of the input. Stateful classifiers may flush one final
    /// index, which is counted like any other.
    pub fn finish(&mut self) -> Result<(), Error> {
        match self.classifier.finish() {
            Some(index) => self.record(index),
            None => Ok(()),
        }
    }

    fn record(&mut self, index: usize) -> Result<(), Error> {
        self.histogram.increment(index).map_err(|e| {
            log::warn!("classifier produced an invalid bucket: {e}");
            e
        })
    }

    /// Take a read-only copy of the current bucket counts.
    pub fn snapshot(&self) -> Snapshot {
        self.histogram.snapshot()
    }

    /// Zero every bucket and return the classifier to its initial state.
    pub fn reset(&mut self) {
        self.histogram.reset();
        self.classifier.reset();
        self.observed = 0;
        self.skipped = 0;
    }

    /// Returns the number of units passed to `observe`.
    pub fn observed(&self) -> u64 {
        self.observed
    }

    /// Returns the number of observed units which the classifier skipped.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Consume the counter, returning the underlying histogram.
    pub fn into_histogram(self) -> Histogram {
        self.histogram
    }
}
