//! Distribution-free tolerance intervals from order statistics
//!
//! For a sample of size `n`, let `B` be the `confidence` quantile of
//! `Binomial(n, proportion)` and `v = n - B`. The interval runs from the
//! `L = floor(v/2)`-th to the `U = ceil(n + 1 - v/2)`-th order statistic.
//! When `L < 1` the sample is too small for the requested coverage and no
//! interval exists.

use crate::{Coverage, ToleranceInterval, ToleranceIntervalEstimator};
use tolerance_core::{
    math::distributions::binomial,
    utils::{sorted, validate_sample},
    Error, Result,
};
use tracing::{debug, instrument};

/// Largest sample size `minimum_sample_size` will consider
const MAX_SEARCH_SAMPLE_SIZE: u64 = 1 << 48;

/// 1-based order-statistic ranks of a nonparametric tolerance interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderStatisticRanks {
    lower: usize,
    upper: usize,
    n: usize,
}

impl OrderStatisticRanks {
    /// Rank of the lower bound, in `[1, n]`
    pub fn lower(&self) -> usize {
        self.lower
    }

    /// Rank of the upper bound, in `[1, n]`
    pub fn upper(&self) -> usize {
        self.upper
    }

    /// Sample size the ranks were computed for
    pub fn n(&self) -> usize {
        self.n
    }

    /// Pick the bounds out of an ascending slice of length `n`
    pub fn select(&self, sorted_sample: &[f64]) -> Result<ToleranceInterval> {
        if sorted_sample.len() != self.n {
            return Err(Error::InvalidInput(format!(
                "Ranks computed for n = {} applied to a sample of length {}",
                self.n,
                sorted_sample.len()
            )));
        }
        Ok(ToleranceInterval::new(
            sorted_sample[self.lower - 1],
            sorted_sample[self.upper - 1],
        ))
    }
}

/// Distribution-free tolerance interval estimator
///
/// The bounds are always values of the sample itself. The caller's sample
/// is never reordered; a sorted copy is used for rank lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonparametricIntervalEstimator;

impl NonparametricIntervalEstimator {
    /// Minimum sample size before rank validity is even considered
    pub const MIN_SAMPLE_SIZE: usize = 2;

    /// Create a new nonparametric tolerance interval estimator
    pub fn new() -> Self {
        Self
    }

    /// Order-statistic ranks for a sample of size `n`
    ///
    /// # Errors
    /// `InsufficientSampleSize` when the ranks fall outside `[1, n]`.
    pub fn ranks(&self, n: usize, proportion: f64, confidence: f64) -> Result<OrderStatisticRanks> {
        if n < Self::MIN_SAMPLE_SIZE {
            return Err(Error::InsufficientData {
                expected: Self::MIN_SAMPLE_SIZE,
                actual: n,
            });
        }
        let coverage = Coverage::new(proportion, confidence)?;

        let b = binomial::quantile(coverage.confidence(), n as u64, coverage.proportion())?;
        let n_i = n as i64;
        let v = n_i - b as i64;
        let lower = v.div_euclid(2);
        // ceil(n + 1 - v/2) == n + 1 - floor(v/2)
        let upper = n_i + 1 - lower;

        debug!("Nonparametric ranks: n={}, B={}, v={}, L={}, U={}", n, b, v, lower, upper);

        if lower < 1 || upper > n_i {
            return Err(Error::InsufficientSampleSize {
                n,
                lower_rank: lower,
                upper_rank: upper,
                proportion: coverage.proportion(),
                confidence: coverage.confidence(),
            });
        }

        Ok(OrderStatisticRanks {
            lower: lower as usize,
            upper: upper as usize,
            n,
        })
    }

    /// Smallest sample size for which an interval exists
    ///
    /// The ranks are valid exactly when `P(X <= n - 2) >= confidence` for
    /// `X ~ Binomial(n, proportion)`. That probability grows with `n`, so an
    /// upper bound is found by doubling and the threshold by bisection.
    pub fn minimum_sample_size(&self, proportion: f64, confidence: f64) -> Result<usize> {
        let coverage = Coverage::new(proportion, confidence)?;
        let valid = |n: u64| -> Result<bool> {
            Ok(binomial::cdf(n - 2, n, coverage.proportion())? >= coverage.confidence())
        };

        let mut low = Self::MIN_SAMPLE_SIZE as u64;
        let mut high = low;
        while !valid(high)? {
            low = high + 1;
            high = high.saturating_mul(2);
            if high > MAX_SEARCH_SAMPLE_SIZE {
                return Err(Error::Computation(format!(
                    "No sample size up to {MAX_SEARCH_SAMPLE_SIZE} achieves proportion {} at confidence {}",
                    coverage.proportion(),
                    coverage.confidence()
                )));
            }
        }

        // valid(high) holds and every n < low is invalid
        while low < high {
            let mid = low + (high - low) / 2;
            if valid(mid)? {
                high = mid;
            } else {
                low = mid + 1;
            }
        }

        debug!("Minimum sample size for {}: {}", coverage, high);
        usize::try_from(high).map_err(|_| {
            Error::Computation(format!("Minimum sample size {high} does not fit in usize"))
        })
    }

    /// Compute the interval from an unsorted sample
    #[instrument(skip(self, sample), fields(n = sample.len()))]
    pub fn compute(
        &self,
        sample: &[f64],
        proportion: f64,
        confidence: f64,
    ) -> Result<ToleranceInterval> {
        validate_sample(sample, Self::MIN_SAMPLE_SIZE)?;
        let ranks = self.ranks(sample.len(), proportion, confidence)?;
        ranks.select(&sorted(sample))
    }
}

impl ToleranceIntervalEstimator for NonparametricIntervalEstimator {
    fn tolerance_interval(
        &self,
        sample: &[f64],
        proportion: f64,
        confidence: f64,
    ) -> Result<ToleranceInterval> {
        self.compute(sample, proportion, confidence)
    }

    fn name(&self) -> &'static str {
        "Nonparametric (order statistics)"
    }
}
