//! High-level API for tolerance intervals
//!
//! One function per method, each running a default-constructed estimator.
//! Use the estimator types directly to change the chi-square point, the
//! resample count or the seed.

use crate::{
    BootstrapIntervalEstimator, NonparametricIntervalEstimator, NormalIntervalEstimator,
    ToleranceInterval,
};
use tolerance_core::Result;

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 10_000;

/// Fast number of resamples for quick estimates
pub const FAST_RESAMPLES: usize = 1_000;

/// High-precision number of resamples
pub const HIGH_PRECISION_RESAMPLES: usize = 50_000;

/// Default seed of the bootstrap generator
pub const DEFAULT_SEED: u64 = 15;

/// Normal-theory tolerance interval with Guenther's correction
///
/// # Example
/// ```rust
/// use tolerance_interval::api::compute_normal_ti;
///
/// let sample = [10.0, 12.0, 11.0, 13.0, 9.0, 14.0, 10.0, 12.0, 11.0, 13.0];
/// let ti = compute_normal_ti(&sample, 0.90, 0.95).unwrap();
/// assert!(ti.lower < 9.0 && ti.upper > 14.0);
/// ```
pub fn compute_normal_ti(
    sample: &[f64],
    proportion: f64,
    confidence: f64,
) -> Result<ToleranceInterval> {
    NormalIntervalEstimator::new().compute(sample, proportion, confidence)
}

/// Distribution-free tolerance interval from order statistics
///
/// # Example
/// ```rust
/// use tolerance_interval::api::compute_nonparametric_ti;
///
/// let sample: Vec<f64> = (1..=20).map(f64::from).collect();
/// let ti = compute_nonparametric_ti(&sample, 0.80, 0.90).unwrap();
/// assert_eq!(ti.as_tuple(), (1.0, 20.0));
/// ```
pub fn compute_nonparametric_ti(
    sample: &[f64],
    proportion: f64,
    confidence: f64,
) -> Result<ToleranceInterval> {
    NonparametricIntervalEstimator::new().compute(sample, proportion, confidence)
}

/// Bootstrap tolerance interval with [`DEFAULT_RESAMPLES`] resamples and
/// [`DEFAULT_SEED`]
pub fn compute_bootstrap_ti(
    sample: &[f64],
    proportion: f64,
    confidence: f64,
) -> Result<ToleranceInterval> {
    BootstrapIntervalEstimator::new().compute(sample, proportion, confidence)
}
