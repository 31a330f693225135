//! Normal-theory tolerance intervals with Guenther's finite-sample correction
//!
//! The interval is `x̄ ± k·s` where `k` combines Howe's approximation
//!
//! ```text
//! k0 = z_{(1+p)/2} · sqrt((n-1)(1 + 1/n) / χ²)
//! ```
//!
//! with Guenther's correction `w = sqrt(1 + (n - 3 - χ²) / (2(n+1)²))`.
//!
//! References: Howe, W. G. (1969). Two-sided tolerance limits for normal
//! populations, some improvements. JASA 64, 610-620. Guenther, W. C. (1977).
//! Sampling Inspection in Statistical Quality Control.

use crate::{Coverage, ToleranceInterval, ToleranceIntervalEstimator};
use serde::{Deserialize, Serialize};
use tolerance_core::{
    math::distributions::{chi_squared, normal},
    utils::{mean, std_dev, validate_sample},
    Error, Result,
};
use tracing::{debug, instrument};

/// Which probability point of the chi-square distribution enters `k`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChiSquareQuantile {
    /// Inverse CDF at `1 - confidence`: the critical value exceeded with
    /// probability `confidence`. Intervals widen as confidence grows.
    #[default]
    Alpha,
    /// Inverse CDF at `confidence`. Intervals narrow as confidence grows.
    Confidence,
}

impl ChiSquareQuantile {
    fn probability(self, coverage: &Coverage) -> f64 {
        match self {
            Self::Alpha => coverage.alpha(),
            Self::Confidence => coverage.confidence(),
        }
    }
}

/// Parametric tolerance interval assuming a normal population
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalIntervalEstimator {
    chi_square: ChiSquareQuantile,
}

impl NormalIntervalEstimator {
    /// Minimum sample size for a finite sample standard deviation
    pub const MIN_SAMPLE_SIZE: usize = 2;

    /// Create a new normal tolerance interval estimator
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the chi-square probability point
    pub fn with_chi_square_quantile(mut self, chi_square: ChiSquareQuantile) -> Self {
        self.chi_square = chi_square;
        self
    }

    /// The configured chi-square probability point
    pub fn chi_square_quantile(&self) -> ChiSquareQuantile {
        self.chi_square
    }

    /// Tolerance factor `k` for a sample of size `n`
    ///
    /// # Errors
    /// `InsufficientData` for `n < 2`, `InvalidParameter` for a proportion or
    /// confidence outside (0, 1), `Computation` when the correction radicand
    /// is not positive.
    pub fn k_factor(&self, n: usize, proportion: f64, confidence: f64) -> Result<f64> {
        if n < Self::MIN_SAMPLE_SIZE {
            return Err(Error::InsufficientData {
                expected: Self::MIN_SAMPLE_SIZE,
                actual: n,
            });
        }
        let coverage = Coverage::new(proportion, confidence)?;

        let n_f = n as f64;
        let df = n_f - 1.0;
        let z = normal::quantile((1.0 + coverage.proportion()) / 2.0)?;
        let chi2 = chi_squared::quantile(self.chi_square.probability(&coverage), df)?;

        let k0 = z * (df * (1.0 + 1.0 / n_f) / chi2).sqrt();

        let radicand = 1.0 + (n_f - 3.0 - chi2) / (2.0 * (n_f + 1.0).powi(2));
        if radicand.is_nan() || radicand <= 0.0 {
            return Err(Error::Computation(format!(
                "Guenther correction radicand {radicand} is not positive (n = {n}, chi2 = {chi2})"
            )));
        }
        let w = radicand.sqrt();

        debug!(
            "Normal tolerance factor: z={:.4}, chi2={:.4}, k0={:.4}, w={:.4}",
            z, chi2, k0, w
        );
        Ok(k0 * w)
    }

    /// Compute the tolerance interval `x̄ ± k·s`
    #[instrument(skip(self, sample), fields(n = sample.len()))]
    pub fn compute(
        &self,
        sample: &[f64],
        proportion: f64,
        confidence: f64,
    ) -> Result<ToleranceInterval> {
        validate_sample(sample, Self::MIN_SAMPLE_SIZE)?;
        let k = self.k_factor(sample.len(), proportion, confidence)?;

        let x_bar = mean(sample);
        let s = std_dev(sample);
        let margin = s * k;

        debug!("Normal tolerance interval: mean={:.4}, sd={:.4}, k={:.4}", x_bar, s, k);
        Ok(ToleranceInterval::new(x_bar - margin, x_bar + margin))
    }
}

impl ToleranceIntervalEstimator for NormalIntervalEstimator {
    fn tolerance_interval(
        &self,
        sample: &[f64],
        proportion: f64,
        confidence: f64,
    ) -> Result<ToleranceInterval> {
        self.compute(sample, proportion, confidence)
    }

    fn name(&self) -> &'static str {
        "Normal (Howe-Guenther)"
    }
}
