//! Bootstrap tolerance intervals built on the nonparametric estimator
//!
//! This module provides a seeded, reproducible bootstrap that:
//! - Draws resamples with replacement from a locally owned `ChaCha8Rng`
//! - Runs the nonparametric estimator on every resample
//! - Summarizes the lower and upper bound distributions by percentiles
//!
//! A failing resample fails the whole bootstrap; no iteration is skipped.

use crate::{
    api::{DEFAULT_RESAMPLES, DEFAULT_SEED},
    Coverage, NonparametricIntervalEstimator, ToleranceInterval, ToleranceIntervalEstimator,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tolerance_core::{
    utils::{percentile_sorted, sorted, validate_sample},
    Error, ResampleWorkspace, Result,
};
use tracing::{debug, instrument};

/// How the percentile positions `(1 - confidence) / 2` and `confidence / 2`
/// map onto the 0-100 percentile scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentileScale {
    /// Use the positions unscaled, e.g. the 0.025th percentile for a 95%
    /// confidence level. Both bounds land close to the minima of their
    /// distributions.
    #[default]
    Literal,
    /// Multiply the positions by 100, e.g. the 2.5th percentile
    Fraction,
}

impl PercentileScale {
    /// Percentile (0-100 scale) for a fractional position
    pub fn percentile(self, position: f64) -> f64 {
        match self {
            Self::Literal => position,
            Self::Fraction => position * 100.0,
        }
    }
}

/// Bootstrap settings
///
/// All fields have defaults, so a partial serialized config is enough.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Number of bootstrap resamples
    pub resamples: usize,
    /// Seed of the resampling generator
    pub seed: u64,
    /// Percentile convention of the aggregation step
    pub percentile_scale: PercentileScale,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            resamples: DEFAULT_RESAMPLES,
            seed: DEFAULT_SEED,
            percentile_scale: PercentileScale::default(),
        }
    }
}

impl BootstrapConfig {
    /// Check the settings before running
    pub fn validate(&self) -> Result<()> {
        if self.resamples == 0 {
            return Err(Error::InvalidParameter(
                "Number of resamples must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-resample bounds, in draw order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BootstrapDistribution {
    /// Lower bound of each resample's interval
    pub lower_bounds: Vec<f64>,
    /// Upper bound of each resample's interval
    pub upper_bounds: Vec<f64>,
}

impl BootstrapDistribution {
    /// Create an empty distribution with room for `n_resamples` entries
    pub fn with_capacity(n_resamples: usize) -> Self {
        Self {
            lower_bounds: Vec::with_capacity(n_resamples),
            upper_bounds: Vec::with_capacity(n_resamples),
        }
    }

    /// Record one resample's interval
    pub fn push(&mut self, interval: ToleranceInterval) {
        self.lower_bounds.push(interval.lower);
        self.upper_bounds.push(interval.upper);
    }

    /// Number of recorded resamples
    pub fn len(&self) -> usize {
        self.lower_bounds.len()
    }

    /// Whether no resample has been recorded
    pub fn is_empty(&self) -> bool {
        self.lower_bounds.is_empty()
    }

    /// Collapse the distribution into a single interval
    ///
    /// Lower bound: percentile at `(1 - confidence) / 2` of the lower bounds.
    /// Upper bound: percentile at `confidence / 2` of the upper bounds.
    ///
    /// For `confidence >= 0.5` the lower position never exceeds the upper
    /// one, so the bounds stay ordered. Below that the positions cross, and
    /// a summary with `lower > upper` is rejected with `InvalidParameter`.
    pub fn summarize(&self, confidence: f64, scale: PercentileScale) -> Result<ToleranceInterval> {
        if self.is_empty() {
            return Err(Error::InvalidInput("No bootstrap estimates".to_string()));
        }

        let lower_q = scale.percentile((1.0 - confidence) / 2.0);
        let upper_q = scale.percentile(confidence / 2.0);

        let lower = percentile_sorted(&sorted(&self.lower_bounds), lower_q)?;
        let upper = percentile_sorted(&sorted(&self.upper_bounds), upper_q)?;

        debug!(
            "Bootstrap percentiles: lower q={:.4} -> {:.4}, upper q={:.4} -> {:.4}",
            lower_q, lower, upper_q, upper
        );

        if lower > upper {
            return Err(Error::InvalidParameter(format!(
                "Bootstrap bounds inverted ({lower} > {upper}) for confidence {confidence} \
                 with {scale:?} percentile scale; use a confidence of at least 0.5"
            )));
        }
        Ok(ToleranceInterval::new(lower, upper))
    }
}

/// Result of a bootstrap tolerance interval estimation
#[derive(Debug, Clone)]
pub struct BootstrapResult {
    /// The summarized tolerance interval
    pub interval: ToleranceInterval,
    /// Bounds of every resample
    pub distribution: BootstrapDistribution,
    /// Number of bootstrap resamples performed
    pub n_resamples: usize,
}

/// Bootstrap tolerance interval estimator
///
/// Every call seeds a fresh `ChaCha8Rng` from the configured seed, so two
/// calls with the same arguments return bit-identical intervals.
#[derive(Debug, Clone, Default)]
pub struct BootstrapIntervalEstimator {
    config: BootstrapConfig,
    inner: NonparametricIntervalEstimator,
}

impl BootstrapIntervalEstimator {
    /// Create a bootstrap estimator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all settings at once
    pub fn with_config(mut self, config: BootstrapConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of bootstrap resamples
    pub fn with_resamples(mut self, resamples: usize) -> Self {
        self.config.resamples = resamples;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the percentile convention
    pub fn with_percentile_scale(mut self, scale: PercentileScale) -> Self {
        self.config.percentile_scale = scale;
        self
    }

    /// Current settings
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Compute the bootstrap tolerance interval
    pub fn compute(
        &self,
        sample: &[f64],
        proportion: f64,
        confidence: f64,
    ) -> Result<ToleranceInterval> {
        self.compute_distribution(sample, proportion, confidence)
            .map(|result| result.interval)
    }

    /// Compute the interval along with the full bootstrap distribution
    pub fn compute_distribution(
        &self,
        sample: &[f64],
        proportion: f64,
        confidence: f64,
    ) -> Result<BootstrapResult> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.compute_with_rng(&mut rng, sample, proportion, confidence)
    }

    /// Run the bootstrap against a caller-owned generator
    ///
    /// Resamples are drawn sequentially, so the output depends on the
    /// generator's state on entry. The configured seed is not used.
    #[instrument(skip(self, rng, sample), fields(n = sample.len(), n_resamples = self.config.resamples))]
    pub fn compute_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        sample: &[f64],
        proportion: f64,
        confidence: f64,
    ) -> Result<BootstrapResult> {
        self.config.validate()?;
        validate_sample(sample, NonparametricIntervalEstimator::MIN_SAMPLE_SIZE)?;
        let coverage = Coverage::new(proportion, confidence)?;

        // Ranks depend only on n and the coverage, so every resample shares
        // them. An invalid rank pair fails here with the exact error the
        // first resample would raise.
        let ranks = self.inner.ranks(sample.len(), proportion, confidence)?;

        debug!("Running bootstrap with {} resamples", self.config.resamples);

        let mut workspace = ResampleWorkspace::with_capacity(sample.len());
        let mut distribution = BootstrapDistribution::with_capacity(self.config.resamples);
        for _ in 0..self.config.resamples {
            let resample = workspace.resample_sorted(sample, rng);
            distribution.push(ranks.select(resample)?);
        }

        let interval =
            distribution.summarize(coverage.confidence(), self.config.percentile_scale)?;

        Ok(BootstrapResult {
            interval,
            distribution,
            n_resamples: self.config.resamples,
        })
    }

    /// Parallel bootstrap
    ///
    /// Resample `i` draws from its own `ChaCha8Rng` seeded with `seed + i`.
    /// The result is reproducible and independent of the thread count, but
    /// differs from the sequential single-stream result of
    /// [`compute_distribution`](Self::compute_distribution).
    #[cfg(feature = "parallel")]
    #[instrument(skip(self, sample), fields(n = sample.len(), n_resamples = self.config.resamples))]
    pub fn compute_parallel(
        &self,
        sample: &[f64],
        proportion: f64,
        confidence: f64,
    ) -> Result<BootstrapResult> {
        use rayon::prelude::*;

        self.config.validate()?;
        validate_sample(sample, NonparametricIntervalEstimator::MIN_SAMPLE_SIZE)?;
        let coverage = Coverage::new(proportion, confidence)?;
        let ranks = self.inner.ranks(sample.len(), proportion, confidence)?;
        let seed = self.config.seed;

        debug!("Running parallel bootstrap with {} resamples", self.config.resamples);

        let intervals = (0..self.config.resamples)
            .into_par_iter()
            .map_init(
                || ResampleWorkspace::with_capacity(sample.len()),
                |workspace, i| {
                    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(i as u64));
                    ranks.select(workspace.resample_sorted(sample, &mut rng))
                },
            )
            .collect::<Result<Vec<_>>>()?;

        let mut distribution = BootstrapDistribution::with_capacity(intervals.len());
        for interval in intervals {
            distribution.push(interval);
        }

        let interval =
            distribution.summarize(coverage.confidence(), self.config.percentile_scale)?;

        Ok(BootstrapResult {
            interval,
            distribution,
            n_resamples: self.config.resamples,
        })
    }
}

impl ToleranceIntervalEstimator for BootstrapIntervalEstimator {
    fn tolerance_interval(
        &self,
        sample: &[f64],
        proportion: f64,
        confidence: f64,
    ) -> Result<ToleranceInterval> {
        self.compute(sample, proportion, confidence)
    }

    fn name(&self) -> &'static str {
        "Bootstrap (nonparametric percentile)"
    }
}
