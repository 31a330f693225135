//! Tolerance interval estimation
//!
//! A tolerance interval is expected to contain a given `proportion` of the
//! population with a given `confidence`. This crate provides three methods:
//!
//! - **Normal**: `x̄ ± k·s` with Howe's factor and Guenther's correction
//! - **Nonparametric**: a pair of order statistics chosen from the binomial
//!   distribution, valid for any continuous population
//! - **Bootstrap**: the nonparametric method applied to seeded resamples,
//!   summarized by percentiles of the resulting bounds
//!
//! # Examples
//!
//! ```rust
//! use tolerance_interval::{
//!     BootstrapIntervalEstimator, NormalIntervalEstimator, ToleranceIntervalEstimator,
//! };
//!
//! let sample = [10.0, 12.0, 11.0, 13.0, 9.0, 14.0, 10.0, 12.0, 11.0, 13.0];
//!
//! let normal = NormalIntervalEstimator::new();
//! let ti = normal.tolerance_interval(&sample, 0.90, 0.95).unwrap();
//! println!("{}: {}", normal.name(), ti);
//!
//! let bootstrap = BootstrapIntervalEstimator::new()
//!     .with_resamples(500)
//!     .with_seed(7);
//! let ti = bootstrap.compute(&sample, 0.50, 0.90).unwrap();
//! assert!(ti.lower <= ti.upper);
//! ```

pub mod api;
mod bootstrap;
mod nonparametric;
mod normal;
mod traits;
mod types;

// Re-exports
pub use bootstrap::{
    BootstrapConfig, BootstrapDistribution, BootstrapIntervalEstimator, BootstrapResult,
    PercentileScale,
};
pub use nonparametric::{NonparametricIntervalEstimator, OrderStatisticRanks};
pub use normal::{ChiSquareQuantile, NormalIntervalEstimator};
pub use traits::ToleranceIntervalEstimator;
pub use types::{Coverage, ToleranceInterval};

pub use tolerance_core::{Error, Result};
