//! Tolerance interval toolkit
//!
//! Single entry point re-exporting the workspace crates:
//!
//! - [`tolerance_core`]: error type, sample utilities, distribution quantiles
//! - [`tolerance_interval`]: the normal, nonparametric and bootstrap estimators
//!
//! ```rust
//! use tolerance_stats::prelude::*;
//!
//! let sample = [10.0, 12.0, 11.0, 13.0, 9.0, 14.0, 10.0, 12.0, 11.0, 13.0];
//! let ti = compute_normal_ti(&sample, 0.90, 0.95).unwrap();
//! println!("{ti}");
//! ```

pub use tolerance_core;
pub use tolerance_interval;

pub use tolerance_core::{Error, Result};

/// Commonly used items
pub mod prelude {
    pub use tolerance_interval::api::{
        compute_bootstrap_ti, compute_nonparametric_ti, compute_normal_ti,
    };
    pub use tolerance_interval::{
        BootstrapConfig, BootstrapIntervalEstimator, ChiSquareQuantile, Coverage,
        NonparametricIntervalEstimator, NormalIntervalEstimator, PercentileScale,
        ToleranceInterval, ToleranceIntervalEstimator,
    };
}
