//! Core types and numerical building blocks for tolerance interval estimation
//!
//! This crate provides the pieces shared by the estimators in
//! `tolerance-interval`:
//!
//! - [`Error`] / [`Result`]: the error type used across the workspace
//! - [`utils`]: sample moments, sorted copies, percentiles and input validation
//! - [`math::distributions`]: normal, chi-square and binomial quantile functions
//! - [`workspace`]: reusable buffers for bootstrap resampling
//!
//! # Example
//!
//! ```rust
//! use tolerance_core::math::distributions::{binomial, chi_squared, normal};
//! use tolerance_core::utils::{mean, std_dev};
//!
//! let data = [10.0, 12.0, 11.0, 13.0, 9.0];
//! let z = normal::quantile(0.95).unwrap();
//! let c = chi_squared::quantile(0.05, (data.len() - 1) as f64).unwrap();
//! let m = binomial::quantile(0.9, 20, 0.8).unwrap();
//!
//! println!("mean {}, sd {}, z {z}, chi2 {c}, binomial {m}", mean(&data), std_dev(&data));
//! ```

pub mod error;
pub mod math;
pub mod utils;
pub mod workspace;

pub use error::{Error, Result};
pub use workspace::ResampleWorkspace;
