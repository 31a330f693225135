//! Shared fixtures for integration tests

#![allow(dead_code)]

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use rand::prelude::*;
use rand_distr::Normal;

/// Small sample used throughout the normal-theory checks
pub const MEASUREMENTS: [f64; 10] = [10.0, 12.0, 11.0, 13.0, 9.0, 14.0, 10.0, 12.0, 11.0, 13.0];

/// `1.0, 2.0, ..., n`
pub fn one_to(n: usize) -> Vec<f64> {
    (1..=n).map(|x| x as f64).collect()
}

/// Seeded draw from `Normal(mean, std)`
pub fn normal_sample(size: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

/// Fraction of `data` inside `[lower, upper]`
pub fn fraction_inside(data: &[f64], lower: f64, upper: f64) -> f64 {
    data.iter().filter(|&&x| x >= lower && x <= upper).count() as f64 / data.len() as f64
}
