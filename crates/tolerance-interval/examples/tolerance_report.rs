//! Print normal, nonparametric and bootstrap tolerance intervals for a
//! simulated measurement series.
//!
//! Run with `RUST_LOG=tolerance_interval=debug` to see intermediate values.

use anyhow::{Context, Result};
use rand::prelude::*;
use rand_distr::Normal;
use tolerance_interval::{
    api::DEFAULT_SEED, BootstrapIntervalEstimator, Coverage, NonparametricIntervalEstimator,
    NormalIntervalEstimator, ToleranceIntervalEstimator,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
    let normal = Normal::new(100.0, 15.0).context("invalid population parameters")?;
    let sample: Vec<f64> = (0..200).map(|_| normal.sample(&mut rng)).collect();

    let estimators: Vec<Box<dyn ToleranceIntervalEstimator>> = vec![
        Box::new(NormalIntervalEstimator::new()),
        Box::new(NonparametricIntervalEstimator::new()),
        Box::new(BootstrapIntervalEstimator::new()),
    ];

    println!("Population: Normal(100, 15), n = {}", sample.len());

    for (proportion, confidence) in [(0.50, 0.90), (0.90, 0.95), (0.99, 0.99)] {
        let coverage = Coverage::new(proportion, confidence)?;
        println!("\n{coverage}");

        for estimator in &estimators {
            match estimator.tolerance_interval(&sample, proportion, confidence) {
                Ok(ti) => println!("  {:<40} {} (width {:.2})", estimator.name(), ti, ti.width()),
                Err(e) => println!("  {:<40} unavailable: {}", estimator.name(), e),
            }
        }
    }

    let n_min = NonparametricIntervalEstimator
        .minimum_sample_size(0.99, 0.99)
        .context("minimum sample size search failed")?;
    println!("\nSmallest sample for a 99%/99% nonparametric interval: {n_min}");

    Ok(())
}
