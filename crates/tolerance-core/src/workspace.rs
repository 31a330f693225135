//! Reusable buffers for bootstrap resampling
//!
//! A bootstrap loop draws thousands of resamples of the same size. The
//! workspace keeps one index buffer and one value buffer alive across
//! iterations so the loop does not allocate per resample.

use crate::utils::sort_in_place;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Buffers for drawing sorted resamples with replacement
#[derive(Debug, Clone, Default)]
pub struct ResampleWorkspace {
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl ResampleWorkspace {
    /// Create a workspace sized for samples of length `n`
    pub fn with_capacity(n: usize) -> Self {
        Self {
            indices: Vec::with_capacity(n),
            values: Vec::with_capacity(n),
        }
    }

    /// Fill the index buffer with `n` uniform draws from `[0, n)`
    ///
    /// Indices are drawn in order, one generator call each, so a seeded
    /// generator always produces the same resample sequence.
    pub fn generate_indices<R: Rng + ?Sized>(&mut self, rng: &mut R, n: usize) -> &[usize] {
        self.indices.clear();
        if n == 0 {
            return &self.indices;
        }
        let dist = Uniform::new(0, n);
        self.indices.extend((0..n).map(|_| dist.sample(rng)));
        &self.indices
    }

    /// Draw a resample of `source` with replacement
    pub fn resample<R: Rng + ?Sized>(&mut self, source: &[f64], rng: &mut R) -> &[f64] {
        self.generate_indices(rng, source.len());
        self.values.clear();
        self.values
            .extend(self.indices.iter().map(|&idx| source[idx]));
        &self.values
    }

    /// Draw a resample of `source` with replacement and sort it ascending
    pub fn resample_sorted<R: Rng + ?Sized>(&mut self, source: &[f64], rng: &mut R) -> &[f64] {
        self.resample(source, rng);
        sort_in_place(&mut self.values);
        &self.values
    }
}
