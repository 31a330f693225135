//! Utility functions for working with data slices

use crate::{Error, Result};
use std::cmp::Ordering;

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use tolerance_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sort_in_place(&mut sorted);
    sorted
}

/// Sort a slice ascending, NaN last
pub fn sort_in_place(data: &mut [f64]) {
    data.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    });
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use tolerance_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Calculate the sample standard deviation (n - 1 denominator)
///
/// Returns 0.0 for slices with less than 2 elements.
///
/// # Examples
///
/// ```rust
/// use tolerance_core::utils::std_dev;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let sd = std_dev(&data);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let m = mean(data);
    let variance: f64 = data
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / (data.len() - 1) as f64;
    variance.sqrt()
}

/// Percentile of already sorted data, `q` on the 0-100 scale
///
/// Linear interpolation between the two closest ranks: the position is
/// `q / 100 * (len - 1)`.
///
/// # Examples
///
/// ```rust
/// use tolerance_core::utils::percentile_sorted;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(percentile_sorted(&data, 50.0).unwrap(), 3.0);
/// assert_eq!(percentile_sorted(&data, 25.0).unwrap(), 2.0);
/// ```
pub fn percentile_sorted(sorted: &[f64], q: f64) -> Result<f64> {
    if sorted.is_empty() {
        return Err(Error::InvalidInput(
            "Cannot take a percentile of an empty sequence".to_string(),
        ));
    }
    if !(0.0..=100.0).contains(&q) {
        return Err(Error::InvalidParameter(format!(
            "Percentile {q} must be in [0, 100]"
        )));
    }

    let position = q / 100.0 * (sorted.len() - 1) as f64;
    let below = position.floor() as usize;
    let above = position.ceil() as usize;
    let fraction = position - below as f64;

    let low = sorted[below];
    let high = sorted[above];
    Ok(low + (high - low) * fraction)
}

/// Percentile of unsorted data, `q` on the 0-100 scale
///
/// Sorts a copy; the input is left untouched.
pub fn percentile(data: &[f64], q: f64) -> Result<f64> {
    percentile_sorted(&sorted(data), q)
}

/// Check that `value` lies strictly inside (0, 1)
pub fn validate_probability(name: &str, value: f64) -> Result<f64> {
    if value > 0.0 && value < 1.0 {
        Ok(value)
    } else {
        Err(Error::invalid_probability(name, value))
    }
}

/// Check sample length and finiteness
pub fn validate_sample(data: &[f64], min_len: usize) -> Result<()> {
    if data.len() < min_len {
        return Err(Error::InsufficientData {
            expected: min_len,
            actual: data.len(),
        });
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite("sample"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sorted_basic() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_sorted_with_nan() {
        let data = vec![3.0, f64::NAN, 1.0, 2.0];
        let sorted_data = sorted(&data);

        assert_eq!(&sorted_data[..3], &[1.0, 2.0, 3.0]);
        assert!(sorted_data[3].is_nan());
    }

    #[test]
    fn test_sorted_preserves_original() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        let original = data.clone();
        let _ = sorted(&data);
        assert_eq!(data, original);
    }

    #[test]
    fn test_mean_and_std_dev() {
        let data = [10.0, 12.0, 11.0, 13.0, 9.0, 14.0, 10.0, 12.0, 11.0, 13.0];
        assert_relative_eq!(mean(&data), 11.5, epsilon = 1e-12);
        // Sum of squared deviations is 22.5 over 9 degrees of freedom
        assert_relative_eq!(std_dev(&data), 2.5f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_std_dev_constant_and_short() {
        assert_eq!(std_dev(&[5.0; 5]), 0.0);
        assert_eq!(std_dev(&[5.0]), 0.0);
        assert_eq!(std_dev(&[]), 0.0);
    }

    #[test]
    fn test_percentile_interpolation() {
        let data: Vec<f64> = (1..=10).map(|x| x as f64).collect();

        assert_eq!(percentile_sorted(&data, 0.0).unwrap(), 1.0);
        assert_eq!(percentile_sorted(&data, 100.0).unwrap(), 10.0);
        assert_relative_eq!(percentile_sorted(&data, 50.0).unwrap(), 5.5);
        // A fraction passed straight onto the 0-100 scale lands next to the minimum
        assert_relative_eq!(
            percentile_sorted(&data, 0.025).unwrap(),
            1.00225,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_percentile_single_value() {
        assert_eq!(percentile_sorted(&[7.0], 0.0).unwrap(), 7.0);
        assert_eq!(percentile_sorted(&[7.0], 47.5).unwrap(), 7.0);
    }

    #[test]
    fn test_percentile_unsorted_input() {
        let data = [5.0, 1.0, 4.0, 2.0, 3.0];
        assert_eq!(percentile(&data, 25.0).unwrap(), 2.0);
        assert_eq!(data, [5.0, 1.0, 4.0, 2.0, 3.0]);
    }

    #[test]
    fn test_percentile_errors() {
        assert!(matches!(
            percentile_sorted(&[], 50.0),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            percentile_sorted(&[1.0, 2.0], 100.5),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            percentile_sorted(&[1.0, 2.0], -1.0),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_validate_probability() {
        assert_eq!(validate_probability("proportion", 0.9).unwrap(), 0.9);
        for bad in [0.0, 1.0, -0.1, 1.1, f64::NAN] {
            assert!(validate_probability("proportion", bad).is_err());
        }
    }

    #[test]
    fn test_validate_sample() {
        assert!(validate_sample(&[1.0, 2.0], 2).is_ok());
        assert_eq!(
            validate_sample(&[1.0], 2),
            Err(Error::InsufficientData {
                expected: 2,
                actual: 1
            })
        );
        assert!(matches!(
            validate_sample(&[1.0, f64::INFINITY], 2),
            Err(Error::InvalidInput(_))
        ));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Property: a percentile always lies between the sample extremes
            #[test]
            fn prop_percentile_within_range(
                data in prop::collection::vec(-1e6f64..1e6, 1..200),
                q in 0.0f64..=100.0
            ) {
                let value = percentile(&data, q).unwrap();
                let sorted_data = sorted(&data);
                prop_assert!(value >= sorted_data[0]);
                prop_assert!(value <= sorted_data[sorted_data.len() - 1]);
            }

            // Property: percentiles never decrease as q grows
            #[test]
            fn prop_percentile_monotone(
                data in prop::collection::vec(-1e3f64..1e3, 1..100),
                a in 0.0f64..=100.0,
                b in 0.0f64..=100.0
            ) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                let sorted_data = sorted(&data);
                let p_lo = percentile_sorted(&sorted_data, lo).unwrap();
                let p_hi = percentile_sorted(&sorted_data, hi).unwrap();
                prop_assert!(p_lo <= p_hi + 1e-9);
            }
        }
    }
}
