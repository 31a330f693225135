//! Mathematical utilities for tolerance interval estimation
//!
//! Quantile functions of the distributions the estimators need. CDFs come
//! from `statrs`; the inversions are done here so that their precision does
//! not depend on the generic bisection `statrs` ships as a default.

/// Distribution-related mathematical functions
pub mod distributions {
    /// Standard normal distribution utilities
    pub mod normal {
        use crate::{utils::validate_probability, Error, Result};
        use statrs::distribution::{ContinuousCDF, Normal};

        /// Quantile function (inverse CDF) of the standard normal distribution
        pub fn quantile(p: f64) -> Result<f64> {
            validate_probability("probability", p)?;
            let normal = Normal::new(0.0, 1.0).map_err(|e| {
                Error::Computation(format!("Failed to create normal distribution: {e}"))
            })?;
            Ok(normal.inverse_cdf(p))
        }

        /// CDF of the standard normal distribution
        pub fn cdf(x: f64) -> f64 {
            0.5 * statrs::function::erf::erfc(-x / std::f64::consts::SQRT_2)
        }

    }

    /// Chi-square distribution utilities
    pub mod chi_squared {
        use crate::{utils::validate_probability, Error, Result};
        use statrs::distribution::{ChiSquared, ContinuousCDF};

        const MAX_BRACKET_DOUBLINGS: usize = 1024;
        const MAX_BISECTIONS: usize = 200;
        const RELATIVE_TOLERANCE: f64 = 1e-14;

        fn distribution(df: f64) -> Result<ChiSquared> {
            if !(df > 0.0 && df.is_finite()) {
                return Err(Error::InvalidParameter(format!(
                    "Degrees of freedom {df} must be positive and finite"
                )));
            }
            ChiSquared::new(df).map_err(|e| {
                Error::Computation(format!("Failed to create chi-square distribution: {e}"))
            })
        }

        /// CDF of the chi-square distribution with `df` degrees of freedom
        pub fn cdf(x: f64, df: f64) -> Result<f64> {
            Ok(distribution(df)?.cdf(x))
        }

        /// Quantile function (inverse CDF) of the chi-square distribution
        ///
        /// Brackets the root by doubling, then bisects to near machine precision.
        pub fn quantile(p: f64, df: f64) -> Result<f64> {
            validate_probability("probability", p)?;
            let chi2 = distribution(df)?;

            let mut low = 0.0;
            let mut high = df.max(1.0);
            let mut doublings = 0;
            while chi2.cdf(high) < p {
                low = high;
                high *= 2.0;
                doublings += 1;
                if doublings > MAX_BRACKET_DOUBLINGS || !high.is_finite() {
                    return Err(Error::Computation(format!(
                        "Failed to bracket chi-square quantile for p = {p}, df = {df}"
                    )));
                }
            }

            for _ in 0..MAX_BISECTIONS {
                let mid = 0.5 * (low + high);
                if chi2.cdf(mid) < p {
                    low = mid;
                } else {
                    high = mid;
                }
                if high - low <= RELATIVE_TOLERANCE * high {
                    break;
                }
            }

            Ok(0.5 * (low + high))
        }

        #[cfg(test)]
        mod tests {
            use super::*;
            use approx::assert_relative_eq;

            #[test]
            fn test_chi_squared_table_values() {
                // Standard table values
                assert_relative_eq!(quantile(0.95, 1.0).unwrap(), 3.841458820694124, max_relative = 1e-9);
                assert_relative_eq!(quantile(0.95, 9.0).unwrap(), 16.918977604620448, max_relative = 1e-9);
                assert_relative_eq!(quantile(0.05, 9.0).unwrap(), 3.325112843066815, max_relative = 1e-9);
                assert_relative_eq!(quantile(0.5, 9.0).unwrap(), 8.342832692252954, max_relative = 1e-9);
                assert_relative_eq!(quantile(0.99, 30.0).unwrap(), 50.89218131151707, max_relative = 1e-9);
            }

            #[test]
            fn test_quantile_is_increasing() {
                let mut previous = 0.0;
                for i in 1..20 {
                    let q = quantile(i as f64 / 20.0, 4.0).unwrap();
                    assert!(q > previous);
                    previous = q;
                }
            }

            #[test]
            fn test_cdf_inverts_quantile() {
                for &df in &[1.0, 2.0, 5.0, 19.0, 99.0] {
                    for &p in &[0.001, 0.05, 0.5, 0.95, 0.999] {
                        let x = quantile(p, df).unwrap();
                        assert_relative_eq!(cdf(x, df).unwrap(), p, max_relative = 1e-10);
                    }
                }
            }

            #[test]
            fn test_invalid_arguments() {
                assert!(quantile(0.0, 3.0).is_err());
                assert!(quantile(1.0, 3.0).is_err());
                assert!(quantile(0.5, 0.0).is_err());
                assert!(quantile(0.5, f64::NAN).is_err());
            }
        }
    }

    /// Binomial distribution utilities
    pub mod binomial {
        use crate::{utils::validate_probability, Error, Result};
        use statrs::distribution::{Binomial, DiscreteCDF};

        fn distribution(n: u64, p: f64) -> Result<Binomial> {
            validate_probability("success probability", p)?;
            Binomial::new(p, n).map_err(|e| {
                Error::Computation(format!("Failed to create binomial distribution: {e}"))
            })
        }

        /// `P(X <= k)` for `X ~ Binomial(n, p)`
        pub fn cdf(k: u64, n: u64, p: f64) -> Result<f64> {
            let binomial = distribution(n, p)?;
            if k >= n {
                return Ok(1.0);
            }
            Ok(binomial.cdf(k))
        }

        /// Smallest `m` in `[0, n]` with `P(X <= m) >= q` for `X ~ Binomial(n, p)`
        ///
        /// The CDF is monotone in `m`, so the search is a binary search.
        pub fn quantile(q: f64, n: u64, p: f64) -> Result<u64> {
            validate_probability("probability", q)?;
            let binomial = distribution(n, p)?;

            let mut low = 0u64;
            let mut high = n;
            while low < high {
                let mid = low + (high - low) / 2;
                if binomial.cdf(mid) >= q {
                    high = mid;
                } else {
                    low = mid + 1;
                }
            }
            Ok(low)
        }

        #[cfg(test)]
        mod tests {
            use super::*;
            use approx::assert_relative_eq;

            #[test]
            fn test_binomial_cdf() {
                // P(X <= 19) for Binomial(20, 0.995) is 1 - 0.995^20
                let expected = 1.0 - 0.995f64.powi(20);
                assert_relative_eq!(cdf(19, 20, 0.995).unwrap(), expected, max_relative = 1e-10);
                assert_eq!(cdf(20, 20, 0.995).unwrap(), 1.0);
                // Binomial(4, 0.5): P(X <= 1) = 5/16
                assert_relative_eq!(cdf(1, 4, 0.5).unwrap(), 5.0 / 16.0, max_relative = 1e-10);
            }

            #[test]
            fn test_binomial_cdf_validates_probability_at_upper_tail() {
                assert!(matches!(cdf(5, 5, f64::NAN), Err(Error::InvalidParameter(_))));
                assert!(matches!(cdf(9, 5, 1.5), Err(Error::InvalidParameter(_))));
                assert!(cdf(5, 5, 0.3).is_ok());
            }

            #[test]
            fn test_binomial_quantile() {
                // Binomial(20, 0.8): P(X <= 17) ~ 0.794, P(X <= 18) ~ 0.931
                assert_eq!(quantile(0.9, 20, 0.8).unwrap(), 18);
                // Binomial(20, 0.995): P(X <= 19) ~ 0.095, so the 0.9 quantile is n
                assert_eq!(quantile(0.9, 20, 0.995).unwrap(), 20);
                // Binomial(4, 0.5): CDF is 1/16, 5/16, 11/16, 15/16, 1
                assert_eq!(quantile(0.5, 4, 0.5).unwrap(), 2);
                assert_eq!(quantile(0.05, 4, 0.5).unwrap(), 0);
                assert_eq!(quantile(0.95, 4, 0.5).unwrap(), 4);
            }

            #[test]
            fn test_quantile_matches_linear_scan() {
                for &(n, p) in &[(10u64, 0.3), (25, 0.9), (50, 0.5), (7, 0.01)] {
                    for &q in &[0.01, 0.2, 0.5, 0.8, 0.99] {
                        let expected = (0..=n)
                            .find(|&m| cdf(m, n, p).unwrap() >= q)
                            .unwrap();
                        assert_eq!(quantile(q, n, p).unwrap(), expected, "n={n}, p={p}, q={q}");
                    }
                }
            }

            #[test]
            fn test_invalid_arguments() {
                assert!(quantile(0.9, 10, 0.0).is_err());
                assert!(quantile(0.9, 10, 1.0).is_err());
                assert!(quantile(1.0, 10, 0.5).is_err());
            }
        }
    }
}
