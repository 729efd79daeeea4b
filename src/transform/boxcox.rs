//! Box-Cox power transformation.
//!
//! Transforms positive data to be more normally distributed, with lambda
//! chosen by maximising the profile log-likelihood or inspected through
//! Guerrero's coefficient of variation.

use super::power::require_positive;
use crate::error::{Result, TsError};
use crate::stats::descriptive::{is_constant, mean, std_dev};
use crate::utils::optimization::{brent_minimize, BrentConfig};

/// Default lambda search interval.
pub const DEFAULT_LAMBDA_BOUNDS: (f64, f64) = (-1.0, 2.0);

/// Lambdas closer to zero than this use the logarithm.
const LOG_THRESHOLD: f64 = 1e-10;

/// Result of Box-Cox transformation.
#[derive(Debug, Clone)]
pub struct BoxCoxResult {
    /// Transformed data
    pub data: Vec<f64>,
    /// Lambda parameter used
    pub lambda: f64,
}

impl BoxCoxResult {
    /// Inverse transform to recover original scale.
    pub fn inverse(&self) -> Vec<f64> {
        inv_boxcox(&self.data, self.lambda)
    }
}

/// Apply Box-Cox transformation with a given lambda.
///
/// For lambda != 0: y = (x^lambda - 1) / lambda
/// For lambda == 0: y = ln(x)
///
/// # Errors
/// `InvalidParameter` if any value is not strictly positive.
pub fn boxcox(series: &[f64], lambda: f64) -> Result<Vec<f64>> {
    require_positive(series, "boxcox")?;
    Ok(transform(series, lambda))
}

fn transform(series: &[f64], lambda: f64) -> Vec<f64> {
    series
        .iter()
        .map(|&x| {
            if lambda.abs() < LOG_THRESHOLD {
                x.ln()
            } else {
                (x.powf(lambda) - 1.0) / lambda
            }
        })
        .collect()
}

/// Inverse Box-Cox transformation.
///
/// For lambda != 0: x = (lambda * y + 1)^(1/lambda)
/// For lambda == 0: x = exp(y)
///
/// Values outside the transform's range come back as NaN.
pub fn inv_boxcox(transformed: &[f64], lambda: f64) -> Vec<f64> {
    transformed
        .iter()
        .map(|&y| {
            if lambda.abs() < LOG_THRESHOLD {
                y.exp()
            } else {
                let val = lambda * y + 1.0;
                if val <= 0.0 {
                    f64::NAN
                } else {
                    val.powf(1.0 / lambda)
                }
            }
        })
        .collect()
}

/// Find the Box-Cox lambda in `[lower, upper]` with Brent's method.
///
/// Minimises the negative profile log-likelihood per observation,
/// `0.5 × ln(σ²_λ) - (λ - 1) × mean(ln x)`, where `σ²_λ` is the population
/// variance of the transformed data.
///
/// # Errors
/// * `InvalidParameter` for non-positive data or an empty interval
/// * `InsufficientData` for fewer than two observations
/// * `NumericallyUnstable` for a constant series
pub fn boxcox_lambda(series: &[f64], lower: f64, upper: f64) -> Result<f64> {
    require_positive(series, "boxcox")?;
    if series.len() < 2 {
        return Err(TsError::InsufficientData {
            needed: 2,
            got: series.len(),
        });
    }
    if is_constant(series) {
        return Err(TsError::NumericallyUnstable(
            "constant series has no Box-Cox likelihood".into(),
        ));
    }

    let mean_log = series.iter().map(|x| x.ln()).sum::<f64>() / series.len() as f64;
    let objective = |lambda: f64| {
        let variance = population_variance(&transform(series, lambda));
        if variance <= 0.0 {
            return f64::INFINITY;
        }
        0.5 * variance.ln() - (lambda - 1.0) * mean_log
    };

    let result = brent_minimize(objective, lower, upper, &BrentConfig::default())?;
    log::debug!(
        "boxcox lambda: {:.6} in [{lower}, {upper}] after {} iterations",
        result.optimal_point,
        result.iterations
    );
    Ok(result.optimal_point)
}

/// Apply Box-Cox transformation with automatic lambda selection over
/// [`DEFAULT_LAMBDA_BOUNDS`].
pub fn boxcox_auto(series: &[f64]) -> Result<BoxCoxResult> {
    let (lower, upper) = DEFAULT_LAMBDA_BOUNDS;
    let lambda = boxcox_lambda(series, lower, upper)?;
    let data = boxcox(series, lambda)?;
    Ok(BoxCoxResult { data, lambda })
}

/// Guerrero's coefficient of variation for a candidate lambda.
///
/// The series is split into consecutive pairs (a trailing single value forms
/// its own group). For each group the ratio `std / mean^(1 - λ)` is taken;
/// the result is the coefficient of variation of those ratios. Lambdas that
/// stabilise the variance give small values.
pub fn guerrero_cv(series: &[f64], lambda: f64) -> Result<f64> {
    require_positive(series, "guerrero")?;

    let ratios = series
        .chunks(2)
        .map(|group| Ok(std_dev(group)? / mean(group)?.powf(1.0 - lambda)))
        .collect::<Result<Vec<f64>>>()?;

    let ratio_mean = mean(&ratios)?;
    if ratio_mean == 0.0 {
        return Err(TsError::NumericallyUnstable(
            "every group has zero spread".into(),
        ));
    }
    Ok(std_dev(&ratios)? / ratio_mean)
}

fn population_variance(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let m = values.iter().sum::<f64>() / n;
    values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / n
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SYMMETRIC: [f64; 13] = [
        -2.0, -1.5, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0, -0.25, 0.25, -0.75, 0.75,
    ];

    // ==================== boxcox ====================

    #[test]
    fn boxcox_lambda_1() {
        // Lambda = 1: y = x - 1
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = boxcox(&series, 1.0).unwrap();

        for (i, &x) in series.iter().enumerate() {
            assert_relative_eq!(result[i], x - 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn boxcox_lambda_0() {
        // Lambda = 0: y = ln(x)
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = boxcox(&series, 0.0).unwrap();

        for (i, &x) in series.iter().enumerate() {
            assert_relative_eq!(result[i], x.ln(), epsilon = 1e-10);
        }
    }

    #[test]
    fn boxcox_lambda_2() {
        // Lambda = 2: y = (x^2 - 1) / 2
        let result = boxcox(&[1.0, 2.0, 3.0], 2.0).unwrap();

        assert_relative_eq!(result[0], 0.0, epsilon = 1e-10);
        assert_relative_eq!(result[1], 1.5, epsilon = 1e-10);
        assert_relative_eq!(result[2], 4.0, epsilon = 1e-10);
    }

    #[test]
    fn boxcox_rejects_non_positive() {
        assert!(matches!(
            boxcox(&[-1.0, 1.0, 2.0], 1.0),
            Err(TsError::InvalidParameter(_))
        ));
        assert!(boxcox(&[0.0, 1.0], 0.5).is_err());
        assert_eq!(boxcox(&[], 1.0).unwrap_err(), TsError::EmptyInput);
    }

    // ==================== inv_boxcox ====================

    #[test]
    fn inv_boxcox_recovers_input() {
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        for lambda in [0.0, 0.5, 1.0, -0.7] {
            let transformed = boxcox(&series, lambda).unwrap();
            let recovered = inv_boxcox(&transformed, lambda);
            for (orig, rec) in series.iter().zip(recovered.iter()) {
                assert_relative_eq!(orig, rec, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn inv_boxcox_out_of_range_is_nan() {
        // lambda * y + 1 <= 0
        assert!(inv_boxcox(&[-3.0], 0.5)[0].is_nan());
    }

    // ==================== boxcox_lambda ====================

    #[test]
    fn boxcox_lambda_log_normal_data() {
        let series: Vec<f64> = SYMMETRIC.iter().map(|s| s.exp()).collect();
        let lambda = boxcox_lambda(&series, -1.0, 2.0).unwrap();
        assert!(lambda.abs() < 0.02, "expected lambda near 0, got {}", lambda);
    }

    #[test]
    fn boxcox_lambda_squared_data() {
        let series: Vec<f64> = SYMMETRIC.iter().map(|s| (s + 3.0).powi(2)).collect();
        let lambda = boxcox_lambda(&series, -1.0, 2.0).unwrap();
        assert!((lambda - 0.43).abs() < 0.02, "got {}", lambda);
    }

    #[test]
    fn boxcox_lambda_exponential_data() {
        let series: Vec<f64> = (1..=10).map(|i| (i as f64).exp()).collect();
        let lambda = boxcox_lambda(&series, -1.0, 2.0).unwrap();
        assert!(
            lambda.abs() < 0.5,
            "Expected lambda near 0 for exponential data, got {}",
            lambda
        );
    }

    #[test]
    fn boxcox_lambda_stays_in_bounds() {
        let series: Vec<f64> = SYMMETRIC.iter().map(|s| s.exp()).collect();
        let lambda = boxcox_lambda(&series, 0.5, 1.5).unwrap();
        assert!((0.5..=1.5).contains(&lambda));
        assert!(lambda < 0.51);
    }

    #[test]
    fn boxcox_lambda_rejects_degenerate_input() {
        assert!(matches!(
            boxcox_lambda(&[3.0], -1.0, 2.0),
            Err(TsError::InsufficientData { .. })
        ));
        assert!(matches!(
            boxcox_lambda(&[3.0, 3.0, 3.0], -1.0, 2.0),
            Err(TsError::NumericallyUnstable(_))
        ));
        assert!(matches!(
            boxcox_lambda(&[1.0, 2.0], 2.0, -1.0),
            Err(TsError::InvalidParameter(_))
        ));
    }

    // ==================== boxcox_auto ====================

    #[test]
    fn boxcox_auto_inverse() {
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = boxcox_auto(&series).unwrap();
        assert!((-1.0..=2.0).contains(&result.lambda));

        let recovered = result.inverse();
        for (orig, rec) in series.iter().zip(recovered.iter()) {
            assert_relative_eq!(orig, rec, epsilon = 1e-6);
        }
    }

    // ==================== guerrero_cv ====================

    #[test]
    fn guerrero_known_value() {
        // Pairs (1, 3) and (2, 6): std sqrt(2), sqrt(8); with lambda 1 the
        // ratios are the stds, whose cv is 1 / (1.5 sqrt(2)).
        let cv = guerrero_cv(&[1.0, 3.0, 2.0, 6.0], 1.0).unwrap();
        assert_relative_eq!(cv, 1.0 / (1.5 * 2.0_f64.sqrt()), epsilon = 1e-12);
    }

    #[test]
    fn guerrero_log_stabilises_proportional_spread() {
        let cv = guerrero_cv(&[1.0, 3.0, 2.0, 6.0], 0.0).unwrap();
        assert_relative_eq!(cv, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn guerrero_odd_length_and_errors() {
        assert!(guerrero_cv(&[1.0, 3.0, 2.0, 6.0, 4.0], 1.0).unwrap().is_finite());
        assert!(guerrero_cv(&[1.0, -3.0], 1.0).is_err());
        assert!(matches!(
            guerrero_cv(&[2.0, 2.0, 5.0, 5.0], 0.5),
            Err(TsError::NumericallyUnstable(_))
        ));
    }
}
