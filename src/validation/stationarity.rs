//! Augmented Dickey-Fuller test for a unit root.
//!
//! The regression is run on the first difference with a lagged level, an
//! intercept, a linear trend and `lag` lagged differences:
//!
//! ```text
//! Δx[t] = β₀·x[t-1] + β₁ + β₂·t + Σ γⱼ·Δx[t-j] + ε[t]
//! ```
//!
//! The statistic is the t-ratio of `β₀`, fitted by ridge regression with a
//! small penalty. A statistic below the critical value rejects the unit root
//! and the series is reported stationary.

use nalgebra::{DMatrix, DVector};

use crate::core::validate_values;
use crate::error::{Result, TsError};
use crate::regression::RidgeRegression;
use crate::stats::descriptive::is_constant;

/// Relative residual energy below which the fit is considered exact.
const PERFECT_FIT_TOLERANCE: f64 = 1e-9;

/// Settings for [`adf_test_with_config`].
#[derive(Debug, Clone, PartialEq)]
pub struct AdfConfig {
    /// Number of lagged differences. `None` uses `floor(cbrt(n - 1))`, at least 1.
    pub lag: Option<usize>,
    /// Ridge penalty for the test regression (default: 1e-4).
    pub penalty: f64,
    /// Statistic threshold for rejecting the unit root (default: -3.45).
    pub critical_value: f64,
}

impl Default for AdfConfig {
    fn default() -> Self {
        Self {
            lag: None,
            penalty: 1e-4,
            critical_value: -3.45,
        }
    }
}

impl AdfConfig {
    /// Use a fixed lag order.
    pub fn with_lag(mut self, lag: usize) -> Self {
        self.lag = Some(lag);
        self
    }

    /// Set the ridge penalty.
    pub fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }

    /// Set the critical value.
    pub fn with_critical_value(mut self, critical_value: f64) -> Self {
        self.critical_value = critical_value;
        self
    }
}

/// Result of an ADF test.
#[derive(Debug, Clone, PartialEq)]
pub struct AdfResult {
    /// t-ratio of the lagged-level coefficient. NaN when the regression is
    /// degenerate.
    pub statistic: f64,
    /// Number of lagged differences used.
    pub lag: usize,
    /// Whether the unit root was rejected.
    pub is_stationary: bool,
    /// Threshold the statistic was compared against.
    pub critical_value: f64,
    /// First difference aligned with the input: entry 0 is 0, entry `i` is
    /// `x[i] - x[i-1]`.
    pub zero_padded_diff: Vec<f64>,
}

impl AdfResult {
    /// Negation of [`AdfResult::is_stationary`].
    pub fn needs_differencing(&self) -> bool {
        !self.is_stationary
    }

    /// The first difference without the leading zero.
    pub fn first_difference(&self) -> &[f64] {
        &self.zero_padded_diff[1..]
    }
}

/// Default lag order `floor(cbrt(n - 1))`, never below 1.
pub fn default_lag(n: usize) -> usize {
    let cube_root = (n.saturating_sub(1) as f64).cbrt();
    ((cube_root + 1e-9).floor() as usize).max(1)
}

/// Run the ADF test with the default penalty and critical value.
///
/// # Example
/// ```
/// use tslib::validation::adf_test;
///
/// let trend: Vec<f64> = (0..100).map(|i| i as f64).collect();
/// let result = adf_test(&trend, None).unwrap();
/// assert!(!result.is_stationary);
/// assert_eq!(result.lag, 4);
/// ```
pub fn adf_test(series: &[f64], lag: Option<usize>) -> Result<AdfResult> {
    let config = AdfConfig {
        lag,
        ..AdfConfig::default()
    };
    adf_test_with_config(series, &config)
}

/// Run the ADF test.
///
/// # Errors
/// * `EmptyInput` / `NonFiniteInput` for invalid data
/// * `InvalidParameter` for a zero lag
/// * `InsufficientData` when `n < 2·lag + 5` (the regression needs more rows
///   than its `3 + lag` columns) or when the series is constant
pub fn adf_test_with_config(series: &[f64], config: &AdfConfig) -> Result<AdfResult> {
    validate_values(series)?;
    let n = series.len();

    let lag = match config.lag {
        Some(0) => {
            return Err(TsError::InvalidParameter(
                "ADF lag must be at least 1".into(),
            ))
        }
        Some(lag) => lag,
        None => default_lag(n),
    };

    let needed = 2 * lag + 5;
    if n < needed {
        return Err(TsError::InsufficientData { needed, got: n });
    }
    if is_constant(series) {
        return Err(TsError::InsufficientData { needed: 2, got: 1 });
    }

    let diff: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();
    let mut zero_padded_diff = Vec::with_capacity(n);
    zero_padded_diff.push(0.0);
    zero_padded_diff.extend_from_slice(&diff);

    let rows = n - lag - 1;
    let cols = 3 + lag;
    log::debug!("adf: n {n}, lag {lag}, design {rows}x{cols}, penalty {:e}", config.penalty);

    let design = DMatrix::from_fn(rows, cols, |i, j| match j {
        0 => series[lag + i],
        1 => 1.0,
        2 => (lag + 1 + i) as f64,
        _ => diff[lag + 2 + i - j],
    });
    let response = DVector::from_fn(rows, |i, _| diff[lag + i]);
    let response_energy = response.norm_squared();

    let fit = RidgeRegression::new(design, response)?.fit(config.penalty)?;

    let rss = fit.rss();
    let statistic = if rss <= PERFECT_FIT_TOLERANCE * response_energy {
        log::warn!("adf: deterministic terms explain the differences exactly (rss {rss:e}); statistic undefined");
        f64::NAN
    } else {
        match fit.t_statistic(0) {
            Some(t) if t.is_finite() => t,
            _ => f64::NAN,
        }
    };

    // NaN compares false, leaving the unit root in place.
    let is_stationary = statistic < config.critical_value;

    Ok(AdfResult {
        statistic,
        lag,
        is_stationary,
        critical_value: config.critical_value,
        zero_padded_diff,
    })
}
