//! Autocovariance, autocorrelation and partial autocorrelation.
//!
//! Lagged covariances are normalised by `n` for every lag `k >= 1`, while lag
//! 0 is the sample variance (`n - 1`). Autocorrelations divide by that same
//! sample variance, so `acf[0] == 1` exactly.

use super::descriptive::{is_constant, mean, variance};
use crate::error::{Result, TsError};

/// Denominators smaller than this abort the Durbin-Levinson recursion.
const PACF_MIN_DENOMINATOR: f64 = 1e-10;

/// Returns the autocovariance at `lag`.
///
/// # Errors
/// * `EmptyInput` for an empty slice
/// * `InvalidLag` when `lag >= series.len()`
pub fn autocovariance(series: &[f64], lag: usize) -> Result<f64> {
    check_lag(series, lag)?;
    if lag == 0 {
        return variance(series);
    }
    let m = mean(series)?;
    Ok(lagged_cross_sum(series, m, lag) / series.len() as f64)
}

/// Returns the autocorrelation at `lag`.
///
/// A constant series has no defined correlation; it yields 0 for every
/// positive lag instead of dividing by zero.
pub fn autocorrelation(series: &[f64], lag: usize) -> Result<f64> {
    check_lag(series, lag)?;
    if lag == 0 {
        return Ok(1.0);
    }
    let var = variance(series)?;
    if var == 0.0 || is_constant(series) {
        return Ok(0.0);
    }
    Ok(autocovariance(series, lag)? / var)
}

/// Autocorrelations for lags `0..=max_lag`.
///
/// # Example
/// ```
/// use tslib::stats::acf;
///
/// let values: Vec<f64> = (0..20).map(|i| (i as f64 * 0.7).sin()).collect();
/// let r = acf(&values, 5).unwrap();
/// assert_eq!(r.len(), 6);
/// assert_eq!(r[0], 1.0);
/// ```
pub fn acf(series: &[f64], max_lag: usize) -> Result<Vec<f64>> {
    check_lag(series, max_lag)?;

    let mut values = vec![0.0; max_lag + 1];
    values[0] = 1.0;

    let var = variance(series)?;
    if var == 0.0 || is_constant(series) {
        return Ok(values);
    }

    let m = mean(series)?;
    let n = series.len() as f64;
    for (lag, value) in values.iter_mut().enumerate().skip(1) {
        *value = lagged_cross_sum(series, m, lag) / n / var;
    }
    Ok(values)
}

/// Partial autocorrelations for lags `0..=max_lag`.
///
/// Computed from [`acf`] with the Durbin-Levinson recursion.
///
/// # Errors
/// `NumericallyUnstable` when the recursion denominator collapses, which
/// happens for near-singular autocorrelation structure.
pub fn pacf(series: &[f64], max_lag: usize) -> Result<Vec<f64>> {
    let r = acf(series, max_lag)?;
    pacf_from_acf(&r)
}

/// Durbin-Levinson recursion over an autocorrelation vector.
///
/// `acf[0]` is taken to be 1. Returns a vector of the same length whose entry
/// `k` is the last coefficient of the order-`k` autoregression.
pub fn pacf_from_acf(acf: &[f64]) -> Result<Vec<f64>> {
    if acf.is_empty() {
        return Err(TsError::EmptyInput);
    }

    let max_lag = acf.len() - 1;
    let mut pacf = vec![0.0; max_lag + 1];
    pacf[0] = 1.0;
    if max_lag == 0 {
        return Ok(pacf);
    }

    // phi[j] holds the order-(k-1) coefficients, 1-indexed.
    let mut phi = vec![0.0; max_lag + 1];
    let mut next = vec![0.0; max_lag + 1];
    phi[1] = acf[1];
    pacf[1] = acf[1];

    for k in 2..=max_lag {
        let mut num = acf[k];
        let mut den = 1.0;
        for j in 1..k {
            num -= phi[j] * acf[k - j];
            den -= phi[j] * acf[j];
        }

        if den.abs() < PACF_MIN_DENOMINATOR {
            log::warn!("pacf: denominator {den:e} at lag {k}, autocorrelations near singular");
            return Err(TsError::NumericallyUnstable(format!(
                "pacf denominator vanished at lag {k}"
            )));
        }

        let phi_kk = num / den;
        for j in 1..k {
            next[j] = phi[j] - phi_kk * phi[k - j];
        }
        next[k] = phi_kk;
        phi[1..=k].copy_from_slice(&next[1..=k]);
        pacf[k] = phi_kk;
    }

    Ok(pacf)
}

fn check_lag(series: &[f64], lag: usize) -> Result<()> {
    if series.is_empty() {
        return Err(TsError::EmptyInput);
    }
    if lag >= series.len() {
        return Err(TsError::InvalidLag {
            lag,
            len: series.len(),
        });
    }
    Ok(())
}

fn lagged_cross_sum(series: &[f64], m: f64, lag: usize) -> f64 {
    series
        .iter()
        .zip(&series[lag..])
        .map(|(a, b)| (a - m) * (b - m))
        .sum()
}
