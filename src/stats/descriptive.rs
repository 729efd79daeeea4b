//! Descriptive statistics over a slice of observations.

use crate::error::{Result, TsError};

/// Arithmetic mean.
///
/// # Errors
/// `EmptyInput` if the slice is empty.
pub fn mean(series: &[f64]) -> Result<f64> {
    if series.is_empty() {
        return Err(TsError::EmptyInput);
    }
    Ok(series.iter().sum::<f64>() / series.len() as f64)
}

/// Sample variance with `n - 1` denominator.
///
/// A single observation has variance 0 by convention.
pub fn variance(series: &[f64]) -> Result<f64> {
    let m = mean(series)?;
    let n = series.len();
    if n == 1 {
        return Ok(0.0);
    }
    let sum_sq: f64 = series.iter().map(|x| (x - m).powi(2)).sum();
    Ok(sum_sq / (n - 1) as f64)
}

/// Sample standard deviation.
pub fn std_dev(series: &[f64]) -> Result<f64> {
    variance(series).map(f64::sqrt)
}

/// Index of the smallest value (first occurrence on ties).
pub fn argmin(series: &[f64]) -> Result<usize> {
    extreme_index(series, |candidate, best| candidate < best)
}

/// Index of the largest value (first occurrence on ties).
pub fn argmax(series: &[f64]) -> Result<usize> {
    extreme_index(series, |candidate, best| candidate > best)
}

/// Smallest value.
pub fn min(series: &[f64]) -> Result<f64> {
    argmin(series).map(|i| series[i])
}

/// Largest value.
pub fn max(series: &[f64]) -> Result<f64> {
    argmax(series).map(|i| series[i])
}

fn extreme_index<F>(series: &[f64], better: F) -> Result<usize>
where
    F: Fn(f64, f64) -> bool,
{
    if series.is_empty() {
        return Err(TsError::EmptyInput);
    }

    let mut best = 0;
    for (i, &x) in series.iter().enumerate().skip(1) {
        if better(x, series[best]) {
            best = i;
        }
    }
    Ok(best)
}

/// True when every observation equals the first one exactly.
pub(crate) fn is_constant(series: &[f64]) -> bool {
    series.first().map_or(true, |&first| series.iter().all(|&x| x == first))
}
