//! Differencing and its inverse.

use super::stationarity::{adf_test_with_config, AdfConfig};
use crate::error::{Result, TsError};
use crate::stats::descriptive::is_constant;

/// Apply the first difference `d` times.
///
/// The result has `n - d` values; `d == 0` returns a copy.
pub fn difference(series: &[f64], d: usize) -> Result<Vec<f64>> {
    if series.is_empty() {
        return Err(TsError::EmptyInput);
    }
    if series.len() <= d {
        return Err(TsError::InsufficientData {
            needed: d + 1,
            got: series.len(),
        });
    }

    let mut current = series.to_vec();
    for _ in 0..d {
        current = current.windows(2).map(|w| w[1] - w[0]).collect();
    }
    Ok(current)
}

/// Undo `d` rounds of differencing.
///
/// `original` supplies the starting values; only its first `d` entries are
/// read. The result has `diff.len() + d` values and its first `d` entries
/// equal `original[..d]`.
///
/// # Example
/// ```
/// use tslib::validation::{difference, integrate};
///
/// let x = vec![3.0, 5.0, 4.0, 8.0, 13.0];
/// let d2 = difference(&x, 2).unwrap();
/// assert_eq!(integrate(&d2, &x, 2).unwrap(), x);
/// ```
pub fn integrate(diff: &[f64], original: &[f64], d: usize) -> Result<Vec<f64>> {
    if original.len() < d {
        return Err(TsError::InsufficientData {
            needed: d,
            got: original.len(),
        });
    }

    // First value of each intermediate difference order 0..d.
    let mut heads = Vec::with_capacity(d);
    let mut level = original[..d].to_vec();
    for _ in 0..d {
        heads.push(level[0]);
        level = level.windows(2).map(|w| w[1] - w[0]).collect();
    }

    let mut current = diff.to_vec();
    for &head in heads.iter().rev() {
        let mut restored = Vec::with_capacity(current.len() + 1);
        restored.push(head);
        let mut acc = head;
        for delta in &current {
            acc += delta;
            restored.push(acc);
        }
        current = restored;
    }
    Ok(current)
}

/// Difference until the ADF test rejects a unit root, at most `max_d` times.
///
/// Returns the final series and the number of differences applied. A series
/// that becomes constant is treated as stationary. When `max_d` is reached
/// without rejection, the `max_d`-times differenced series is returned.
pub fn difference_until_stationary(
    series: &[f64],
    max_d: usize,
    config: &AdfConfig,
) -> Result<(Vec<f64>, usize)> {
    let mut current = series.to_vec();

    for d in 0..=max_d {
        if is_constant(&current) {
            log::debug!("differencing: constant after {d} differences");
            return Ok((current, d));
        }

        let result = adf_test_with_config(&current, config)?;
        if result.is_stationary || d == max_d {
            log::debug!(
                "differencing: stopped at d = {d}, statistic {}, stationary {}",
                result.statistic,
                result.is_stationary
            );
            return Ok((current, d));
        }
        current = result.first_difference().to_vec();
    }

    Ok((current, max_d))
}
