//! Moving averages.
//!
//! Trailing-window smoothers. The aligned variants return one value per input
//! point, NaN until the first window fills.

use crate::error::{Result, TsError};

/// Simple moving average over a trailing window of `period` points.
///
/// # Arguments
/// * `series` - Input time series
/// * `period` - Window size, in `1..=series.len()`
pub fn simple_moving_average(series: &[f64], period: usize) -> Result<Vec<f64>> {
    check_window(series, period, "period")?;

    let n = series.len();
    let mut result = vec![f64::NAN; n];
    let mut sum: f64 = series[..period - 1].iter().sum();

    for i in (period - 1)..n {
        sum += series[i];
        result[i] = sum / period as f64;
        sum -= series[i + 1 - period];
    }

    Ok(result)
}

/// Weighted moving average with linear weights `1..=period`.
///
/// The newest observation in the window carries weight `period`; the sum is
/// normalised by `period × (period + 1) / 2`.
pub fn weighted_moving_average(series: &[f64], period: usize) -> Result<Vec<f64>> {
    check_window(series, period, "period")?;

    let n = series.len();
    let norm = (period * (period + 1)) as f64 / 2.0;
    let mut result = vec![f64::NAN; n];

    for i in (period - 1)..n {
        let window = &series[i + 1 - period..=i];
        let weighted: f64 = window
            .iter()
            .enumerate()
            .map(|(j, &x)| (j + 1) as f64 * x)
            .sum();
        result[i] = weighted / norm;
    }

    Ok(result)
}

/// Cumulative (expanding) moving average: the mean of all values so far.
pub fn cumulative_moving_average(series: &[f64]) -> Result<Vec<f64>> {
    if series.is_empty() {
        return Err(TsError::EmptyInput);
    }

    let mut result = Vec::with_capacity(series.len());
    let mut avg = 0.0;
    for (i, &x) in series.iter().enumerate() {
        avg += (x - avg) / (i + 1) as f64;
        result.push(avg);
    }

    Ok(result)
}

/// Exponential moving average, seeded with the first value.
///
/// `ema_t = ema_{t-1} + α × (x_t - ema_{t-1})` with `α` in (0, 1].
pub fn exponential_moving_average(series: &[f64], alpha: f64) -> Result<Vec<f64>> {
    if series.is_empty() {
        return Err(TsError::EmptyInput);
    }
    if alpha.is_nan() || alpha <= 0.0 || alpha > 1.0 {
        return Err(TsError::InvalidParameter(format!(
            "alpha must be in (0, 1], got {alpha}"
        )));
    }

    let mut result = Vec::with_capacity(series.len());
    let mut ema = series[0];
    result.push(ema);

    for &x in series.iter().skip(1) {
        ema += alpha * (x - ema);
        result.push(ema);
    }

    Ok(result)
}

/// Means of every full trailing window; `series.len() - window + 1` values.
pub fn rolling_average(series: &[f64], window: usize) -> Result<Vec<f64>> {
    check_window(series, window, "window")?;
    Ok(series
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect())
}

fn check_window(series: &[f64], window: usize, what: &str) -> Result<()> {
    if series.is_empty() {
        return Err(TsError::EmptyInput);
    }
    if window == 0 || window > series.len() {
        return Err(TsError::InvalidParameter(format!(
            "{what} must be in 1..={}, got {window}",
            series.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==================== simple_moving_average ====================

    #[test]
    fn sma_basic() {
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = simple_moving_average(&series, 3).unwrap();

        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_relative_eq!(result[2], 2.0, epsilon = 1e-10); // (1+2+3)/3
        assert_relative_eq!(result[3], 3.0, epsilon = 1e-10); // (2+3+4)/3
        assert_relative_eq!(result[4], 4.0, epsilon = 1e-10); // (3+4+5)/3
    }

    #[test]
    fn sma_period_one_is_identity() {
        let series = vec![4.0, -1.0, 2.5];
        assert_eq!(simple_moving_average(&series, 1).unwrap(), series);
    }

    #[test]
    fn sma_invalid_period() {
        let series = vec![1.0, 2.0];
        assert!(matches!(
            simple_moving_average(&series, 0),
            Err(TsError::InvalidParameter(_))
        ));
        assert!(matches!(
            simple_moving_average(&series, 3),
            Err(TsError::InvalidParameter(_))
        ));
        assert_eq!(simple_moving_average(&[], 1).unwrap_err(), TsError::EmptyInput);
    }

    // ==================== weighted_moving_average ====================

    #[test]
    fn wma_newest_heaviest() {
        let series = vec![1.0, 2.0, 3.0, 4.0];
        let result = weighted_moving_average(&series, 3).unwrap();

        assert!(result[1].is_nan());
        // (1*1 + 2*2 + 3*3) / 6
        assert_relative_eq!(result[2], 14.0 / 6.0, epsilon = 1e-12);
        // (1*2 + 2*3 + 3*4) / 6
        assert_relative_eq!(result[3], 20.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn wma_constant_series() {
        let result = weighted_moving_average(&[7.0; 6], 4).unwrap();
        for &v in &result[3..] {
            assert_relative_eq!(v, 7.0, epsilon = 1e-12);
        }
    }

    // ==================== cumulative_moving_average ====================

    #[test]
    fn cma_running_mean() {
        let result = cumulative_moving_average(&[2.0, 4.0, 6.0, 8.0]).unwrap();
        assert_eq!(result, vec![2.0, 3.0, 4.0, 5.0]);
    }

    // ==================== exponential_moving_average ====================

    #[test]
    fn ema_basic() {
        let result = exponential_moving_average(&[10.0, 20.0, 20.0], 0.5).unwrap();
        assert_eq!(result, vec![10.0, 15.0, 17.5]);
    }

    #[test]
    fn ema_alpha_one_tracks_input() {
        let series = vec![3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(exponential_moving_average(&series, 1.0).unwrap(), series);
    }

    #[test]
    fn ema_invalid_alpha() {
        for alpha in [0.0, 1.5, -0.2, f64::NAN] {
            assert!(exponential_moving_average(&[1.0, 2.0], alpha).is_err());
        }
    }

    // ==================== rolling_average ====================

    #[test]
    fn rolling_average_full_windows_only() {
        let result = rolling_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 2).unwrap();
        assert_eq!(result, vec![1.5, 2.5, 3.5, 4.5]);
    }

    #[test]
    fn rolling_average_whole_series() {
        let result = rolling_average(&[1.0, 2.0, 3.0], 3).unwrap();
        assert_eq!(result, vec![2.0]);
        assert!(rolling_average(&[1.0, 2.0, 3.0], 4).is_err());
        assert!(rolling_average(&[1.0, 2.0, 3.0], 0).is_err());
    }

    #[test]
    fn rolling_average_matches_sma_tail() {
        let series: Vec<f64> = (0..20).map(|i| ((i * 7) % 5) as f64).collect();
        let rolled = rolling_average(&series, 4).unwrap();
        let sma = simple_moving_average(&series, 4).unwrap();
        for (r, s) in rolled.iter().zip(&sma[3..]) {
            assert_relative_eq!(r, s, epsilon = 1e-12);
        }
    }
}
