//! Simple Exponential Smoothing (SES).
//!
//! SES is suitable for data with no clear trend or seasonality.

use crate::core::{Forecast, Series};
use crate::error::{Result, TsError};
use crate::models::Forecaster;

/// Simple Exponential Smoothing forecaster.
///
/// The model equation is:
/// `level_t = α × y_t + (1-α) × level_{t-1}`, with `level_0 = y_0`.
///
/// The in-sample output is the level itself; every extrapolated step repeats
/// the final level.
///
/// # Example
/// ```
/// use tslib::core::Series;
/// use tslib::models::exponential::SimpleExponentialSmoothing;
/// use tslib::models::Forecaster;
///
/// let series = Series::new(vec![10.0, 12.0, 11.0, 13.0, 12.0]).unwrap();
/// let model = SimpleExponentialSmoothing::new(0.3).unwrap();
///
/// let forecast = model.forecast(&series, 3).unwrap();
/// assert_eq!(forecast.len(), 8);
/// assert_eq!(forecast.predictions()[0], forecast.fitted()[4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleExponentialSmoothing {
    alpha: f64,
}

impl SimpleExponentialSmoothing {
    /// Create a model with smoothing factor `alpha` in (0, 1].
    pub fn new(alpha: f64) -> Result<Self> {
        if alpha.is_nan() || alpha <= 0.0 || alpha > 1.0 {
            return Err(TsError::InvalidParameter(format!(
                "alpha must be in (0, 1], got {alpha}"
            )));
        }
        Ok(Self { alpha })
    }

    /// Get the smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Forecaster for SimpleExponentialSmoothing {
    fn forecast(&self, series: &Series, horizon: usize) -> Result<Forecast> {
        let values = series.values();
        let n = values.len();
        log::debug!("ses: n {n}, horizon {horizon}, alpha {}", self.alpha);

        let mut out = Vec::with_capacity(n + horizon);
        let mut level = values[0];
        out.push(level);
        for &y in &values[1..] {
            level = self.alpha * y + (1.0 - self.alpha) * level;
            out.push(level);
        }
        out.extend(std::iter::repeat(level).take(horizon));

        Ok(Forecast::new(out, n))
    }

    fn name(&self) -> &str {
        "SES"
    }
}
