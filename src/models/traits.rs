//! Forecaster trait shared by the smoothing models.

use crate::core::{Forecast, Series};
use crate::error::Result;

/// Common interface for all smoothing forecasters.
///
/// Models are configured at construction and hold no per-series state, so a
/// single instance can forecast any number of series. The trait is
/// object-safe and can be used with `Box<dyn Forecaster>`.
pub trait Forecaster {
    /// Smooth `series` and extrapolate `horizon` steps past its end.
    ///
    /// The returned forecast always has `series.len() + horizon` values.
    fn forecast(&self, series: &Series, horizon: usize) -> Result<Forecast>;

    /// Convenience wrapper validating raw values into a [`Series`] first.
    fn forecast_values(&self, values: &[f64], horizon: usize) -> Result<Forecast> {
        let series = Series::try_from(values)?;
        self.forecast(&series, horizon)
    }

    /// Get the model name.
    fn name(&self) -> &str;
}

/// Type alias for boxed forecaster trait objects.
///
/// # Example
///
/// ```
/// use tslib::models::{BoxedForecaster, Forecaster};
/// use tslib::models::exponential::{HoltLinearTrend, SimpleExponentialSmoothing};
///
/// let models: Vec<BoxedForecaster> = vec![
///     Box::new(SimpleExponentialSmoothing::new(0.5).unwrap()),
///     Box::new(HoltLinearTrend::new(0.5, 0.3).unwrap()),
/// ];
/// for model in &models {
///     let forecast = model.forecast_values(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
///     assert_eq!(forecast.len(), 6);
/// }
/// ```
pub type BoxedForecaster = Box<dyn Forecaster>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TsError;

    struct Repeat;

    impl Forecaster for Repeat {
        fn forecast(&self, series: &Series, horizon: usize) -> Result<Forecast> {
            let mut values = series.values().to_vec();
            values.extend(std::iter::repeat(series.last()).take(horizon));
            Ok(Forecast::new(values, series.len()))
        }

        fn name(&self) -> &str {
            "Repeat"
        }
    }

    #[test]
    fn forecast_values_validates_input() {
        let model = Repeat;
        assert_eq!(
            model.forecast_values(&[], 3).unwrap_err(),
            TsError::EmptyInput
        );
        assert_eq!(
            model.forecast_values(&[1.0, f64::INFINITY], 1).unwrap_err(),
            TsError::NonFiniteInput { index: 1 }
        );
    }

    #[test]
    fn boxed_forecaster_dispatches() {
        let model: BoxedForecaster = Box::new(Repeat);
        let forecast = model.forecast_values(&[1.0, 2.0], 2).unwrap();
        assert_eq!(forecast.values(), &[1.0, 2.0, 2.0, 2.0]);
        assert_eq!(model.name(), "Repeat");
    }
}
