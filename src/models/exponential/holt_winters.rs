//! Holt-Winters triple exponential smoothing with multiplicative seasonality.

use crate::core::{Forecast, Series};
use crate::error::{Result, TsError};
use crate::models::Forecaster;

/// Holt-Winters multiplicative forecaster.
///
/// Model equations, for `t >= 2`:
/// - Level: `l_t = α × y_t / s_{t-p} + (1-α) × (l_{t-1} + b_{t-1})`
///   (the seasonal divisor is omitted while `t < p`)
/// - Trend: `b_t = γ × (l_t - l_{t-1}) + (1-γ) × b_{t-1}`
/// - Seasonal: `s_t = β × y_t / l_t + (1-β) × s_{t-p}` once `t >= p`
/// - Output: `ŷ_{t+h} = (l_t + h × b_t) × s_{t-p+h}` once `t + h >= p`
///
/// Level and trend are seeded at index 1 from `y_0` and the average
/// season-over-season change. Output entries the recursion never reaches
/// stay at exactly 0.0.
///
/// # Example
/// ```
/// use tslib::core::Series;
/// use tslib::models::exponential::HoltWinters;
/// use tslib::models::Forecaster;
///
/// let pattern = [0.8, 1.2, 1.1, 0.9];
/// let values: Vec<f64> = (0..48).map(|i| 100.0 * pattern[i % 4]).collect();
/// let series = Series::new(values).unwrap();
///
/// let model = HoltWinters::new(0.5, 0.4, 0.1, 4).unwrap();
/// let forecast = model.forecast(&series, 4).unwrap();
/// assert_eq!(forecast.len(), 52);
/// assert!((forecast.predictions()[1] - 120.0).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoltWinters {
    alpha: f64,
    beta: f64,
    gamma: f64,
    period: usize,
}

impl HoltWinters {
    /// Create a model.
    ///
    /// # Arguments
    /// * `alpha` - Level smoothing in [0, 1]
    /// * `beta` - Seasonal smoothing in [0, 1]
    /// * `gamma` - Trend smoothing in [0, 1]
    /// * `period` - Season length, greater than 1
    pub fn new(alpha: f64, beta: f64, gamma: f64, period: usize) -> Result<Self> {
        for (name, value) in [("alpha", alpha), ("beta", beta), ("gamma", gamma)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(TsError::InvalidParameter(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }
        if period <= 1 {
            return Err(TsError::InvalidParameter(format!(
                "period must be greater than 1, got {period}"
            )));
        }
        Ok(Self {
            alpha,
            beta,
            gamma,
            period,
        })
    }

    /// Get the level smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the seasonal smoothing parameter.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Get the trend smoothing parameter.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Get the seasonal period.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Average change between the first two seasons, per step.
    ///
    /// Requires at least `2 * period` values.
    pub fn initial_trend(values: &[f64], period: usize) -> f64 {
        let sum: f64 = (0..period).map(|i| values[period + i] - values[i]).sum();
        sum / (period * period) as f64
    }

    /// Seasonal indices averaged over every complete season.
    ///
    /// Each value is divided by its season's mean before averaging, so the
    /// indices of a pure seasonal pattern average to 1.
    pub fn initial_seasonal_indices(values: &[f64], period: usize) -> Result<Vec<f64>> {
        let seasons = values.len().checked_div(period).unwrap_or(0);
        if seasons == 0 {
            return Err(TsError::InsufficientData {
                needed: period.max(1),
                got: values.len(),
            });
        }

        let mut indices = vec![0.0; period];
        for season in values.chunks_exact(period) {
            let season_mean = season.iter().sum::<f64>() / period as f64;
            if season_mean == 0.0 {
                return Err(TsError::NumericallyUnstable(
                    "season with zero mean cannot seed multiplicative indices".into(),
                ));
            }
            for (index, &y) in indices.iter_mut().zip(season) {
                *index += y / season_mean;
            }
        }
        for index in &mut indices {
            *index /= seasons as f64;
        }
        Ok(indices)
    }
}

impl Forecaster for HoltWinters {
    fn forecast(&self, series: &Series, horizon: usize) -> Result<Forecast> {
        let p = self.period;
        if horizon == 0 || horizon > p {
            return Err(TsError::InvalidParameter(format!(
                "horizon must be in 1..={p}, got {horizon}"
            )));
        }

        let y = series.values();
        let n = y.len();
        if n < 2 * p {
            return Err(TsError::InsufficientData {
                needed: 2 * p,
                got: n,
            });
        }

        log::debug!(
            "holt-winters: n {n}, period {p}, horizon {horizon}, alpha {}, beta {}, gamma {}",
            self.alpha,
            self.beta,
            self.gamma
        );

        let initial = Self::initial_seasonal_indices(y, p)?;
        let mut level = vec![0.0; n];
        let mut trend = vec![0.0; n];
        let mut seasonal: Vec<f64> = (0..n)
            .map(|i| if i < p { initial[i] } else { 1.0 })
            .collect();
        let mut out = vec![0.0; n + horizon];

        level[1] = y[0];
        trend[1] = Self::initial_trend(y, p);

        let (alpha, beta, gamma) = (self.alpha, self.beta, self.gamma);
        let m = horizon;

        for i in 2..n {
            let deseasonalized = if i >= p { y[i] / seasonal[i - p] } else { y[i] };
            level[i] = alpha * deseasonalized + (1.0 - alpha) * (level[i - 1] + trend[i - 1]);
            trend[i] = gamma * (level[i] - level[i - 1]) + (1.0 - gamma) * trend[i - 1];

            if i >= p {
                seasonal[i] = beta * y[i] / level[i] + (1.0 - beta) * seasonal[i - p];
            }

            if i + m >= p {
                out[i + m] = (level[i] + m as f64 * trend[i]) * seasonal[i + m - p];
            }

            log::trace!(
                "holt-winters step {i}: y {:.4}, level {:.4}, trend {:.4}, seasonal {:.4}, out {:.4}",
                y[i],
                level[i],
                trend[i],
                seasonal[i],
                out[i + m]
            );
        }

        if let Some(index) = out.iter().position(|v| !v.is_finite()) {
            return Err(TsError::NumericallyUnstable(format!(
                "holt-winters produced a non-finite value at index {index}"
            )));
        }

        Ok(Forecast::new(out, n))
    }

    fn name(&self) -> &str {
        "HoltWinters"
    }
}
