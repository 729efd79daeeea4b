//! Holt's Linear Trend (double exponential smoothing).

use crate::core::{Forecast, Series};
use crate::error::{Result, TsError};
use crate::models::Forecaster;

/// How the initial trend is estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendInitialization {
    /// `y_1 - y_0`.
    #[default]
    FirstDifference,
    /// `(y_3 - y_0) / 3`, falling back to the first difference for series of
    /// four points or fewer.
    ThreeStep,
    /// `(y_{n-1} - y_0) / (n - 1)`.
    Average,
}

impl TrendInitialization {
    fn initial_trend(self, values: &[f64]) -> f64 {
        let n = values.len();
        match self {
            Self::ThreeStep if n > 4 => (values[3] - values[0]) / 3.0,
            Self::FirstDifference | Self::ThreeStep => values[1] - values[0],
            Self::Average => (values[n - 1] - values[0]) / (n - 1) as f64,
        }
    }
}

impl TryFrom<u8> for TrendInitialization {
    type Error = TsError;

    fn try_from(mode: u8) -> Result<Self> {
        match mode {
            0 => Ok(Self::FirstDifference),
            1 => Ok(Self::ThreeStep),
            2 => Ok(Self::Average),
            other => Err(TsError::InvalidParameter(format!(
                "trend initialization mode must be 0, 1 or 2, got {other}"
            ))),
        }
    }
}

/// Holt's Linear Trend forecaster.
///
/// Model equations:
/// - Level: `l_t = α × y_t + (1-α) × (l_{t-1} + b_{t-1})`
/// - Trend: `b_t = γ × (l_t - l_{t-1}) + (1-γ) × b_{t-1}`
/// - In-sample output: `l_t + b_t`
/// - Forecast: `l_{n-1} + h × b_{n-1}` for `h = 1..=horizon`
///
/// # Example
/// ```
/// use tslib::core::Series;
/// use tslib::models::exponential::{HoltLinearTrend, TrendInitialization};
/// use tslib::models::Forecaster;
///
/// let series = Series::new((0..10).map(|i| 2.0 * i as f64).collect()).unwrap();
/// let model = HoltLinearTrend::new(0.5, 0.5)
///     .unwrap()
///     .with_initialization(TrendInitialization::Average);
///
/// let forecast = model.forecast(&series, 2).unwrap();
/// assert!((forecast.predictions()[1] - 22.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoltLinearTrend {
    alpha: f64,
    gamma: f64,
    initialization: TrendInitialization,
}

impl HoltLinearTrend {
    /// Create a model with level factor `alpha` and trend factor `gamma`,
    /// both in (0, 1].
    pub fn new(alpha: f64, gamma: f64) -> Result<Self> {
        for (name, value) in [("alpha", alpha), ("gamma", gamma)] {
            if value.is_nan() || value <= 0.0 || value > 1.0 {
                return Err(TsError::InvalidParameter(format!(
                    "{name} must be in (0, 1], got {value}"
                )));
            }
        }
        Ok(Self {
            alpha,
            gamma,
            initialization: TrendInitialization::default(),
        })
    }

    /// Choose the initial trend estimate.
    pub fn with_initialization(mut self, initialization: TrendInitialization) -> Self {
        self.initialization = initialization;
        self
    }

    /// Get the level smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the trend smoothing parameter.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Get the trend initialization.
    pub fn initialization(&self) -> TrendInitialization {
        self.initialization
    }
}

impl Forecaster for HoltLinearTrend {
    fn forecast(&self, series: &Series, horizon: usize) -> Result<Forecast> {
        let values = series.values();
        let n = values.len();
        if n < 2 {
            return Err(TsError::InsufficientData { needed: 2, got: n });
        }
        log::debug!(
            "holt: n {n}, horizon {horizon}, alpha {}, gamma {}, {:?}",
            self.alpha,
            self.gamma,
            self.initialization
        );

        let mut level = values[0];
        let mut trend = self.initialization.initial_trend(values);

        let mut out = Vec::with_capacity(n + horizon);
        out.push(level + trend);
        for &y in &values[1..] {
            let prev_level = level;
            level = self.alpha * y + (1.0 - self.alpha) * (level + trend);
            trend = self.gamma * (level - prev_level) + (1.0 - self.gamma) * trend;
            out.push(level + trend);
        }
        out.extend((1..=horizon).map(|h| level + h as f64 * trend));

        Ok(Forecast::new(out, n))
    }

    fn name(&self) -> &str {
        "Holt"
    }
}
