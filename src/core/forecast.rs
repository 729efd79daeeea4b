//! Forecast result structure for holding smoothed values and predictions.

/// Output of a smoothing forecaster.
///
/// Holds `n + m` values: the first `n` cover the observed period (smoothed
/// or one-step-ahead values, depending on the method) and the last `m` are
/// extrapolations beyond the final observation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    values: Vec<f64>,
    observed: usize,
}

impl Forecast {
    /// Wrap a full output vector whose first `observed` entries are in-sample.
    pub(crate) fn new(values: Vec<f64>, observed: usize) -> Self {
        debug_assert!(observed <= values.len());
        Self { values, observed }
    }

    /// All values, in-sample followed by the horizon.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Total length (`n + m`).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the forecast holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of in-sample entries (`n`).
    pub fn observed_len(&self) -> usize {
        self.observed
    }

    /// Number of extrapolated steps (`m`).
    pub fn horizon(&self) -> usize {
        self.values.len() - self.observed
    }

    /// In-sample portion.
    pub fn fitted(&self) -> &[f64] {
        &self.values[..self.observed]
    }

    /// Extrapolated portion beyond the last observation.
    pub fn predictions(&self) -> &[f64] {
        &self.values[self.observed..]
    }

    /// Consume the forecast, returning the full vector.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}
