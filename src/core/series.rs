//! Immutable univariate series.

use crate::error::{Result, TsError};

/// An ordered, immutable sequence of real-valued observations.
///
/// Construction validates that the sequence is non-empty and contains only
/// finite values; after that the data can only be read. Operations that need
/// more points (a lag, a season) check their own minimums.
///
/// # Example
/// ```
/// use tslib::core::Series;
///
/// let series = Series::new(vec![1.0, 3.0, 6.0]).unwrap();
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.first_difference(), vec![2.0, 3.0]);
/// assert!(Series::new(vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    values: Vec<f64>,
}

impl Series {
    /// Create a series from owned values.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        validate_values(&values)?;
        Ok(Self { values })
    }

    /// Observed values in time order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations (always at least 1).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First observation.
    pub fn first(&self) -> f64 {
        self.values[0]
    }

    /// Last observation.
    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Consecutive differences `x[i+1] - x[i]` (length `n - 1`).
    pub fn first_difference(&self) -> Vec<f64> {
        self.values.windows(2).map(|w| w[1] - w[0]).collect()
    }

    /// Give back the underlying values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl AsRef<[f64]> for Series {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl TryFrom<Vec<f64>> for Series {
    type Error = TsError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for Series {
    type Error = TsError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::new(values.to_vec())
    }
}

/// Check that a slice is non-empty and fully finite.
pub(crate) fn validate_values(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(TsError::EmptyInput);
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(TsError::NonFiniteInput { index });
    }
    Ok(())
}
