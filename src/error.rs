//! Error types for the tslib library.

use thiserror::Error;

/// Result type alias for time series operations.
pub type Result<T> = std::result::Result<T, TsError>;

/// Errors that can occur while analysing or forecasting a series.
///
/// Every public operation validates its inputs before doing any work, so an
/// error always means no partial result was produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TsError {
    /// Input sequence is empty.
    #[error("empty input data")]
    EmptyInput,

    /// Input contains NaN or an infinite value.
    #[error("non-finite value at index {index}")]
    NonFiniteInput { index: usize },

    /// A smoothing factor, penalty, period or horizon is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Lag is not smaller than the series length.
    #[error("invalid lag: {lag} (series length: {len})")]
    InvalidLag { lag: usize, len: usize },

    /// Series too short for the requested lag or period.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Near-zero denominator or singular system.
    #[error("numerically unstable: {0}")]
    NumericallyUnstable(String),

    /// Shapes of matrices or vectors do not agree.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}
