//! Forecasting models.

mod traits;

pub mod exponential;

pub use traits::{BoxedForecaster, Forecaster};
