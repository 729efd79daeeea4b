//! Core data structures: the input series, forecast output and per-series analysis.

mod analysis;
mod forecast;
mod series;

pub use analysis::{SeriesAnalysis, Summary};
pub use forecast::Forecast;
pub use series::Series;

pub(crate) use series::validate_values;
