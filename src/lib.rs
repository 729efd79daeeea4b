//! # tslib
//!
//! Univariate time series analysis.
//!
//! Provides autocorrelation analysis (ACF, PACF via Durbin-Levinson), ridge
//! regression solved by SVD, the augmented Dickey-Fuller stationarity test,
//! single, double and triple (Holt-Winters) exponential smoothing, along with
//! power and Box-Cox transforms, moving averages and autoregressive fitting.

// Allow some clippy warnings for cleaner code in specific cases
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::type_complexity)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::manual_memcpy)]

pub mod core;
pub mod error;
pub mod models;
pub mod regression;
pub mod stats;
pub mod transform;
pub mod utils;
pub mod validation;

pub use error::{Result, TsError};

pub mod prelude {
    pub use crate::core::{Forecast, Series, SeriesAnalysis, Summary};
    pub use crate::error::{Result, TsError};
    pub use crate::models::exponential::{
        HoltLinearTrend, HoltWinters, SimpleExponentialSmoothing, TrendInitialization,
    };
    pub use crate::models::Forecaster;
    pub use crate::regression::RidgeRegression;
    pub use crate::stats::{acf, mean, pacf, variance};
    pub use crate::validation::{adf_test, AdfConfig, AdfResult};
}
