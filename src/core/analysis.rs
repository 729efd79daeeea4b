//! Per-series analysis with lazily cached statistics.

use std::cell::OnceCell;
use std::fmt;

use super::series::Series;
use crate::error::Result;
use crate::stats::{self, descriptive};
use crate::transform::{self, BoxCoxResult};
use crate::validation::{adf_test, AdfResult};

const DEFAULT_LAG: usize = 1;
const DEFAULT_MAX_LAG: usize = 10;

/// Statistics and transforms bound to one [`Series`].
///
/// Scalar statistics and the default-lag ADF test are computed on first use
/// and cached for the lifetime of the instance. Serial-correlation queries
/// use the configured `lag` and `max_lag`.
///
/// # Example
/// ```
/// use tslib::core::{Series, SeriesAnalysis};
///
/// let series = Series::new(vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]).unwrap();
/// let analysis = SeriesAnalysis::new(&series).with_max_lag(3);
///
/// assert_eq!(analysis.mean(), 3.875);
/// assert_eq!(analysis.min(), (1.0, 1));
/// assert_eq!(analysis.acf().unwrap().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SeriesAnalysis<'a> {
    series: &'a Series,
    lag: usize,
    max_lag: usize,
    mean: OnceCell<f64>,
    variance: OnceCell<f64>,
    min: OnceCell<(f64, usize)>,
    max: OnceCell<(f64, usize)>,
    adf: OnceCell<Result<AdfResult>>,
}

impl<'a> SeriesAnalysis<'a> {
    /// Analyse `series` with lag 1 and max lag 10.
    pub fn new(series: &'a Series) -> Self {
        Self {
            series,
            lag: DEFAULT_LAG,
            max_lag: DEFAULT_MAX_LAG,
            mean: OnceCell::new(),
            variance: OnceCell::new(),
            min: OnceCell::new(),
            max: OnceCell::new(),
            adf: OnceCell::new(),
        }
    }

    /// Lag used by [`autocovariance`](Self::autocovariance) and
    /// [`autocorrelation`](Self::autocorrelation).
    pub fn with_lag(mut self, lag: usize) -> Self {
        self.lag = lag;
        self
    }

    /// Highest lag returned by [`acf`](Self::acf) and [`pacf`](Self::pacf).
    pub fn with_max_lag(mut self, max_lag: usize) -> Self {
        self.max_lag = max_lag;
        self
    }

    pub fn series(&self) -> &Series {
        self.series
    }

    pub fn lag(&self) -> usize {
        self.lag
    }

    pub fn max_lag(&self) -> usize {
        self.max_lag
    }

    pub fn mean(&self) -> f64 {
        *self
            .mean
            .get_or_init(|| descriptive::mean(self.values()).unwrap_or(f64::NAN))
    }

    /// Sample variance (n - 1 denominator).
    pub fn variance(&self) -> f64 {
        *self
            .variance
            .get_or_init(|| descriptive::variance(self.values()).unwrap_or(f64::NAN))
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Smallest value and the index of its first occurrence.
    pub fn min(&self) -> (f64, usize) {
        *self.min.get_or_init(|| {
            let index = descriptive::argmin(self.values()).unwrap_or(0);
            (self.values()[index], index)
        })
    }

    /// Largest value and the index of its first occurrence.
    pub fn max(&self) -> (f64, usize) {
        *self.max.get_or_init(|| {
            let index = descriptive::argmax(self.values()).unwrap_or(0);
            (self.values()[index], index)
        })
    }

    /// ADF test with the default lag, computed once.
    pub fn adf(&self) -> Result<&AdfResult> {
        self.adf
            .get_or_init(|| adf_test(self.values(), None))
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn autocovariance(&self) -> Result<f64> {
        stats::autocovariance(self.values(), self.lag)
    }

    pub fn autocorrelation(&self) -> Result<f64> {
        stats::autocorrelation(self.values(), self.lag)
    }

    pub fn acf(&self) -> Result<Vec<f64>> {
        stats::acf(self.values(), self.max_lag)
    }

    pub fn pacf(&self) -> Result<Vec<f64>> {
        stats::pacf(self.values(), self.max_lag)
    }

    pub fn log(&self) -> Result<Vec<f64>> {
        transform::log(self.values())
    }

    /// Box-Cox with the given lambda, or the likelihood-optimal one when
    /// `lambda` is `None`.
    pub fn boxcox(&self, lambda: Option<f64>) -> Result<BoxCoxResult> {
        match lambda {
            Some(lambda) => Ok(BoxCoxResult {
                data: transform::boxcox(self.values(), lambda)?,
                lambda,
            }),
            None => transform::boxcox_auto(self.values()),
        }
    }

    pub fn first_difference(&self) -> Vec<f64> {
        self.series.first_difference()
    }

    pub fn rolling_average(&self, window: usize) -> Result<Vec<f64>> {
        transform::rolling_average(self.values(), window)
    }

    /// Collect the headline statistics.
    ///
    /// Fails only if the ADF test cannot run on this series.
    pub fn summary(&self) -> Result<Summary> {
        let adf = self.adf()?;
        Ok(Summary {
            mean: self.mean(),
            std_dev: self.std_dev(),
            min: self.min(),
            max: self.max(),
            adf_statistic: adf.statistic,
            is_stationary: adf.is_stationary,
        })
    }

    fn values(&self) -> &[f64] {
        self.series.values()
    }
}

/// Headline statistics of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: f64,
    /// Value and index of the minimum.
    pub min: (f64, usize),
    /// Value and index of the maximum.
    pub max: (f64, usize),
    pub adf_statistic: f64,
    pub is_stationary: bool,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mean: {:.4}", self.mean)?;
        writeln!(f, "Std Dev: {:.4}", self.std_dev)?;
        writeln!(f, "Min: {:.4} at index {}", self.min.0, self.min.1)?;
        writeln!(f, "Max: {:.4} at index {}", self.max.0, self.max.1)?;
        write!(
            f,
            "ADF Stat: {:.4} (Stationary: {})",
            self.adf_statistic, self.is_stationary
        )
    }
}
