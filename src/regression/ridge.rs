//! L2-penalised linear regression solved through the singular value decomposition.
//!
//! With `X = U S Vᵀ`, the ridge solution is `β = V diag(s / (s² + λ)) Uᵀ y`.
//! Shrinking each singular value keeps the solve finite even when `X` is
//! ill-conditioned, which is why the stationarity test always fits with a
//! small positive penalty.

use nalgebra::{DMatrix, DVector};

use crate::error::{Result, TsError};

/// Singular values below this fraction of the largest are treated as zero
/// when no penalty is applied.
const RANK_TOLERANCE: f64 = 1e-12;

/// A design matrix and response awaiting a fit.
#[derive(Debug, Clone)]
pub struct RidgeRegression {
    design: DMatrix<f64>,
    response: DVector<f64>,
}

/// Output of [`RidgeRegression::fit`].
#[derive(Debug, Clone)]
pub struct RidgeFit {
    /// Estimated coefficients, one per design column.
    pub coefficients: Vec<f64>,
    /// Standard error of each coefficient.
    pub standard_errors: Vec<f64>,
    /// `X β`.
    pub fitted: Vec<f64>,
    /// `y - X β`.
    pub residuals: Vec<f64>,
    /// Residual sum of squares over `rows - columns`.
    pub residual_variance: f64,
    /// Penalty the fit was computed with.
    pub penalty: f64,
}

impl RidgeFit {
    /// Residual sum of squares.
    pub fn rss(&self) -> f64 {
        self.residuals.iter().map(|e| e * e).sum()
    }

    /// Coefficient divided by its standard error.
    pub fn t_statistic(&self, index: usize) -> Option<f64> {
        let beta = *self.coefficients.get(index)?;
        let se = *self.standard_errors.get(index)?;
        Some(beta / se)
    }
}

impl RidgeRegression {
    /// Pair a design matrix with its response.
    ///
    /// # Errors
    /// * `DimensionMismatch` when the response length differs from the row count
    /// * `InsufficientData` unless there are more rows than columns
    pub fn new(design: DMatrix<f64>, response: DVector<f64>) -> Result<Self> {
        if design.nrows() != response.len() {
            return Err(TsError::DimensionMismatch {
                expected: design.nrows(),
                got: response.len(),
            });
        }
        if design.ncols() == 0 {
            return Err(TsError::InvalidParameter(
                "design matrix has no columns".into(),
            ));
        }
        if design.nrows() <= design.ncols() {
            return Err(TsError::InsufficientData {
                needed: design.ncols() + 1,
                got: design.nrows(),
            });
        }
        Ok(Self { design, response })
    }

    /// Build from row-major design rows.
    ///
    /// # Example
    /// ```
    /// use tslib::regression::RidgeRegression;
    ///
    /// let rows = vec![vec![1.0, 0.0], vec![1.0, 1.0], vec![1.0, 2.0], vec![1.0, 3.0]];
    /// let y = vec![1.0, 3.0, 5.0, 7.0];
    /// let fit = RidgeRegression::from_rows(&rows, &y).unwrap().fit(0.0).unwrap();
    /// assert!((fit.coefficients[0] - 1.0).abs() < 1e-9);
    /// assert!((fit.coefficients[1] - 2.0).abs() < 1e-9);
    /// ```
    pub fn from_rows(rows: &[Vec<f64>], response: &[f64]) -> Result<Self> {
        let first = rows.first().ok_or(TsError::EmptyInput)?;
        let ncols = first.len();
        if let Some(row) = rows.iter().find(|row| row.len() != ncols) {
            return Err(TsError::DimensionMismatch {
                expected: ncols,
                got: row.len(),
            });
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let design = DMatrix::from_row_slice(rows.len(), ncols, &flat);
        Self::new(design, DVector::from_row_slice(response))
    }

    /// Number of observations.
    pub fn nrows(&self) -> usize {
        self.design.nrows()
    }

    /// Number of regressors.
    pub fn ncols(&self) -> usize {
        self.design.ncols()
    }

    /// Fit with penalty `lambda`.
    ///
    /// # Errors
    /// * `InvalidParameter` for a negative or non-finite penalty
    /// * `NumericallyUnstable` when `lambda == 0` and the design is rank deficient
    pub fn fit(&self, lambda: f64) -> Result<RidgeFit> {
        if !lambda.is_finite() || lambda < 0.0 {
            return Err(TsError::InvalidParameter(format!(
                "ridge penalty must be a finite non-negative number, got {lambda}"
            )));
        }

        let (m, p) = self.design.shape();
        log::debug!("ridge fit: {m}x{p} design, penalty {lambda:e}");

        let svd = self.design.clone().svd(true, true);
        let u = svd
            .u
            .as_ref()
            .ok_or_else(|| TsError::NumericallyUnstable("svd did not produce U".into()))?;
        let v_t = svd
            .v_t
            .as_ref()
            .ok_or_else(|| TsError::NumericallyUnstable("svd did not produce Vᵀ".into()))?;
        let singular = &svd.singular_values;

        let s_max = singular.iter().copied().fold(0.0_f64, f64::max);
        let s_min = singular.iter().copied().fold(f64::INFINITY, f64::min);
        if lambda == 0.0 && (s_max == 0.0 || s_min <= RANK_TOLERANCE * s_max) {
            log::warn!("ridge fit: rank-deficient design without penalty (s_min {s_min:e}, s_max {s_max:e})");
            return Err(TsError::NumericallyUnstable(
                "design matrix is rank deficient; use a positive penalty".into(),
            ));
        }

        let shrunk = singular.map(|s| if s == 0.0 { 0.0 } else { s / (s * s + lambda) });

        // Z = V diag(shrunk) Uᵀ, a p x m operator.
        let z = v_t.transpose() * DMatrix::from_diagonal(&shrunk) * u.transpose();
        let beta = &z * &self.response;
        let fitted = &self.design * &beta;
        let residuals = &self.response - &fitted;

        let rss = residuals.norm_squared();
        let residual_variance = rss / (m - p) as f64;

        // diag(σ² Z Zᵀ)
        let standard_errors = z
            .row_iter()
            .map(|row| (residual_variance * row.norm_squared()).sqrt())
            .collect();

        Ok(RidgeFit {
            coefficients: beta.iter().copied().collect(),
            standard_errors,
            fitted: fitted.iter().copied().collect(),
            residuals: residuals.iter().copied().collect(),
            residual_variance,
            penalty: lambda,
        })
    }
}
