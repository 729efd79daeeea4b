//! Autoregressive coefficient estimation.
//!
//! Two estimators are available:
//! - **Least squares**: covariance-method normal equations, each entry
//!   averaged over the `n - order` predictable points and solved with LU.
//! - **Burg**: maximum-entropy recursion on forward and backward prediction
//!   errors. Always yields a stable filter, preferable for short series.

use nalgebra::{DMatrix, DVector};

use crate::error::{Result, TsError};

/// Estimation method for [`ar_coefficients`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArMethod {
    /// Covariance-method least squares.
    #[default]
    LeastSquares,
    /// Burg's maximum entropy method.
    Burg,
}

/// A fitted autoregressive model `x[t] - μ = Σ φ_j (x[t-1-j] - μ) + e[t]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArModel {
    coefficients: Vec<f64>,
    mean: f64,
    method: ArMethod,
}

impl ArModel {
    /// Coefficients `φ_1..φ_p`, most recent lag first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Model order `p`.
    pub fn order(&self) -> usize {
        self.coefficients.len()
    }

    /// Mean removed before fitting (0 when the series was used as-is).
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Method used for the fit.
    pub fn method(&self) -> ArMethod {
        self.method
    }

    /// One-step-ahead predictions over `series`.
    ///
    /// The first `order` entries have no complete history and are NaN.
    pub fn estimate(&self, series: &[f64]) -> Result<Vec<f64>> {
        let p = self.order();
        if series.len() <= p {
            return Err(TsError::InsufficientData {
                needed: p + 1,
                got: series.len(),
            });
        }

        let mut out = vec![f64::NAN; series.len()];
        for (t, slot) in out.iter_mut().enumerate().skip(p) {
            let ar: f64 = self
                .coefficients
                .iter()
                .enumerate()
                .map(|(j, phi)| phi * (series[t - 1 - j] - self.mean))
                .sum();
            *slot = self.mean + ar;
        }
        Ok(out)
    }

    /// Root mean squared one-step error over the predictable range.
    pub fn rmse(&self, series: &[f64]) -> Result<f64> {
        let predictions = self.estimate(series)?;
        let p = self.order();
        let sse: f64 = series[p..]
            .iter()
            .zip(&predictions[p..])
            .map(|(x, x_hat)| (x - x_hat).powi(2))
            .sum();
        Ok((sse / (series.len() - p) as f64).sqrt())
    }
}

/// Fit an AR(`order`) model.
///
/// # Errors
/// * `InvalidParameter` for `order == 0`
/// * `InsufficientData` when the series has no more than `order` points
/// * `NumericallyUnstable` when the normal equations are singular or the
///   Burg recursion runs out of signal energy
///
/// # Example
/// ```
/// use tslib::regression::{ar_coefficients, ArMethod};
///
/// let mut series = vec![1.0];
/// for t in 1..200 {
///     let prev: f64 = series[t - 1];
///     series.push(0.6 * prev + if t % 2 == 0 { 0.3 } else { -0.3 });
/// }
/// let model = ar_coefficients(&series, 1, true, ArMethod::Burg).unwrap();
/// assert_eq!(model.order(), 1);
/// ```
pub fn ar_coefficients(
    series: &[f64],
    order: usize,
    remove_mean: bool,
    method: ArMethod,
) -> Result<ArModel> {
    if series.is_empty() {
        return Err(TsError::EmptyInput);
    }
    if order == 0 {
        return Err(TsError::InvalidParameter("AR order must be at least 1".into()));
    }
    if series.len() <= order {
        return Err(TsError::InsufficientData {
            needed: order + 1,
            got: series.len(),
        });
    }

    let mean = if remove_mean {
        series.iter().sum::<f64>() / series.len() as f64
    } else {
        0.0
    };
    let centered: Vec<f64> = series.iter().map(|x| x - mean).collect();

    log::debug!("ar fit: order {order}, n {}, {method:?}", series.len());

    let coefficients = match method {
        ArMethod::LeastSquares => least_squares(&centered, order)?,
        ArMethod::Burg => burg(&centered, order)?,
    };

    Ok(ArModel {
        coefficients,
        mean,
        method,
    })
}

fn least_squares(x: &[f64], order: usize) -> Result<Vec<f64>> {
    let n = x.len();
    let mut mat = DMatrix::<f64>::zeros(order, order);
    let mut rhs = DVector::<f64>::zeros(order);

    for i in (order - 1)..(n - 1) {
        for j in 0..order {
            rhs[j] += x[i + 1] * x[i - j];
            for k in j..order {
                mat[(j, k)] += x[i - j] * x[i - k];
            }
        }
    }

    let scale = (n - order) as f64;
    for j in 0..order {
        rhs[j] /= scale;
        for k in j..order {
            mat[(j, k)] /= scale;
            mat[(k, j)] = mat[(j, k)];
        }
    }

    let solution = mat
        .lu()
        .solve(&rhs)
        .filter(|s| s.iter().all(|v| v.is_finite()))
        .ok_or_else(|| {
            log::warn!("ar least squares: singular normal equations at order {order}");
            TsError::NumericallyUnstable("AR normal equations are singular".into())
        })?;

    Ok(solution.iter().copied().collect())
}

fn burg(x: &[f64], order: usize) -> Result<Vec<f64>> {
    let len = x.len();
    // Backward (per) and forward (pef) prediction error accumulators.
    let mut per = vec![0.0; len + 1];
    let mut pef = vec![0.0; len + 1];
    let mut g = vec![0.0; order + 2];
    let mut h = vec![0.0; order + 1];

    for n in 1..=order {
        let mut jj = len - n;
        let mut num = 0.0;
        let mut den = 0.0;
        for j in 0..jj {
            let f = x[j + n] + pef[j];
            let b = x[j] + per[j];
            num -= 2.0 * f * b;
            den += f * f + b * b;
        }
        if den == 0.0 {
            return Err(TsError::NumericallyUnstable(format!(
                "burg recursion has no prediction error energy at order {n}"
            )));
        }

        let reflection = num / den;
        g[n] = reflection;

        if n != 1 {
            for j in 1..n {
                h[j] = g[j] + reflection * g[n - j];
            }
            g[1..n].copy_from_slice(&h[1..n]);
            jj -= 1;
        }

        for j in 0..jj {
            per[j] += reflection * pef[j] + reflection * x[j + n];
            pef[j] = pef[j + 1] + reflection * per[j + 1] + reflection * x[j + 1];
        }
    }

    Ok(g[1..=order].iter().map(|c| -c).collect())
}
