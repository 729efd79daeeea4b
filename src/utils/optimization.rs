//! Optimization utilities for parameter estimation.

use crate::error::{Result, TsError};

/// Absolute floor added to the relative tolerance.
const ABSOLUTE_TOLERANCE: f64 = 1e-14;

/// (3 - sqrt(5)) / 2
const GOLDEN_SECTION: f64 = 0.381_966_011_250_105_1;

/// Result of Brent's bounded minimization.
#[derive(Debug, Clone)]
pub struct BrentResult {
    /// The minimizing point found.
    pub optimal_point: f64,
    /// The objective function value at the optimal point.
    pub optimal_value: f64,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether the bracket shrank below tolerance.
    pub converged: bool,
}

/// Configuration for Brent's method.
#[derive(Debug, Clone)]
pub struct BrentConfig {
    /// Maximum number of iterations.
    pub max_iter: usize,
    /// Relative convergence tolerance.
    pub tolerance: f64,
}

impl Default for BrentConfig {
    fn default() -> Self {
        Self {
            max_iter: 100,
            tolerance: 1e-10,
        }
    }
}

/// Minimize a univariate function on `[lower, upper]` with Brent's method.
///
/// Combines golden-section steps with parabolic interpolation. NaN objective
/// values are treated as +∞.
///
/// # Example
/// ```
/// use tslib::utils::optimization::{brent_minimize, BrentConfig};
///
/// let result = brent_minimize(|x| (x - 2.0).powi(2), 0.0, 5.0, &BrentConfig::default()).unwrap();
/// assert!(result.converged);
/// assert!((result.optimal_point - 2.0).abs() < 1e-6);
/// ```
pub fn brent_minimize<F>(
    objective: F,
    lower: f64,
    upper: f64,
    config: &BrentConfig,
) -> Result<BrentResult>
where
    F: Fn(f64) -> f64,
{
    if !(lower.is_finite() && upper.is_finite() && lower < upper) {
        return Err(TsError::InvalidParameter(format!(
            "invalid search interval [{lower}, {upper}]"
        )));
    }

    let eval = |x: f64| {
        let v = objective(x);
        if v.is_nan() {
            f64::INFINITY
        } else {
            v
        }
    };

    let (mut a, mut b) = (lower, upper);
    let mut x = a + GOLDEN_SECTION * (b - a);
    let (mut w, mut v) = (x, x);
    let mut fx = eval(x);
    let (mut fw, mut fv) = (fx, fx);
    let mut d: f64 = 0.0;
    let mut e: f64 = 0.0;

    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iter {
        let mid = 0.5 * (a + b);
        let tol1 = config.tolerance * x.abs() + ABSOLUTE_TOLERANCE;
        let tol2 = 2.0 * tol1;

        if (x - mid).abs() <= tol2 - 0.5 * (b - a) {
            converged = true;
            break;
        }
        iterations += 1;

        let mut golden = true;
        if e.abs() > tol1 {
            // Parabola through (v, fv), (w, fw), (x, fx).
            let r = (x - w) * (fx - fv);
            let mut q = (x - v) * (fx - fw);
            let mut p = (x - v) * q - (x - w) * r;
            q = 2.0 * (q - r);
            if q > 0.0 {
                p = -p;
            } else {
                q = -q;
            }
            let previous_step = e;
            e = d;

            if p.abs() < (0.5 * q * previous_step).abs() && p > q * (a - x) && p < q * (b - x) {
                d = p / q;
                let u = x + d;
                if u - a < tol2 || b - u < tol2 {
                    d = tol1.copysign(mid - x);
                }
                golden = false;
            }
        }
        if golden {
            e = if x >= mid { a - x } else { b - x };
            d = GOLDEN_SECTION * e;
        }

        let u = if d.abs() >= tol1 {
            x + d
        } else {
            x + tol1.copysign(d)
        };
        let fu = eval(u);

        if fu <= fx {
            if u >= x {
                a = x;
            } else {
                b = x;
            }
            v = w;
            fv = fw;
            w = x;
            fw = fx;
            x = u;
            fx = fu;
        } else {
            if u < x {
                a = u;
            } else {
                b = u;
            }
            if fu <= fw || w == x {
                v = w;
                fv = fw;
                w = u;
                fw = fu;
            } else if fu <= fv || v == x || v == w {
                v = u;
                fv = fu;
            }
        }
    }

    Ok(BrentResult {
        optimal_point: x,
        optimal_value: fx,
        iterations,
        converged,
    })
}
