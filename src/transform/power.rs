//! Elementwise power and logarithmic transforms.

use crate::error::{Result, TsError};

/// Natural logarithm. All values must be positive.
pub fn log(series: &[f64]) -> Result<Vec<f64>> {
    require_positive(series, "log")?;
    Ok(series.iter().map(|x| x.ln()).collect())
}

/// Square root. All values must be positive.
pub fn sqrt(series: &[f64]) -> Result<Vec<f64>> {
    require_positive(series, "sqrt")?;
    Ok(series.iter().map(|x| x.sqrt()).collect())
}

/// Cube root; defined for every real value.
pub fn cbrt(series: &[f64]) -> Vec<f64> {
    series.iter().map(|x| x.cbrt()).collect()
}

/// `r`-th root, `x^(1/r)`.
///
/// Negative inputs with a non-odd-integer root give NaN, as `powf` does.
pub fn root(series: &[f64], r: f64) -> Result<Vec<f64>> {
    if r == 0.0 || !r.is_finite() {
        return Err(TsError::InvalidParameter(format!(
            "root order must be finite and non-zero, got {r}"
        )));
    }
    let exponent = 1.0 / r;
    Ok(series.iter().map(|x| x.powf(exponent)).collect())
}

/// Reject empty or non-positive input for transforms defined on (0, ∞).
pub(crate) fn require_positive(series: &[f64], transform: &str) -> Result<()> {
    if series.is_empty() {
        return Err(TsError::EmptyInput);
    }
    if let Some((i, x)) = series.iter().enumerate().find(|(_, x)| x.is_nan() || **x <= 0.0) {
        return Err(TsError::InvalidParameter(format!(
            "{transform} requires positive values, got {x} at index {i}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn log_and_sqrt() {
        let series = [1.0, std::f64::consts::E, 4.0];
        let logged = log(&series).unwrap();
        assert_relative_eq!(logged[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(logged[1], 1.0, epsilon = 1e-12);

        let rooted = sqrt(&series).unwrap();
        assert_relative_eq!(rooted[2], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn log_rejects_non_positive() {
        let err = log(&[1.0, 0.0, 2.0]).unwrap_err();
        assert!(matches!(err, TsError::InvalidParameter(ref msg) if msg.contains("index 1")));
        assert!(sqrt(&[-4.0]).is_err());
        assert_eq!(log(&[]).unwrap_err(), TsError::EmptyInput);
    }

    #[test]
    fn cbrt_handles_negatives() {
        let out = cbrt(&[-8.0, 27.0, 0.0]);
        assert_relative_eq!(out[0], -2.0, epsilon = 1e-12);
        assert_relative_eq!(out[1], 3.0, epsilon = 1e-12);
        assert_eq!(out[2], 0.0);
    }

    #[test]
    fn root_generalises_sqrt() {
        let series = [16.0, 81.0];
        let out = root(&series, 4.0).unwrap();
        assert_relative_eq!(out[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(out[1], 3.0, epsilon = 1e-12);

        let squared = root(&[3.0], 0.5).unwrap();
        assert_relative_eq!(squared[0], 9.0, epsilon = 1e-12);
    }

    #[test]
    fn root_rejects_zero_order() {
        assert!(matches!(root(&[1.0], 0.0), Err(TsError::InvalidParameter(_))));
    }
}
