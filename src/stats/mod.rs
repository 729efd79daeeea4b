//! Descriptive statistics and serial-correlation analysis.
//!
//! # Example
//!
//! ```
//! use tslib::stats::{acf, mean, pacf, variance};
//!
//! let series = vec![2.0, 4.0, 3.0, 5.0, 4.0, 6.0, 5.0, 7.0];
//! assert_eq!(mean(&series).unwrap(), 4.5);
//! assert!(variance(&series).unwrap() > 0.0);
//!
//! let r = acf(&series, 3).unwrap();
//! let p = pacf(&series, 3).unwrap();
//! assert_eq!(r[0], 1.0);
//! assert_eq!(p[1], r[1]);
//! ```

pub mod autocorrelation;
pub mod descriptive;

pub use autocorrelation::{acf, autocorrelation, autocovariance, pacf, pacf_from_acf};
pub use descriptive::{argmax, argmin, max, mean, min, std_dev, variance};
