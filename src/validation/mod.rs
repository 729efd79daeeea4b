//! Stationarity testing and differencing.
//!
//! # Example
//!
//! ```
//! use tslib::validation::{adf_test, difference_until_stationary, AdfConfig};
//!
//! let trend: Vec<f64> = (0..80).map(|i| 0.5 * i as f64).collect();
//! let adf = adf_test(&trend, None).unwrap();
//! assert!(adf.needs_differencing());
//!
//! let (differenced, d) = difference_until_stationary(&trend, 2, &AdfConfig::default()).unwrap();
//! assert_eq!(d, 1);
//! assert_eq!(differenced.len(), 79);
//! ```

pub mod differencing;
pub mod stationarity;

pub use differencing::{difference, difference_until_stationary, integrate};
pub use stationarity::{adf_test, adf_test_with_config, default_lag, AdfConfig, AdfResult};
