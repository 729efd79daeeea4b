//! Data transformations for time series.
//!
//! Provides power and logarithmic transforms, Box-Cox, and moving averages.
//!
//! # Example
//!
//! ```
//! use tslib::transform::{boxcox_auto, log, simple_moving_average};
//!
//! let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let logged = log(&series).unwrap();
//! assert_eq!(logged[0], 0.0);
//!
//! // Box-Cox transformation with the likelihood-optimal lambda
//! let bc = boxcox_auto(&series).unwrap();
//! assert_eq!(bc.data.len(), 5);
//!
//! // Moving average with period 3
//! let sma = simple_moving_average(&series, 3).unwrap();
//! assert_eq!(sma[2], 2.0);
//! ```

pub mod boxcox;
pub mod power;
pub mod window;

// Re-export from power
pub use power::{cbrt, log, root, sqrt};

// Re-export from boxcox
pub use boxcox::{
    boxcox, boxcox_auto, boxcox_lambda, guerrero_cv, inv_boxcox, BoxCoxResult,
    DEFAULT_LAMBDA_BOUNDS,
};

// Re-export from window
pub use window::{
    cumulative_moving_average, exponential_moving_average, rolling_average,
    simple_moving_average, weighted_moving_average,
};
