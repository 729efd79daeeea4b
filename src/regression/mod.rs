//! Linear regression primitives.
//!
//! - [`RidgeRegression`]: L2-penalised least squares via SVD, with
//!   coefficient standard errors.
//! - [`ar_coefficients`]: autoregressive model fitting by least squares or
//!   Burg's method.

pub mod autoregression;
pub mod ridge;

pub use autoregression::{ar_coefficients, ArMethod, ArModel};
pub use ridge::{RidgeFit, RidgeRegression};
